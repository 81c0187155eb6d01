pub mod ast;
pub mod config;
pub mod error;
pub mod markup;
pub mod parser;
pub mod projector;
pub mod reconciler;
pub mod rich_text;
pub mod token;
pub mod tokenizer;
mod util;

use rayon::prelude::*;
use serde::Serialize;

pub use config::{Config, ConfigError};
pub use error::MarkupError;
pub use projector::PostElement;
pub use rich_text::{RichText, StyledText};

use parser::Parsed;
use reconciler::Reconciler;

/// One rendered post: the presentation tree plus every anomaly met while
/// building it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPost {
    pub elements: Vec<PostElement>,
    pub diagnostics: Vec<MarkupError>,
}

pub fn render_post(source: &RichText, config: &Config) -> RenderedPost {
    let Parsed {
        mut nodes,
        mut diagnostics,
    } = parser::parse_with(&source.text, &config.parser);

    let mut reconciler = Reconciler::new(source, config);
    reconciler.reconcile(&mut nodes);
    diagnostics.extend(reconciler.into_diagnostics());

    RenderedPost {
        elements: projector::project(nodes, &config.baseline.attributes()),
        diagnostics,
    }
}

/// Renders every post of a page independently. Output order matches input.
pub fn render_page(posts: &[RichText], config: &Config) -> Vec<RenderedPost> {
    log::debug!("Rendering {} posts", posts.len());
    posts
        .par_iter()
        .map(|post| render_post(post, config))
        .collect()
}

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{init_logger, render_page, render_post, Config, PostElement, RichText};
    use crate::ast::ListStyle;
    use crate::error::MarkupError;
    use crate::projector::flatten_text;
    use crate::rich_text::{Attributes, Font, StyleRun, StyledSegment, StyledText, TextRange};
    use crate::token::TagKind;

    #[test]
    fn styled_quote() {
        init_logger();
        let config = Config::default();
        let baseline = config.baseline.attributes();
        let bold = Attributes {
            font: Some(Font {
                bold: true,
                ..Font::default()
            }),
            ..Attributes::default()
        };
        let source = RichText::new(
            "[quote]very bold[/quote]",
            vec![StyleRun {
                range: TextRange::new(12, 4),
                attributes: bold.clone(),
            }],
        );

        let rendered = render_post(&source, &config);
        assert_eq!(rendered.diagnostics, vec![]);
        assert_eq!(
            rendered.elements,
            vec![PostElement::Quote {
                info: None,
                title: None,
                children: vec![PostElement::Text {
                    text: StyledText {
                        segments: vec![
                            StyledSegment {
                                text: "very ".to_string(),
                                attributes: baseline.clone(),
                            },
                            StyledSegment {
                                text: "bold".to_string(),
                                attributes: bold.with_baseline(&baseline),
                            },
                        ],
                    },
                }],
            }]
        );
    }

    #[test]
    fn diagnostics_from_every_stage() {
        let rendered = render_post(
            &RichText::plain("x [hide=many]x[/hide][/quote]"),
            &Config::default(),
        );

        assert_eq!(
            rendered.diagnostics,
            vec![
                MarkupError::AttributeParseFailure {
                    tag: TagKind::Hide,
                    raw: "=many".to_string(),
                    offset: 2,
                },
                MarkupError::UnbalancedTag {
                    tag: TagKind::Quote,
                    offset: 21,
                },
                MarkupError::SubstringAmbiguity {
                    content: "x".to_string(),
                    occurrences: 2,
                },
            ]
        );
    }

    #[test]
    fn page_keeps_post_order() {
        let posts: Vec<RichText> = (0..32)
            .map(|i| RichText::plain(format!("[list][*]post {i}[/list]")))
            .collect();
        let rendered = render_page(&posts, &Config::default());

        assert_eq!(rendered.len(), posts.len());
        for (i, post) in rendered.iter().enumerate() {
            assert!(matches!(
                post.elements[0],
                PostElement::List {
                    style: ListStyle::Bullet,
                    ..
                }
            ));
            assert_eq!(flatten_text(&post.elements), format!("post {i}\n"));
        }
    }
}
