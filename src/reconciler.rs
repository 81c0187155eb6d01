use crate::ast::{Node, TextLeaf};
use crate::config::{Config, Locate};
use crate::error::MarkupError;
use crate::rich_text::{Attributes, RichText, StyledText, TextRange};
use crate::util::is_blank;

/// Styles `range` of the source text. Every byte is covered by exactly one
/// segment; overlapping runs are merged in input order, later runs winning.
pub fn style_range(source: &RichText, range: TextRange, baseline: &Attributes) -> StyledText {
    let mut bounds = vec![range.offset, range.end()];
    for run in &source.runs {
        if let Some(overlap) = run.range.intersection(range) {
            bounds.push(overlap.offset);
            bounds.push(overlap.end());
        }
    }
    bounds.retain(|&bound| source.text.is_char_boundary(bound));
    bounds.sort_unstable();
    bounds.dedup();

    let mut styled = StyledText::default();
    for window in bounds.windows(2) {
        let piece = TextRange::from_bounds(window[0], window[1]);
        let mut attributes = Attributes::default();
        for run in &source.runs {
            if run.range.intersection(piece).is_some() {
                attributes.merge(&run.attributes);
            }
        }
        styled.push(
            &source.text[piece.as_range()],
            attributes.with_baseline(baseline),
        );
    }
    styled
}

/// Carries upstream styling over to the text leaves and titles of a parse
/// tree built from the same rich text.
pub struct Reconciler<'a> {
    source: &'a RichText,
    baseline: Attributes,
    locate: Locate,
    diagnostics: Vec<MarkupError>,
}

impl<'a> Reconciler<'a> {
    pub fn new(source: &'a RichText, config: &Config) -> Self {
        Reconciler {
            source,
            baseline: config.baseline.attributes(),
            locate: config.reconciler.locate,
            diagnostics: Vec::new(),
        }
    }

    pub fn reconcile(&mut self, nodes: &mut [Node]) {
        for node in nodes {
            self.reconcile_node(node);
        }
    }

    pub fn into_diagnostics(self) -> Vec<MarkupError> {
        self.diagnostics
    }

    fn reconcile_node(&mut self, node: &mut Node) {
        match node {
            Node::Text(leaf) | Node::Code { child: leaf, .. } => self.reconcile_leaf(leaf),
            Node::Attachment(_) | Node::Image(_) => {}
            Node::Spoiler {
                children,
                title,
                styled_title,
            } => {
                *styled_title = title.as_deref().map(|title| self.style(title, None));
                self.reconcile(children);
            }
            Node::Quote {
                children,
                info,
                styled_title,
            } => {
                *styled_title = info.as_ref().map(|info| self.style(info.title(), None));
                self.reconcile(children);
            }
            Node::Left(children)
            | Node::Center(children)
            | Node::Right(children)
            | Node::Bullet(children)
            | Node::Hide { children, .. }
            | Node::List { children, .. }
            | Node::Notice { children, .. } => self.reconcile(children),
        }
    }

    fn reconcile_leaf(&mut self, leaf: &mut TextLeaf) {
        leaf.styled = Some(self.style(&leaf.content, Some(leaf.range)));
    }

    fn style(&mut self, content: &str, captured: Option<TextRange>) -> StyledText {
        match self.find(content, captured) {
            Some(range) => style_range(self.source, range, &self.baseline),
            None => {
                log::trace!("{:?} not found in source text, using baseline", content);
                StyledText::plain(content, &self.baseline)
            }
        }
    }

    fn find(&mut self, content: &str, captured: Option<TextRange>) -> Option<TextRange> {
        if content.is_empty() {
            return None;
        }

        if self.locate == Locate::CapturedRange {
            let text = &self.source.text;
            if let Some(range) = captured.filter(|range| text.get(range.as_range()) == Some(content))
            {
                return Some(range);
            }
        }

        let mut found = self.source.text.match_indices(content).map(|(i, _)| i);
        let first = found.next()?;
        let occurrences = 1 + found.count();
        if occurrences > 1 && !is_blank(content) {
            let warning = MarkupError::SubstringAmbiguity {
                content: content.to_string(),
                occurrences,
            };
            log::warn!("{}", warning);
            self.diagnostics.push(warning);
        }

        Some(TextRange::new(first, content.len()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{style_range, Reconciler};
    use crate::ast::{Node, TextLeaf};
    use crate::config::{Config, Locate};
    use crate::error::MarkupError;
    use crate::parser::parse;
    use crate::rich_text::{
        Attributes, Color, Font, RichText, StyleRun, StyledSegment, StyledText, TextRange,
    };

    fn baseline() -> Attributes {
        Config::default().baseline.attributes()
    }

    fn bold() -> Attributes {
        Attributes {
            font: Some(Font {
                bold: true,
                ..Font::default()
            }),
            ..Attributes::default()
        }
    }

    fn segment(text: &str, attributes: Attributes) -> StyledSegment {
        StyledSegment {
            text: text.to_string(),
            attributes: attributes.with_baseline(&baseline()),
        }
    }

    fn styled_leaf(node: &Node) -> &StyledText {
        match node {
            Node::Text(TextLeaf {
                styled: Some(styled),
                ..
            }) => styled,
            other => panic!("expected a reconciled text leaf, got {:?}", other),
        }
    }

    #[test]
    fn bold_run_lands_on_its_word() {
        let source = RichText::new(
            "this is bold text",
            vec![StyleRun {
                range: TextRange::new(8, 4),
                attributes: bold(),
            }],
        );
        let mut nodes = parse(&source.text).nodes;
        let mut reconciler = Reconciler::new(&source, &Config::default());
        reconciler.reconcile(&mut nodes);

        assert_eq!(
            styled_leaf(&nodes[0]).segments,
            vec![
                segment("this is ", Attributes::default()),
                segment("bold", bold()),
                segment(" text", Attributes::default()),
            ]
        );
        assert_eq!(reconciler.into_diagnostics(), vec![]);
    }

    #[test]
    fn overlapping_runs_merge() {
        let red = Attributes {
            foreground: Some(Color::from("red")),
            ..Attributes::default()
        };
        let source = RichText::new(
            "abcdef",
            vec![
                StyleRun {
                    range: TextRange::new(0, 4),
                    attributes: bold(),
                },
                StyleRun {
                    range: TextRange::new(2, 4),
                    attributes: red.clone(),
                },
            ],
        );
        let mut both = bold();
        both.merge(&red);

        assert_eq!(
            style_range(&source, TextRange::new(1, 5), &baseline()).segments,
            vec![
                segment("b", bold()),
                segment("cd", both),
                segment("ef", red),
            ]
        );
    }

    #[test]
    fn runs_off_char_boundaries_are_clipped() {
        let source = RichText::new(
            "привет",
            vec![StyleRun {
                range: TextRange::new(1, 4),
                attributes: bold(),
            }],
        );
        let styled = style_range(&source, TextRange::new(0, source.text.len()), &baseline());

        assert_eq!(styled.plain_text(), "привет");
    }

    #[test]
    fn titles_are_styled() {
        let source = RichText::new(
            "[spoiler=Details]x[/spoiler]",
            vec![StyleRun {
                range: TextRange::new(9, 7),
                attributes: bold(),
            }],
        );
        let mut nodes = parse(&source.text).nodes;
        Reconciler::new(&source, &Config::default()).reconcile(&mut nodes);

        let Node::Spoiler { styled_title, .. } = &nodes[0] else {
            panic!("expected a spoiler, got {:?}", nodes[0]);
        };
        assert_eq!(
            styled_title.as_ref().map(|title| title.segments.clone()),
            Some(vec![segment("Details", bold())])
        );
    }

    #[test]
    fn repeated_content_follows_locate_strategy() {
        let source = RichText::new(
            "word [quote]word[/quote]",
            vec![StyleRun {
                range: TextRange::new(12, 4),
                attributes: bold(),
            }],
        );

        let mut nodes = parse(&source.text).nodes;
        let mut reconciler = Reconciler::new(&source, &Config::default());
        reconciler.reconcile(&mut nodes);
        let Node::Quote { children, .. } = &nodes[1] else {
            panic!("expected a quote, got {:?}", nodes[1]);
        };
        assert_eq!(
            styled_leaf(&children[0]).segments,
            vec![segment("word", Attributes::default())]
        );
        assert_eq!(
            reconciler.into_diagnostics(),
            vec![MarkupError::SubstringAmbiguity {
                content: "word".to_string(),
                occurrences: 2,
            }]
        );

        let mut config = Config::default();
        config.reconciler.locate = Locate::CapturedRange;
        let mut nodes = parse(&source.text).nodes;
        let mut reconciler = Reconciler::new(&source, &config);
        reconciler.reconcile(&mut nodes);
        let Node::Quote { children, .. } = &nodes[1] else {
            panic!("expected a quote, got {:?}", nodes[1]);
        };
        assert_eq!(
            styled_leaf(&children[0]).segments,
            vec![segment("word", bold())]
        );
        assert_eq!(reconciler.into_diagnostics(), vec![]);
    }

    #[test]
    fn missing_content_gets_baseline() {
        let source = RichText::plain("abc");
        let mut reconciler = Reconciler::new(&source, &Config::default());
        let mut nodes = vec![Node::Text(TextLeaf::new("zzz", TextRange::new(0, 3)))];
        reconciler.reconcile(&mut nodes);

        assert_eq!(
            styled_leaf(&nodes[0]).segments,
            vec![segment("zzz", Attributes::default())]
        );
    }

    #[test]
    fn runs_past_the_end_of_text_are_clipped() {
        let source = RichText::new(
            "abc",
            vec![
                StyleRun {
                    range: TextRange::new(usize::MAX, 2),
                    attributes: bold(),
                },
                StyleRun {
                    range: TextRange::new(1, usize::MAX),
                    attributes: bold(),
                },
            ],
        );
        let mut nodes = parse(&source.text).nodes;
        Reconciler::new(&source, &Config::default()).reconcile(&mut nodes);

        assert_eq!(
            styled_leaf(&nodes[0]).segments,
            vec![
                segment("a", Attributes::default()),
                segment("bc", bold()),
            ]
        );
    }
}
