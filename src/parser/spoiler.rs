use super::tag_attributes::parse_title;
use super::Parser;
use crate::ast::Node;
use crate::error::MarkupError;
use crate::token::TagMatch;

impl<'a> Parser<'a> {
    pub(super) fn parse_spoiler(&mut self, m: &TagMatch<'a>) -> Node {
        let title = self.title_attribute(m);
        let children = self.parse_container(m);

        Node::Spoiler {
            children,
            title,
            styled_title: None,
        }
    }

    /// `=Title` payload of `m`. Anything else is reported and dropped.
    pub(super) fn title_attribute(&mut self, m: &TagMatch<'a>) -> Option<String> {
        parse_title(m.attributes).unwrap_or_else(|_| {
            self.report(MarkupError::AttributeParseFailure {
                tag: m.tag.kind,
                raw: m.attributes.unwrap_or_default().to_string(),
                offset: m.offset,
            });
            None
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::ast::Node;
    use crate::error::MarkupError;
    use crate::parser::parse;
    use crate::parser::tests::{nodes, text};
    use crate::token::TagKind;

    #[test]
    fn titled_spoiler() {
        assert_eq!(
            nodes("[spoiler=Details]secret[/spoiler]"),
            vec![Node::Spoiler {
                children: vec![text("secret", 17)],
                title: Some("Details".to_string()),
                styled_title: None,
            }]
        );
    }

    #[test]
    fn untitled_spoiler() {
        assert_eq!(
            nodes("[spoiler]secret[/spoiler]"),
            vec![Node::Spoiler {
                children: vec![text("secret", 9)],
                title: None,
                styled_title: None,
            }]
        );
    }

    #[test]
    fn closer_after_spoiler_is_absorbed() {
        assert_eq!(
            nodes("[spoiler]a[/spoiler][/spoiler]b"),
            vec![
                Node::Spoiler {
                    children: vec![text("a", 9)],
                    title: None,
                    styled_title: None,
                },
                text("b", 30),
            ]
        );
    }

    #[test]
    fn unquoted_title_keeps_inner_quotes() {
        assert_eq!(
            nodes("[spoiler=He said \"hi\"]x[/spoiler]"),
            vec![Node::Spoiler {
                children: vec![text("x", 22)],
                title: Some("He said \"hi\"".to_string()),
                styled_title: None,
            }]
        );
    }

    #[test]
    fn malformed_title() {
        let parsed = parse("[spoiler=\"open]x[/spoiler]");

        assert_eq!(
            parsed.nodes,
            vec![Node::Spoiler {
                children: vec![text("x", 15)],
                title: None,
                styled_title: None,
            }]
        );
        assert_eq!(
            parsed.diagnostics,
            vec![MarkupError::AttributeParseFailure {
                tag: TagKind::Spoiler,
                raw: "=\"open".to_string(),
                offset: 0,
            }]
        );
    }
}
