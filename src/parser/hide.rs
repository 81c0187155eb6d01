use super::tag_attributes::parse_number;
use super::Parser;
use crate::ast::Node;
use crate::error::MarkupError;
use crate::token::TagMatch;

impl<'a> Parser<'a> {
    pub(super) fn parse_hide(&mut self, m: &TagMatch<'a>) -> Node {
        let reply_threshold = parse_number(m.attributes).unwrap_or_else(|_| {
            self.report(MarkupError::AttributeParseFailure {
                tag: m.tag.kind,
                raw: m.attributes.unwrap_or_default().to_string(),
                offset: m.offset,
            });
            None
        });
        let children = self.parse_container(m);

        Node::Hide {
            children,
            reply_threshold,
        }
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
    fn hide_with_threshold() {
        assert_eq!(
            nodes("[hide=10]secret[/hide]"),
            vec![Node::Hide {
                children: vec![text("secret", 9)],
                reply_threshold: Some(10),
            }]
        );
        assert_eq!(
            nodes("[hide]secret[/hide]"),
            vec![Node::Hide {
                children: vec![text("secret", 6)],
                reply_threshold: None,
            }]
        );
    }

    #[test]
    fn non_numeric_threshold() {
        let parsed = parse("[hide=ten]secret[/hide]");

        assert_eq!(
            parsed.nodes,
            vec![Node::Hide {
                children: vec![text("secret", 10)],
                reply_threshold: None,
            }]
        );
        assert_eq!(
            parsed.diagnostics,
            vec![MarkupError::AttributeParseFailure {
                tag: TagKind::Hide,
                raw: "=ten".to_string(),
                offset: 0,
            }]
        );
    }
}
