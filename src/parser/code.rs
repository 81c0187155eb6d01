use super::Parser;
use crate::ast::{CodeInfo, Node, TextLeaf};
use crate::error::MarkupError;
use crate::rich_text::TextRange;
use crate::token::TagMatch;

impl<'a> Parser<'a> {
    /// Code keeps exactly one text child. A body that parses into anything
    /// else is reported and kept verbatim.
    pub(super) fn parse_code(&mut self, m: &TagMatch<'a>) -> Node {
        let info = self
            .title_attribute(m)
            .map_or(CodeInfo::None, CodeInfo::Title);

        let mut children = self.parse_body(m).into_iter();
        let body = TextRange::from_bounds(m.end(), self.pos);
        self.close(m);

        let child = match (children.next(), children.next()) {
            (None, _) => TextLeaf::new("", TextRange::new(body.offset, 0)),
            (Some(Node::Text(leaf)), None) => leaf,
            _ => {
                self.report(MarkupError::StructuralViolation {
                    tag: m.tag.kind,
                    offset: m.offset,
                });
                TextLeaf::new(&self.text[body.as_range()], body)
            }
        };

        Node::Code { child, info }
    }
}
