use super::Parser;
use crate::ast::Node;
use crate::token::{TagKind, TagMatch};

impl<'a> Parser<'a> {
    pub(super) fn parse_alignment(&mut self, m: &TagMatch<'a>) -> Option<Node> {
        let wrap: fn(Vec<Node>) -> Node = match m.tag.kind {
            TagKind::Left => Node::Left,
            TagKind::Center => Node::Center,
            TagKind::Right => Node::Right,
            _ => return None,
        };

        Some(wrap(self.parse_container(m)))
    }
}
