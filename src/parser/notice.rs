use super::Parser;
use crate::ast::{Node, NoticeKind};
use crate::error::MarkupError;
use crate::token::{closing_literal, TagMatch};
use crate::util::starts_with_ignore_ascii_case;

impl<'a> Parser<'a> {
    // 注記
    pub(super) fn parse_notice(&mut self, m: &TagMatch<'a>) -> Option<Node> {
        let kind = NoticeKind::from_tag(m.tag.kind)?;
        let closer = closing_literal(&self.text[m.offset..m.end()]);

        let children = self.parse_body(m);
        if starts_with_ignore_ascii_case(&self.text[self.pos..], &closer) {
            self.pos += closer.len();
        } else {
            self.report(MarkupError::UnclosedTag {
                tag: m.tag.kind,
                offset: m.offset,
            });
        }

        Some(Node::Notice { children, kind })
    }

    /// Off-topic markers carry no structure of their own; the body is
    /// spliced into the surrounding nodes.
    pub(super) fn parse_offtop(&mut self, m: &TagMatch<'a>) -> Vec<Node> {
        self.parse_container(m)
    }
}
