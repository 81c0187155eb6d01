use super::Parser;
use crate::ast::{ListStyle, Node};
use crate::token::{Tag, TagKind, TagMatch};
use crate::tokenizer;

impl<'a> Parser<'a> {
    /// Items start at `[*]` or a line break and run to the next one. Items
    /// holding only whitespace are dropped.
    pub(super) fn parse_list(&mut self, m: &TagMatch<'a>) -> Node {
        let style = ListStyle::from_attribute(m.attributes).unwrap_or(ListStyle::Bullet);
        let mut children = Vec::new();

        self.pos = m.end();
        self.state.enter(TagKind::List);
        log::trace!("List at depth {}", self.state.list_depth());
        loop {
            self.skip_item_delimiters();
            if self.pos >= self.text.len() || self.at_closing_tag() {
                break;
            }

            let start = self.pos;
            self.state.enter(TagKind::ListItem);
            let item = self.parse();
            self.state.leave();

            if item.iter().any(|node| !node.is_blank()) {
                children.push(Node::Bullet(item));
            }
            if self.pos == start {
                break;
            }
        }
        self.state.leave();
        self.close(m);

        Node::List { children, style }
    }

    fn skip_item_delimiters(&mut self) {
        loop {
            let rest = &self.text[self.pos..];
            if rest.starts_with('\n') {
                self.pos += 1;
            } else if rest.starts_with("\r\n") {
                self.pos += 2;
            } else if let Some(marker) = tokenizer::tag_at(self.text, self.pos)
                .filter(|found| found.tag == Tag::opening(TagKind::ListItem))
            {
                self.pos = marker.end();
            } else {
                break;
            }
        }
    }

    fn at_closing_tag(&self) -> bool {
        tokenizer::tag_at(self.text, self.pos)
            .map_or(false, |found| found.tag.closing && self.state.closes(found.tag))
    }
}
