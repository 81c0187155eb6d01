use crate::token::{Tag, TagKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    open: Vec<TagKind>,
    spoiler_depth: usize,
    list_depth: usize,
}

impl ParserState {
    pub fn current_tag(&self) -> Option<TagKind> {
        self.open.last().copied()
    }

    pub fn spoiler_depth(&self) -> usize {
        self.spoiler_depth
    }

    pub fn list_depth(&self) -> usize {
        self.list_depth
    }

    pub fn in_list(&self) -> bool {
        self.list_depth > 0
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub(crate) fn enter(&mut self, kind: TagKind) {
        match kind {
            TagKind::Spoiler => self.spoiler_depth += 1,
            TagKind::List => self.list_depth += 1,
            _ => {}
        }
        self.open.push(kind);
    }

    pub(crate) fn leave(&mut self) -> Option<TagKind> {
        let kind = self.open.pop()?;
        match kind {
            TagKind::Spoiler => self.spoiler_depth = self.spoiler_depth.saturating_sub(1),
            TagKind::List => self.list_depth = self.list_depth.saturating_sub(1),
            _ => {}
        }
        Some(kind)
    }

    /// Whether `tag` ends the body being parsed: a closer for any open
    /// container, or `[*]` inside a list item.
    pub(crate) fn closes(&self, tag: Tag) -> bool {
        if tag.kind == TagKind::ListItem {
            return !tag.closing && self.current_tag() == Some(TagKind::ListItem);
        }
        tag.closing && self.open.contains(&tag.kind)
    }
}
