use std::fmt;

use serde::Serialize;

use crate::ast::ListStyle;

/// Every tag name the scanner recognizes. Anything else in brackets is text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Quote,
    Spoiler,
    List,
    ListItem,
    Code,
    Left,
    Center,
    Right,
    Hide,
    Offtop,
    Curator,
    Moderator,
    Example,
    Image,
    Attachment,
}

const TAG_NAMES: [(&str, TagKind); 15] = [
    ("quote", TagKind::Quote),
    ("spoiler", TagKind::Spoiler),
    ("list", TagKind::List),
    ("*", TagKind::ListItem),
    ("code", TagKind::Code),
    ("left", TagKind::Left),
    ("center", TagKind::Center),
    ("right", TagKind::Right),
    ("hide", TagKind::Hide),
    ("offtop", TagKind::Offtop),
    ("cur", TagKind::Curator),
    ("mod", TagKind::Moderator),
    ("ex", TagKind::Example),
    ("img", TagKind::Image),
    ("attachment", TagKind::Attachment),
];

impl TagKind {
    pub fn name(self) -> &'static str {
        TAG_NAMES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        TAG_NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, kind)| *kind)
    }

    pub(crate) fn is_container(self) -> bool {
        !matches!(
            self,
            TagKind::ListItem | TagKind::Image | TagKind::Attachment
        )
    }

    /// Per-tag gate on the attribute payload. Tags failing it are not tags at
    /// all, e.g. `[list=x]` or `[/quote=1]` stay literal text.
    pub(crate) fn accepts(self, closing: bool, attributes: Option<&str>) -> bool {
        if closing {
            return attributes.is_none()
                && !matches!(self, TagKind::ListItem | TagKind::Attachment);
        }

        match self {
            TagKind::Quote | TagKind::Spoiler | TagKind::Code | TagKind::Hide => true,
            TagKind::List => ListStyle::from_attribute(attributes).is_some(),
            TagKind::Attachment => attributes.is_some(),
            _ => attributes.is_none(),
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    pub kind: TagKind,
    pub closing: bool,
}

impl Tag {
    pub fn opening(kind: TagKind) -> Self {
        Tag {
            kind,
            closing: false,
        }
    }

    pub fn closing(kind: TagKind) -> Self {
        Tag {
            kind,
            closing: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch<'a> {
    pub tag: Tag,
    /// Raw text between the tag name and `]`, e.g. `=Details` or ` name="x"`.
    pub attributes: Option<&'a str>,
    pub offset: usize,
    pub len: usize,
}

impl TagMatch<'_> {
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

pub(crate) fn closing_literal(opening: &str) -> String {
    format!("[/{}", opening.strip_prefix('[').unwrap_or(opening))
}
