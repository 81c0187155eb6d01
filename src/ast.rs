use serde::Serialize;

use crate::rich_text::{StyledText, TextRange};
use crate::token::TagKind;
use crate::util::is_blank;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(TextLeaf),
    Attachment(u64),
    Image(String),

    // Alignment
    Left(Vec<Node>),
    Center(Vec<Node>),
    Right(Vec<Node>),

    Spoiler {
        children: Vec<Node>,
        title: Option<String>,
        styled_title: Option<StyledText>,
    },
    Quote {
        children: Vec<Node>,
        info: Option<QuoteInfo>,
        styled_title: Option<StyledText>,
    },
    Code {
        child: TextLeaf,
        info: CodeInfo,
    },
    Hide {
        children: Vec<Node>,
        reply_threshold: Option<u32>,
    },
    List {
        children: Vec<Node>,
        style: ListStyle,
    },
    Notice {
        children: Vec<Node>,
        kind: NoticeKind,
    },
    Bullet(Vec<Node>),
}

impl Node {
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(_) | Node::Attachment(_) | Node::Image(_) | Node::Code { .. } => &[],
            Node::Left(children)
            | Node::Center(children)
            | Node::Right(children)
            | Node::Bullet(children)
            | Node::Spoiler { children, .. }
            | Node::Quote { children, .. }
            | Node::Hide { children, .. }
            | Node::List { children, .. }
            | Node::Notice { children, .. } => children,
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, Node::Text(leaf) if is_blank(&leaf.content))
    }
}

/// Plain text captured by the parser, with the byte range it was cut from.
/// `styled` is filled in by reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLeaf {
    pub content: String,
    pub range: TextRange,
    pub styled: Option<StyledText>,
}

impl TextLeaf {
    pub fn new(content: impl Into<String>, range: TextRange) -> Self {
        TextLeaf {
            content: content.into(),
            range,
            styled: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteInfo {
    Title(String),
    Metadata {
        name: String,
        date: Option<String>,
        post_id: Option<u64>,
    },
}

impl QuoteInfo {
    /// Text shown as the quote header: the title, or the quoted author.
    pub fn title(&self) -> &str {
        match self {
            QuoteInfo::Title(title) => title,
            QuoteInfo::Metadata { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeInfo {
    #[default]
    None,
    Title(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    Bullet,
    Numeric,
    RomanUpper,
    RomanLower,
    Alpha,
}

impl ListStyle {
    pub(crate) fn from_attribute(attribute: Option<&str>) -> Option<Self> {
        match attribute {
            None => Some(ListStyle::Bullet),
            Some("=1") => Some(ListStyle::Numeric),
            Some("=I") => Some(ListStyle::RomanUpper),
            Some("=i") => Some(ListStyle::RomanLower),
            Some("=A") => Some(ListStyle::Alpha),
            Some(_) => None,
        }
    }

    pub(crate) fn attribute(self) -> Option<&'static str> {
        match self {
            ListStyle::Bullet => None,
            ListStyle::Numeric => Some("=1"),
            ListStyle::RomanUpper => Some("=I"),
            ListStyle::RomanLower => Some("=i"),
            ListStyle::Alpha => Some("=A"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Curator,
    Moderator,
    Example,
}

impl NoticeKind {
    pub(crate) fn from_tag(kind: TagKind) -> Option<Self> {
        match kind {
            TagKind::Curator => Some(NoticeKind::Curator),
            TagKind::Moderator => Some(NoticeKind::Moderator),
            TagKind::Example => Some(NoticeKind::Example),
            _ => None,
        }
    }

    pub(crate) fn tag(self) -> TagKind {
        match self {
            NoticeKind::Curator => TagKind::Curator,
            NoticeKind::Moderator => TagKind::Moderator,
            NoticeKind::Example => TagKind::Example,
        }
    }
}
