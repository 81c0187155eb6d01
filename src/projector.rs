use serde::Serialize;

use crate::ast::{CodeInfo, ListStyle, Node, NoticeKind, QuoteInfo, TextLeaf};
use crate::rich_text::{Attributes, StyledText};

/// Presentation tree handed to the view layer. Ranges are gone; every piece
/// of text is fully styled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PostElement {
    Text {
        text: StyledText,
    },
    Attachment {
        id: u64,
    },
    Image {
        url: String,
    },
    Left {
        children: Vec<PostElement>,
    },
    Center {
        children: Vec<PostElement>,
    },
    Right {
        children: Vec<PostElement>,
    },
    Spoiler {
        title: Option<StyledText>,
        children: Vec<PostElement>,
    },
    Quote {
        info: Option<QuoteInfo>,
        title: Option<StyledText>,
        children: Vec<PostElement>,
    },
    Code {
        info: CodeInfo,
        text: StyledText,
    },
    Hide {
        reply_threshold: Option<u32>,
        children: Vec<PostElement>,
    },
    List {
        style: ListStyle,
        children: Vec<PostElement>,
    },
    Notice {
        kind: NoticeKind,
        children: Vec<PostElement>,
    },
    Bullet {
        children: Vec<PostElement>,
    },
}

impl PostElement {
    pub fn children(&self) -> &[PostElement] {
        match self {
            PostElement::Text { .. }
            | PostElement::Attachment { .. }
            | PostElement::Image { .. }
            | PostElement::Code { .. } => &[],
            PostElement::Left { children }
            | PostElement::Center { children }
            | PostElement::Right { children }
            | PostElement::Spoiler { children, .. }
            | PostElement::Quote { children, .. }
            | PostElement::Hide { children, .. }
            | PostElement::List { children, .. }
            | PostElement::Notice { children, .. }
            | PostElement::Bullet { children } => children,
        }
    }

    /// Body text of this element and its descendants, one line per list
    /// item. Titles, URLs and attachment ids are not part of it.
    pub fn plain_text(&self) -> String {
        match self {
            PostElement::Text { text } | PostElement::Code { text, .. } => text.plain_text(),
            PostElement::Bullet { children } => {
                let mut text = flatten_text(children);
                text.push('\n');
                text
            }
            _ => flatten_text(self.children()),
        }
    }
}

pub fn flatten_text(elements: &[PostElement]) -> String {
    elements.iter().map(PostElement::plain_text).collect()
}

pub fn project(nodes: Vec<Node>, baseline: &Attributes) -> Vec<PostElement> {
    nodes
        .into_iter()
        .map(|node| project_node(node, baseline))
        .collect()
}

fn project_node(node: Node, baseline: &Attributes) -> PostElement {
    match node {
        Node::Text(leaf) => PostElement::Text {
            text: resolve(leaf, baseline),
        },
        Node::Attachment(id) => PostElement::Attachment { id },
        Node::Image(url) => PostElement::Image { url },
        Node::Left(children) => PostElement::Left {
            children: project(children, baseline),
        },
        Node::Center(children) => PostElement::Center {
            children: project(children, baseline),
        },
        Node::Right(children) => PostElement::Right {
            children: project(children, baseline),
        },
        Node::Spoiler {
            children,
            title,
            styled_title,
        } => PostElement::Spoiler {
            title: styled_title
                .or_else(|| title.map(|title| StyledText::plain(&title, baseline))),
            children: project(children, baseline),
        },
        Node::Quote {
            children,
            info,
            styled_title,
        } => PostElement::Quote {
            title: styled_title.or_else(|| {
                info.as_ref()
                    .map(|info| StyledText::plain(info.title(), baseline))
            }),
            info,
            children: project(children, baseline),
        },
        Node::Code { child, info } => PostElement::Code {
            info,
            text: resolve(child, baseline),
        },
        Node::Hide {
            children,
            reply_threshold,
        } => PostElement::Hide {
            reply_threshold,
            children: project(children, baseline),
        },
        Node::List { children, style } => PostElement::List {
            style,
            children: project(children, baseline),
        },
        Node::Notice { children, kind } => PostElement::Notice {
            kind,
            children: project(children, baseline),
        },
        Node::Bullet(children) => PostElement::Bullet {
            children: project(children, baseline),
        },
    }
}

fn resolve(leaf: TextLeaf, baseline: &Attributes) -> StyledText {
    leaf.styled
        .unwrap_or_else(|| StyledText::plain(&leaf.content, baseline))
}
