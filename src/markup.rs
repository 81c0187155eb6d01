use crate::ast::{CodeInfo, Node, QuoteInfo};
use crate::token::TagKind;

/// Writes a parse tree back out as markup. Canonical input survives a
/// parse and re-serialization unchanged; attachment file names and item
/// delimiters other than `[*]` are normalized away.
pub fn to_markup(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_nodes(&mut out, nodes);
    out
}

fn write_nodes(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        write_node(out, node);
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(leaf) => out.push_str(&leaf.content),
        Node::Attachment(id) => out.push_str(&format!("[attachment=\"{id}:\"]")),
        Node::Image(url) => out.push_str(&format!("[img]{url}[/img]")),
        Node::Left(children) => write_container(out, TagKind::Left, None, children),
        Node::Center(children) => write_container(out, TagKind::Center, None, children),
        Node::Right(children) => write_container(out, TagKind::Right, None, children),
        Node::Spoiler {
            children, title, ..
        } => {
            let attributes = title.as_ref().map(|title| format!("={title}"));
            write_container(out, TagKind::Spoiler, attributes, children);
        }
        Node::Quote { children, info, .. } => {
            let attributes = info.as_ref().map(quote_attributes);
            write_container(out, TagKind::Quote, attributes, children);
        }
        Node::Code { child, info } => {
            let attributes = match info {
                CodeInfo::None => None,
                CodeInfo::Title(title) => Some(format!("={title}")),
            };
            write_tag(out, TagKind::Code, attributes.as_deref());
            out.push_str(&child.content);
            write_closer(out, TagKind::Code);
        }
        Node::Hide {
            children,
            reply_threshold,
        } => {
            let attributes = reply_threshold.map(|threshold| format!("={threshold}"));
            write_container(out, TagKind::Hide, attributes, children);
        }
        Node::List { children, style } => {
            let attributes = style.attribute().map(str::to_string);
            write_container(out, TagKind::List, attributes, children);
        }
        Node::Notice { children, kind } => write_container(out, kind.tag(), None, children),
        Node::Bullet(children) => {
            write_tag(out, TagKind::ListItem, None);
            write_nodes(out, children);
        }
    }
}

fn quote_attributes(info: &QuoteInfo) -> String {
    match info {
        QuoteInfo::Title(title) => format!("=\"{title}\""),
        QuoteInfo::Metadata {
            name,
            date,
            post_id,
        } => {
            let mut attributes = format!(" name=\"{name}\"");
            if let Some(date) = date {
                attributes.push_str(&format!(" date=\"{date}\""));
            }
            if let Some(post_id) = post_id {
                attributes.push_str(&format!(" post={post_id}"));
            }
            attributes
        }
    }
}

fn write_container(out: &mut String, kind: TagKind, attributes: Option<String>, children: &[Node]) {
    write_tag(out, kind, attributes.as_deref());
    write_nodes(out, children);
    write_closer(out, kind);
}

fn write_tag(out: &mut String, kind: TagKind, attributes: Option<&str>) {
    out.push('[');
    out.push_str(kind.name());
    out.push_str(attributes.unwrap_or_default());
    out.push(']');
}

fn write_closer(out: &mut String, kind: TagKind) {
    out.push_str("[/");
    out.push_str(kind.name());
    out.push(']');
}
