use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::token::{Tag, TagKind, TagMatch};

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(/?)(\*|[A-Za-z]+)([=\s][^\[\]]*)?\]").unwrap());
static TAG_AT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(/?)(\*|[A-Za-z]+)([=\s][^\[\]]*)?\]").unwrap());

const LIST_MARKER: &str = "[*]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDelimiter {
    Newline(usize),
    Marker(usize),
}

/// Earliest recognized tag at or after `from`. Bracketed tokens outside the
/// allow-list are skipped over as ordinary characters.
pub fn next_tag(text: &str, from: usize) -> Option<TagMatch<'_>> {
    TAG_REGEX
        .captures_iter(&text[from..])
        .find_map(|caps| recognize(&caps, from))
}

pub fn tag_at(text: &str, pos: usize) -> Option<TagMatch<'_>> {
    TAG_AT_REGEX
        .captures(&text[pos..])
        .and_then(|caps| recognize(&caps, pos))
}

/// Lookahead for list items: a literal newline or a `[*]` marker, whichever
/// occurs first after `from`. Never scans past the first newline.
pub fn closest_list_delimiter(text: &str, from: usize) -> Option<ListDelimiter> {
    let rest = &text[from..];
    let newline = rest.find('\n');
    let line = newline.map_or(rest, |n| &rest[..n]);

    match line.find(LIST_MARKER) {
        Some(m) => Some(ListDelimiter::Marker(from + m)),
        None => newline.map(|n| ListDelimiter::Newline(from + n)),
    }
}

fn recognize<'a>(caps: &Captures<'a>, base: usize) -> Option<TagMatch<'a>> {
    let whole = caps.get(0)?;
    let kind = TagKind::from_name(caps.get(2)?.as_str())?;
    let closing = caps.get(1).map_or(false, |m| !m.as_str().is_empty());
    let attributes = caps.get(3).map(|m| m.as_str());

    if !kind.accepts(closing, attributes) {
        log::trace!(
            "Skipping {:?} at byte {}: attributes do not fit [{}]",
            whole.as_str(),
            base + whole.start(),
            kind
        );
        return None;
    }

    Some(TagMatch {
        tag: Tag { kind, closing },
        attributes,
        offset: base + whole.start(),
        len: whole.len(),
    })
}
