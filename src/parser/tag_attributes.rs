use once_cell::sync::Lazy;
use regex::Regex;

use crate::util::is_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct UnrecognizedShape;

// 引用符で始まらなければ中の引用符もそのまま
static TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)^=\s*(?:"([^"]*)"|'([^']*)'|([^"'\s].*?))?\s*$"#).unwrap()
});
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^=\s*(\d+)\s*$").unwrap());
static PAIRS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?:\s+[A-Za-z]+\s*=\s*(?:"[^"]*"|[^\s"]+))+\s*$"#).unwrap()
});
static PAIR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([A-Za-z]+)\s*=\s*(?:"([^"]*)"|([^\s"]+))"#).unwrap());

/// `=Title`, `="Title"` or `='Title'`. Blank titles count as absent.
pub(super) fn parse_title(raw: Option<&str>) -> Result<Option<String>, UnrecognizedShape> {
    let Some(raw) = raw.filter(|raw| !is_blank(raw)) else {
        return Ok(None);
    };

    let caps = TITLE_REGEX.captures(raw).ok_or(UnrecognizedShape)?;
    let title = caps
        .get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map_or("", |m| m.as_str())
        .trim();

    Ok((!title.is_empty()).then(|| title.to_string()))
}

pub(super) fn parse_number(raw: Option<&str>) -> Result<Option<u32>, UnrecognizedShape> {
    let Some(raw) = raw.filter(|raw| !is_blank(raw)) else {
        return Ok(None);
    };

    NUMBER_REGEX
        .captures(raw)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .map(Some)
        .ok_or(UnrecognizedShape)
}

pub(super) fn parse_pairs(raw: &str) -> Result<Vec<(&str, &str)>, UnrecognizedShape> {
    if !PAIRS_REGEX.is_match(raw) {
        return Err(UnrecognizedShape);
    }

    Ok(PAIR_REGEX
        .captures_iter(raw)
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str();
            let value = caps.get(2).or_else(|| caps.get(3))?.as_str();
            Some((key, value))
        })
        .collect())
}
