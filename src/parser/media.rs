use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;

use super::Parser;
use crate::ast::Node;
use crate::error::MarkupError;
use crate::token::TagMatch;
use crate::util::find_ignore_ascii_case;

static ATTACHMENT_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^=\s*"?\s*(\d+):"#).unwrap());

const IMAGE_CLOSER: &str = "[/img]";

/// Characters escaped in image URLs. Everything else, `%` included, is
/// passed through so already-encoded URLs survive.
const URL_ESCAPES: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

impl<'a> Parser<'a> {
    // 添付ファイル
    pub(super) fn parse_attachment(&mut self, m: &TagMatch<'a>) -> Option<Node> {
        let id = m
            .attributes
            .and_then(|raw| ATTACHMENT_ID_REGEX.captures(raw))
            .and_then(|caps| caps[1].parse::<u64>().ok());

        let Some(id) = id else {
            self.report(MarkupError::AttributeParseFailure {
                tag: m.tag.kind,
                raw: m.attributes.unwrap_or_default().to_string(),
                offset: m.offset,
            });
            return None;
        };

        self.pos = m.end();
        Some(Node::Attachment(id))
    }

    // 画像
    pub(super) fn parse_image(&mut self, m: &TagMatch<'a>) -> Option<Node> {
        let body_start = m.end();
        let Some(body_len) = find_ignore_ascii_case(&self.text[body_start..], IMAGE_CLOSER) else {
            self.report(MarkupError::UnclosedTag {
                tag: m.tag.kind,
                offset: m.offset,
            });
            return None;
        };

        let url = self.text[body_start..body_start + body_len].trim();
        self.pos = body_start + body_len + IMAGE_CLOSER.len();

        Some(Node::Image(utf8_percent_encode(url, URL_ESCAPES).to_string()))
    }
}
