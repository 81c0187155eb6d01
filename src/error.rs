use serde::Serialize;
use thiserror::Error;

use crate::token::TagKind;

/// Local anomalies found while rendering a post. None of them stops the
/// parse: the affected markup degrades to literal text or to a node without
/// the offending metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkupError {
    #[error("[{tag}] at byte {offset} does not reduce to a single text node")]
    StructuralViolation { tag: TagKind, offset: usize },

    #[error("[/{tag}] at byte {offset} has no open container")]
    UnbalancedTag { tag: TagKind, offset: usize },

    #[error("[{tag}] opened at byte {offset} is never closed")]
    UnclosedTag { tag: TagKind, offset: usize },

    #[error("unrecognized attributes {raw:?} on [{tag}] at byte {offset}")]
    AttributeParseFailure {
        tag: TagKind,
        raw: String,
        offset: usize,
    },

    #[error("[{tag}] at byte {offset} exceeds the nesting limit of {limit}")]
    NestingTooDeep {
        tag: TagKind,
        offset: usize,
        limit: usize,
    },

    #[error("{content:?} occurs {occurrences} times in the source text; styling follows the first")]
    SubstringAmbiguity { content: String, occurrences: usize },
}

#[cfg(test)]
mod tests {
    use super::MarkupError;
    use crate::token::TagKind;

    #[test]
    fn messages() {
        assert_eq!(
            MarkupError::UnbalancedTag {
                tag: TagKind::Quote,
                offset: 4
            }
            .to_string(),
            "[/quote] at byte 4 has no open container"
        );
        assert_eq!(
            MarkupError::AttributeParseFailure {
                tag: TagKind::Hide,
                raw: "=ten".to_string(),
                offset: 0
            }
            .to_string(),
            "unrecognized attributes \"=ten\" on [hide] at byte 0"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(MarkupError::UnclosedTag {
            tag: TagKind::ListItem,
            offset: 3,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "unclosed_tag", "tag": "list_item", "offset": 3 })
        );
    }
}
