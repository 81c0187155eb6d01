use super::tag_attributes::{parse_pairs, parse_title, UnrecognizedShape};
use super::Parser;
use crate::ast::{Node, QuoteInfo};
use crate::error::MarkupError;
use crate::token::TagMatch;
use crate::util::is_blank;

impl<'a> Parser<'a> {
    pub(super) fn parse_quote(&mut self, m: &TagMatch<'a>) -> Node {
        let info = match parse_quote_info(m.attributes) {
            Ok(info) => info,
            Err(UnrecognizedShape) => {
                self.report(MarkupError::AttributeParseFailure {
                    tag: m.tag.kind,
                    raw: m.attributes.unwrap_or_default().to_string(),
                    offset: m.offset,
                });
                None
            }
        };
        let children = self.parse_container(m);

        Node::Quote {
            children,
            info,
            styled_title: None,
        }
    }
}

fn parse_quote_info(raw: Option<&str>) -> Result<Option<QuoteInfo>, UnrecognizedShape> {
    let Some(raw) = raw.filter(|raw| !is_blank(raw)) else {
        return Ok(None);
    };

    if raw.starts_with('=') {
        return Ok(parse_title(Some(raw))?.map(QuoteInfo::Title));
    }

    let mut name = None;
    let mut date = None;
    let mut post_id = None;
    for (key, value) in parse_pairs(raw)? {
        match key.to_ascii_lowercase().as_str() {
            "name" => name = Some(value.to_string()),
            "date" => date = Some(value.to_string()),
            "post" => post_id = Some(value.parse::<u64>().map_err(|_| UnrecognizedShape)?),
            _ => log::trace!("Ignoring quote attribute {:?}", key),
        }
    }

    let name = name.ok_or(UnrecognizedShape)?;
    Ok(Some(QuoteInfo::Metadata {
        name,
        date,
        post_id,
    }))
}
