mod align;
mod code;
mod hide;
mod list;
mod media;
mod notice;
mod quote;
mod spoiler;
mod state;
mod tag_attributes;

pub use state::ParserState;

use crate::ast::{Node, TextLeaf};
use crate::config::ParserConfig;
use crate::error::MarkupError;
use crate::rich_text::TextRange;
use crate::token::{Tag, TagKind, TagMatch};
use crate::tokenizer::{self, ListDelimiter};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parsed {
    pub nodes: Vec<Node>,
    pub diagnostics: Vec<MarkupError>,
}

pub fn parse(text: &str) -> Parsed {
    parse_with(text, &ParserConfig::default())
}

pub fn parse_with(text: &str, config: &ParserConfig) -> Parsed {
    let mut parser = Parser::new(text, config.max_depth);
    let nodes = parser.parse();
    log::debug!(
        "Parsed {} top-level nodes from {} bytes with {} diagnostics",
        nodes.len(),
        text.len(),
        parser.diagnostics.len()
    );

    Parsed {
        nodes,
        diagnostics: parser.diagnostics,
    }
}

pub(crate) struct Parser<'a> {
    text: &'a str,
    pos: usize,
    state: ParserState,
    max_depth: usize,
    diagnostics: Vec<MarkupError>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, max_depth: usize) -> Self {
        Parser {
            text,
            pos: 0,
            state: ParserState::default(),
            max_depth,
            diagnostics: Vec::new(),
        }
    }

    /// Parses from the cursor until the end of input or a tag that ends the
    /// current body. Such a tag is left unconsumed for the caller.
    fn parse(&mut self) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut text_start = self.pos;
        let mut search_from = self.pos;

        loop {
            // 項目は改行でも終わる
            let newline = match self.item_delimiter(search_from) {
                Some(ListDelimiter::Newline(newline)) => Some(newline),
                _ => None,
            };
            let scanned: &'a str = &self.text[..newline.unwrap_or(self.text.len())];
            let found = tokenizer::next_tag(scanned, search_from);

            if let (None, Some(newline)) = (&found, newline) {
                let end = if self.text[..newline].ends_with('\r') {
                    (newline - 1).max(text_start)
                } else {
                    newline
                };
                self.push_text(&mut nodes, text_start, end);
                self.pos = end;
                return nodes;
            }

            let Some(m) = found else {
                self.push_text(&mut nodes, text_start, self.text.len());
                self.pos = self.text.len();
                return nodes;
            };

            if m.tag.closing || m.tag.kind == TagKind::ListItem {
                if self.state.closes(m.tag) {
                    self.push_text(&mut nodes, text_start, m.offset);
                    self.pos = m.offset;
                    return nodes;
                }

                if m.tag == Tag::closing(TagKind::Spoiler) && self.state.spoiler_depth() == 0 {
                    log::debug!("Absorbing unmatched [/spoiler] at byte {}", m.offset);
                    self.push_text(&mut nodes, text_start, m.offset);
                    text_start = m.end();
                } else if m.tag.closing {
                    self.report(MarkupError::UnbalancedTag {
                        tag: m.tag.kind,
                        offset: m.offset,
                    });
                }
                search_from = m.end();
                continue;
            }

            self.pos = m.offset;
            match self.dispatch(&m) {
                Some(parsed) => {
                    self.push_text(&mut nodes, text_start, m.offset);
                    nodes.extend(parsed);
                    text_start = self.pos;
                    search_from = self.pos;
                }
                // The tag stays in place as literal text.
                None => search_from = m.end(),
            }
        }
    }

    /// Next item boundary when the body being parsed is a list item. Bodies
    /// of containers nested inside an item keep their line breaks.
    fn item_delimiter(&self, from: usize) -> Option<ListDelimiter> {
        if !self.state.in_list() || self.state.current_tag() != Some(TagKind::ListItem) {
            return None;
        }
        tokenizer::closest_list_delimiter(self.text, from)
    }

    fn dispatch(&mut self, m: &TagMatch<'a>) -> Option<Vec<Node>> {
        if m.tag.kind.is_container() && self.state.depth() >= self.max_depth {
            self.report(MarkupError::NestingTooDeep {
                tag: m.tag.kind,
                offset: m.offset,
                limit: self.max_depth,
            });
            return None;
        }

        log::trace!("Parsing [{}] at byte {}", m.tag.kind, m.offset);
        let node = match m.tag.kind {
            TagKind::Quote => self.parse_quote(m),
            TagKind::Spoiler => self.parse_spoiler(m),
            TagKind::Code => self.parse_code(m),
            TagKind::Hide => self.parse_hide(m),
            TagKind::List => self.parse_list(m),
            TagKind::Curator | TagKind::Moderator | TagKind::Example => self.parse_notice(m)?,
            TagKind::Left | TagKind::Center | TagKind::Right => self.parse_alignment(m)?,
            TagKind::Offtop => return Some(self.parse_offtop(m)),
            TagKind::Image => self.parse_image(m)?,
            TagKind::Attachment => self.parse_attachment(m)?,
            TagKind::ListItem => return None,
        };

        Some(vec![node])
    }

    fn parse_body(&mut self, m: &TagMatch<'a>) -> Vec<Node> {
        self.pos = m.end();
        self.state.enter(m.tag.kind);
        let children = self.parse();
        self.state.leave();
        children
    }

    fn parse_container(&mut self, m: &TagMatch<'a>) -> Vec<Node> {
        let children = self.parse_body(m);
        self.close(m);
        children
    }

    fn close(&mut self, opening: &TagMatch<'a>) -> bool {
        match tokenizer::tag_at(self.text, self.pos) {
            Some(closing) if closing.tag == Tag::closing(opening.tag.kind) => {
                self.pos = closing.end();
                true
            }
            _ => {
                self.report(MarkupError::UnclosedTag {
                    tag: opening.tag.kind,
                    offset: opening.offset,
                });
                false
            }
        }
    }

    fn push_text(&self, nodes: &mut Vec<Node>, start: usize, end: usize) {
        if start < end {
            nodes.push(Node::Text(TextLeaf::new(
                &self.text[start..end],
                TextRange::from_bounds(start, end),
            )));
        }
    }

    fn report(&mut self, error: MarkupError) {
        log::warn!("{}", error);
        self.diagnostics.push(error);
    }
}
