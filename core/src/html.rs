use std::mem;

use log::debug;

use crate::dom::{self, AttrMap, Node};
use crate::error::ParseError;

/// Parses a markup string into a tree.
///
/// The input is split on every `<`; each fragment is split once on the first
/// `>` into the tag text and the trailing inter-tag text. Opening tags push
/// onto an explicit stack, closing tags pop it. Closing tag names are never
/// checked against the element being closed, so `<div></span>` is accepted.
/// Self-closing tags are not recognized either: `<br/>` parses as an opening
/// tag named `br/` and will leave the stack unbalanced unless a closer
/// follows. Returns `Ok(None)` when the input contains no opening tag at all;
/// the only error is a closing tag while no element is open.
pub fn parse(source: &str) -> Result<Option<Node>, ParseError> {
    let mut builder = TreeBuilder::new();

    for fragment in source.split('<') {
        let (tag_text, trailing_text) = match fragment.split_once('>') {
            Some(pair) => pair,
            None => (fragment, ""),
        };
        if tag_text.is_empty() {
            continue;
        }
        if tag_text.starts_with('/') {
            builder.close_element()?;
        } else {
            builder.open_element(tag_text);
        }
        if !trailing_text.is_empty() {
            builder.append_text(trailing_text);
        }
    }

    Ok(builder.finish())
}

/// Extracts `class` and `id` attributes from the raw text of an opening tag.
///
/// Scans for *token `=` quoted-value* at any position. Either quote kind
/// opens or closes a value, so mismatched pairs like `class='a b"` still
/// match; empty values never do. Attribute names other than `class` and `id`
/// are discarded, and a repeated name overwrites the earlier value. The
/// quoted value is split on literal spaces into its token list.
pub fn parse_attributes(tag_text: &str) -> AttrMap {
    let mut attributes = AttrMap::new();
    let chars: Vec<char> = tag_text.chars().collect();
    // Start of the text not yet claimed by an earlier match.
    let mut floor = 0;
    let mut pos = 0;

    while pos < chars.len() {
        if chars[pos] != '=' {
            pos += 1;
            continue;
        }

        // Name: the run of non-whitespace ending just before the `=`,
        // whitespace between the two allowed.
        let mut name_end = pos;
        while name_end > floor && chars[name_end - 1].is_whitespace() {
            name_end -= 1;
        }
        let mut name_start = name_end;
        while name_start > floor && !chars[name_start - 1].is_whitespace() {
            name_start -= 1;
        }
        if name_start == name_end {
            pos += 1;
            continue;
        }

        // Value: optional whitespace, a quote, one or more non-quote
        // characters, a quote.
        let mut value_start = pos + 1;
        while value_start < chars.len() && chars[value_start].is_whitespace() {
            value_start += 1;
        }
        if value_start >= chars.len() || !is_quote(chars[value_start]) {
            pos += 1;
            continue;
        }
        let mut value_end = value_start + 1;
        while value_end < chars.len() && !is_quote(chars[value_end]) {
            value_end += 1;
        }
        if value_end >= chars.len() || value_end == value_start + 1 {
            pos += 1;
            continue;
        }

        let name: String = chars[name_start..name_end].iter().collect();
        if name == "class" || name == "id" {
            let value: String = chars[value_start + 1..value_end].iter().collect();
            let tokens = value.split(' ').map(str::to_string).collect();
            attributes.insert(name, tokens);
        }

        floor = value_end + 1;
        pos = value_end + 1;
    }

    attributes
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// A node still under construction. Children are index links into the slot
/// store until the tree is reified, so the parent is never aliased while
/// children are appended.
enum Slot {
    Text(String),
    Element {
        tag_name: String,
        attributes: AttrMap,
        children: Vec<usize>,
    },
}

struct TreeBuilder {
    slots: Vec<Slot>,
    stack: Vec<usize>,
    root: Option<usize>,
}

impl TreeBuilder {
    fn new() -> TreeBuilder {
        TreeBuilder {
            slots: Vec::new(),
            stack: Vec::new(),
            root: None,
        }
    }

    fn open_element(&mut self, tag_text: &str) {
        let attributes = if tag_text.contains('"') {
            parse_attributes(tag_text)
        } else {
            AttrMap::new()
        };
        // The name is the first space-delimited token of the raw tag text;
        // attribute text stays out of it only because attributes are
        // space-separated from the tag keyword.
        let tag_name = tag_text.split(' ').next().unwrap_or("").to_string();

        let index = self.slots.len();
        self.slots.push(Slot::Element {
            tag_name,
            attributes,
            children: Vec::new(),
        });

        match self.stack.last().copied() {
            Some(parent) => self.attach(parent, index),
            None => {
                if self.root.is_none() {
                    self.root = Some(index);
                }
            }
        }
        self.stack.push(index);
    }

    fn close_element(&mut self) -> Result<(), ParseError> {
        match self.stack.pop() {
            Some(_) => Ok(()),
            None => Err(ParseError::UnbalancedMarkup),
        }
    }

    fn append_text(&mut self, data: &str) {
        let parent = match self.stack.last().copied() {
            Some(parent) => parent,
            None => {
                debug!("dropping text outside any open element: {:?}", data);
                return;
            }
        };
        let index = self.slots.len();
        self.slots.push(Slot::Text(data.to_string()));
        self.attach(parent, index);
    }

    fn attach(&mut self, parent: usize, child: usize) {
        if let Slot::Element { children, .. } = &mut self.slots[parent] {
            children.push(child);
        }
    }

    fn finish(mut self) -> Option<Node> {
        let root = self.root?;
        debug!("parsed document with {} nodes", self.slots.len());
        Some(self.reify(root))
    }

    fn reify(&mut self, index: usize) -> Node {
        match mem::replace(&mut self.slots[index], Slot::Text(String::new())) {
            Slot::Text(data) => dom::text(data),
            Slot::Element {
                tag_name,
                attributes,
                children,
            } => {
                let children = children.into_iter().map(|child| self.reify(child)).collect();
                dom::elem(tag_name, attributes, children)
            }
        }
    }
}
