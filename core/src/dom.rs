use std::collections::HashMap;

/// Attribute name to space-split value tokens. Only "class" and "id" are
/// ever stored; an absent key means the element has no such attribute.
pub type AttrMap = HashMap<String, Vec<String>>;

#[derive(Debug, PartialEq)]
pub enum Node {
    Text(String),
    Element(ElementData),
}

#[derive(Debug, PartialEq)]
pub struct ElementData {
    pub tag_name: String,
    pub attributes: AttrMap,
    pub children: Vec<Node>,
}

pub fn text(data: String) -> Node {
    Node::Text(data)
}

pub fn elem(name: String, attrs: AttrMap, children: Vec<Node>) -> Node {
    Node::Element(ElementData {
        tag_name: name,
        attributes: attrs,
        children,
    })
}

impl ElementData {
    pub fn classes(&self) -> &[String] {
        self.attr_tokens("class")
    }

    pub fn ids(&self) -> &[String] {
        self.attr_tokens("id")
    }

    fn attr_tokens(&self, name: &str) -> &[String] {
        self.attributes.get(name).map(|tokens| tokens.as_slice()).unwrap_or(&[])
    }
}
