use std::io::{self, Write};

use crate::css::Stylesheet;
use crate::dom::Node;
use crate::style;

/// Writes the annotated representation of a subtree, one line per tag or
/// text segment.
///
/// Elements resolve the first matching rule in stylesheet order and open
/// with `style="prop:value; "` (one trailing `"; "` per declaration), then
/// `class="tok "` with a space after every token (an empty `class=""` when
/// there are none), then `id="tok "` only when id tokens exist. Elements
/// with no matching rule open as a bare `<tag>`. Text lines carry one extra
/// leading space past their indent. Children render with the indent grown
/// by one space, and the closing tag is always written. Nothing is escaped.
pub fn render<W: Write>(
    out: &mut W,
    node: &Node,
    indent: &str,
    stylesheet: &Stylesheet,
) -> io::Result<()> {
    let elem = match node {
        Node::Text(data) => return writeln!(out, "{} {}", indent, data),
        Node::Element(elem) => elem,
    };

    match style::resolve_rule(stylesheet, node) {
        Some(rule) => {
            write!(out, "{}<{} style=\"", indent, elem.tag_name)?;
            for declaration in &rule.declarations {
                write!(out, "{}:{}; ", declaration.property, declaration.value)?;
            }
            write!(out, "\" class=\"")?;
            for class in elem.classes() {
                write!(out, "{} ", class)?;
            }
            write!(out, "\"")?;
            let ids = elem.ids();
            if !ids.is_empty() {
                write!(out, "id=\"")?;
                for id in ids {
                    write!(out, "{} ", id)?;
                }
                write!(out, "\"")?;
            }
            writeln!(out, ">")?;
        }
        None => writeln!(out, "{}<{}>", indent, elem.tag_name)?,
    }

    let child_indent = format!("{} ", indent);
    for child in &elem.children {
        render(out, child, &child_indent, stylesheet)?;
    }

    writeln!(out, "{}</{}>", indent, elem.tag_name)
}

/// Style-free variant: prints only the text segments, indented by depth.
/// Elements themselves produce no output.
pub fn render_text<W: Write>(out: &mut W, node: &Node, indent: &str) -> io::Result<()> {
    match node {
        Node::Text(data) => writeln!(out, "{}{}", indent, data),
        Node::Element(elem) => {
            let child_indent = format!("{} ", indent);
            for child in &elem.children {
                render_text(out, child, &child_indent)?;
            }
            Ok(())
        }
    }
}
