//! Minimal HTML/CSS annotation pipeline: parse a markup string into a tree,
//! parse a stylesheet into rules, match rules against nodes by tag name and
//! re-serialize the tree with each element's resolved style inlined.

pub mod css;
pub mod dom;
pub mod error;
pub mod html;
pub mod render;
pub mod style;

use std::io::Write;

use log::debug;

pub use crate::error::{Error, ParseError};

/// Parses both sources and writes the annotated tree to `out`. A document
/// with no root element renders nothing.
pub fn render_style_from_source<W: Write>(
    html_source: &str,
    css_source: &str,
    out: &mut W,
) -> Result<(), Error> {
    let stylesheet = css::parse(css_source);
    match html::parse(html_source)? {
        Some(root) => render::render(out, &root, "", &stylesheet)?,
        None => debug!("document contains no elements, nothing to render"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::render_style_from_source;
    use crate::error::{Error, ParseError};

    const SAMPLE_HTML: &str = r#"<html><head><title>My test page</title></head><body><h1 id="oi" class="title page h1">Hello world!</h1><div class="oi">OI</div></body></html>"#;
    const SAMPLE_CSS: &str = "h1 { color: #ffffff; } h2 { color: #000000; } div { background-color: #000000; width: 100px; height: 100px; } .oi { color: #000000;}";

    #[test]
    fn sample_document_renders_byte_for_byte() {
        let mut out = Vec::new();
        render_style_from_source(SAMPLE_HTML, SAMPLE_CSS, &mut out).unwrap();
        let expected = r#"<html style=" color: #ffffff; " class="">
 <head>
  <title>
    My test page
  </title>
 </head>
 <body style=" color: #ffffff; " class="">
  <h1 style=" color: #ffffff; " class="title page h1 "id="oi ">
    Hello world!
  </h1>
  <div style=" background-color: #000000;  width: 100px;  height: 100px; " class="oi ">
    OI
  </div>
 </body>
</html>
"#;
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn unbalanced_markup_surfaces_as_an_error() {
        let mut out = Vec::new();
        let result = render_style_from_source("</div>", "", &mut out);
        match result {
            Err(Error::Markup(ParseError::UnbalancedMarkup)) => {}
            other => panic!("expected markup error, got {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn rootless_document_renders_nothing() {
        let mut out = Vec::new();
        render_style_from_source("", "h1 { color: red; }", &mut out).unwrap();
        assert!(out.is_empty());
    }
}
