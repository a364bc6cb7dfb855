use std::fs;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use log::debug;

const SAMPLE_HTML: &str = r#"<html><head><title>My test page</title></head><body><h1 id="oi" class="title page h1">Hello world!</h1><div class="oi">OI</div></body></html>"#;
const SAMPLE_CSS: &str = "h1 { color: #ffffff; } h2 { color: #000000; } div { background-color: #000000; width: 100px; height: 100px; } .oi { color: #000000;}";

fn main() -> Result<()> {
    env_logger::init();

    let mut opts = getopts::Options::new();
    opts.optopt("h", "html", "HTML document", "FILENAME");
    opts.optopt("c", "css", "CSS stylesheet", "FILENAME");
    opts.optflag("p", "plain", "print text content only, without style annotations");

    let matches = opts
        .parse(std::env::args().skip(1))
        .context("invalid arguments")?;

    let html = read_source(matches.opt_str("h"), SAMPLE_HTML)?;
    let css = read_source(matches.opt_str("c"), SAMPLE_CSS)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if matches.opt_present("p") {
        let root = garnet::html::parse(&html).context("failed to parse document")?;
        if let Some(root) = root {
            garnet::render::render_text(&mut out, &root, "")?;
        }
    } else {
        garnet::render_style_from_source(&html, &css, &mut out)
            .context("failed to render document")?;
    }
    out.flush()?;

    Ok(())
}

fn read_source(filename: Option<String>, fallback: &str) -> Result<String> {
    match filename {
        Some(name) => {
            debug!("reading source from {}", name);
            fs::read_to_string(&name).with_context(|| format!("cannot read {}", name))
        }
        None => Ok(fallback.to_string()),
    }
}
