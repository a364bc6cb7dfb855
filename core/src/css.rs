use log::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

/// One selector block. The selector is a single word: a bare tag name, or a
/// leading-dot class token kept whole (which then never matches any node,
/// since matching only compares tag names).
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// A `property: value` pair, both kept verbatim from the split on `:` —
/// surrounding whitespace included.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// Parses a stylesheet into rules in source order. Malformed pieces are
/// skipped; there are no errors.
pub fn parse(source: &str) -> Stylesheet {
    let mut parser = Parser {
        pos: 0,
        input: source.to_string(),
    };
    let rules = parser.parse_rules();
    debug!("parsed {} rules from stylesheet", rules.len());
    Stylesheet { rules }
}

struct Parser {
    pos: usize,
    input: String,
}

impl Parser {
    fn parse_rules(&mut self) -> Vec<Rule> {
        let mut rules = Vec::new();
        while !self.eof() {
            self.consume_whitespace();
            if self.eof() {
                break;
            }
            if !is_selector_char(self.next_char()) {
                self.consume_char();
                continue;
            }
            let selector = self.consume_while(is_selector_char);
            self.consume_whitespace();
            if self.eof() || self.next_char() != '{' {
                continue;
            }
            self.consume_char();
            let body_start = self.pos;
            let body = self.consume_while(|c| c != '{' && c != '}');
            if self.eof() || self.next_char() != '}' {
                // A nested brace or an unclosed block; no rule. Rescan the
                // body text itself, so an inner block still yields its rule.
                self.pos = body_start;
                continue;
            }
            self.consume_char();
            rules.push(Rule {
                selector,
                declarations: parse_declarations(&body),
            });
        }
        rules
    }

    fn next_char(&self) -> char {
        self.input[self.pos..].chars().next().unwrap()
    }

    fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn consume_char(&mut self) -> char {
        let cur_char = self.next_char();
        self.pos += cur_char.len_utf8();
        cur_char
    }

    fn consume_while<F>(&mut self, test: F) -> String
    where
        F: Fn(char) -> bool,
    {
        let mut result = String::new();
        while !self.eof() && test(self.next_char()) {
            result.push(self.consume_char());
        }
        result
    }

    fn consume_whitespace(&mut self) {
        self.consume_while(char::is_whitespace);
    }
}

/// Splits a block body on `;`, keeping only candidates whose split on `:`
/// yields exactly two parts. A value containing `:` is dropped, and so is
/// the empty candidate after a trailing `;`.
fn parse_declarations(body: &str) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    for candidate in body.split(';') {
        let parts: Vec<&str> = candidate.split(':').collect();
        if parts.len() == 2 {
            declarations.push(Declaration {
                property: parts[0].to_string(),
                value: parts[1].to_string(),
            });
        }
    }
    declarations
}

fn is_selector_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}
