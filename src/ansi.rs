use unicode_width::UnicodeWidthChar;
use vte::{Parser, Perform};

/// Remove every escape sequence from `text`, keeping printable characters and line breaks.
pub fn strip_ansi(text: &str) -> String {
    scan(text).text
}

/// The number of columns `line` takes up on screen, ignoring escape sequences.
pub fn visible_width(line: &str) -> usize {
    scan(line).columns
}

fn scan(text: &str) -> PlainText {
    let mut plain = PlainText::default();
    let mut parser = Parser::new();
    parser.advance(&mut plain, text.as_bytes());
    plain
}

/// VTE performer that keeps only what would be printed.
#[derive(Default)]
struct PlainText {
    text: String,
    columns: usize,
}

impl Perform for PlainText {
    fn print(&mut self, c: char) {
        self.text.push(c);
        self.columns += c.width().unwrap_or(0);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' | b'\r' => self.text.push(byte as char),
            b'\t' => {
                self.text.push('\t');
                self.columns += 1;
            }
            _ => {}
        }
    }
}
