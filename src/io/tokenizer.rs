//! CSV field tokenizer.
//!
//! The tokenizer is a cursor over a single line of text. Each call to
//! [`Tokenizer::next_token`] extracts one field and advances the cursor past
//! it (consuming a following comma if present).
//!
//! Two return states matter to callers and must not be conflated:
//!
//! - `None`: the cursor is at end-of-line, there is no field at all
//! - `Some(String::new())`: a genuinely empty field (e.g. the middle of `,,`),
//!   which numeric callers must treat as a data error
//!
//! Fields are unbounded in length; `String` growth handles arbitrary widths.

/// A cursor over one line of CSV text.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Extract the next field and advance past it.
    ///
    /// Quoted fields (`"..."`) are copied verbatim until the closing quote;
    /// `\` escapes the immediately following character, so escaped quotes and
    /// commas inside quotes are taken literally. Unquoted fields run until a
    /// comma, newline, or carriage return and have trailing whitespace
    /// trimmed.
    pub fn next_token(&mut self) -> Option<String> {
        let line = self.rest;
        let mut chars = line.char_indices().peekable();

        // Skip leading whitespace, but never cross a newline.
        while let Some(&(_, c)) = chars.peek() {
            if c == '\n' || !c.is_whitespace() {
                break;
            }
            chars.next();
        }

        match chars.peek() {
            None => {
                self.rest = "";
                return None;
            }
            Some(&(i, c)) if c == '\n' || c == '\r' => {
                self.rest = &line[i..];
                return None;
            }
            _ => {}
        }

        let mut field = String::new();

        if matches!(chars.peek(), Some(&(_, '"'))) {
            chars.next();
            loop {
                match chars.next() {
                    // Unterminated quote: keep what was accumulated.
                    None => break,
                    Some((_, '"')) => break,
                    Some((_, '\\')) => match chars.next() {
                        Some((_, escaped)) => field.push(escaped),
                        None => {
                            field.push('\\');
                            break;
                        }
                    },
                    Some((_, c)) => field.push(c),
                }
            }
            // Whitespace after the closing quote, then an optional comma.
            while let Some(&(_, c)) = chars.peek() {
                if c == ',' || c == '\n' || !c.is_whitespace() {
                    break;
                }
                chars.next();
            }
            if matches!(chars.peek(), Some(&(_, ','))) {
                chars.next();
            }
        } else {
            while let Some(&(_, c)) = chars.peek() {
                if c == ',' || c == '\n' || c == '\r' {
                    break;
                }
                field.push(c);
                chars.next();
            }
            if matches!(chars.peek(), Some(&(_, ','))) {
                chars.next();
            }
            field.truncate(field.trim_end().len());
        }

        self.rest = match chars.peek() {
            Some(&(i, _)) => &line[i..],
            None => "",
        };
        Some(field)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_token()
    }
}
