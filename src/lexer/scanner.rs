/// Character cursor over the full source text.
///
/// The scanner tracks the pending token span `[start, end)` as byte offsets,
/// with the line and column at both ends. It knows nothing about token kinds:
/// the lexer drives it and commits spans with [`Scanner::begin_next_token`].
/// Reads past the end of the source return `None` instead of failing.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: String,
    start: usize,
    end: usize,
    start_line: u32,
    start_column: u32,
    end_line: u32,
    end_column: u32,
}

impl Scanner {
    pub fn new(source: String) -> Self {
        Scanner {
            source,
            start: 0,
            end: 0,
            start_line: 1,
            start_column: 1,
            end_line: 1,
            end_column: 1,
        }
    }

    /// Consumes and returns the next character.
    pub fn scan_char(&mut self) -> Option<char> {
        let ch = self.source[self.end..].chars().next()?;
        self.end += ch.len_utf8();

        if ch == '\n' {
            self.end_line += 1;
            self.end_column = 1;
        } else {
            self.end_column += 1;
        }

        Some(ch)
    }

    /// Peeks `k` characters ahead of the cursor, `k` starting at 1.
    pub fn look_ahead_k_char(&self, k: usize) -> Option<char> {
        debug_assert!(k >= 1, "look-ahead distance starts at 1");
        self.source[self.end..].chars().nth(k.checked_sub(1)?)
    }

    pub fn look_ahead_1_char(&self) -> Option<char> {
        self.look_ahead_k_char(1)
    }

    pub fn look_ahead_2_char(&self) -> Option<char> {
        self.look_ahead_k_char(2)
    }

    pub fn look_ahead_3_char(&self) -> Option<char> {
        self.look_ahead_k_char(3)
    }

    pub fn has_look_ahead_k_char(&self, k: usize, ch: char) -> bool {
        self.look_ahead_k_char(k) == Some(ch)
    }

    pub fn has_look_ahead_1_char(&self, ch: char) -> bool {
        self.has_look_ahead_k_char(1, ch)
    }

    /// Whether the upcoming characters spell `text` exactly.
    pub fn has_look_ahead_text(&self, text: &str) -> bool {
        self.source[self.end..].starts_with(text)
    }

    /// Consumes one character if and only if it is `ch`.
    pub fn advance_over_look_ahead_1_char(&mut self, ch: char) -> bool {
        self.advance_if(|next| next == ch)
    }

    /// Consumes one character if and only if it satisfies `predicate`.
    pub fn advance_if(&mut self, predicate: impl Fn(char) -> bool) -> bool {
        match self.look_ahead_1_char() {
            Some(ch) if predicate(ch) => {
                self.scan_char();
                true
            }
            _ => false,
        }
    }

    /// Consumes characters greedily while `predicate` holds.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.advance_if(&predicate) {}
    }

    /// Consumes `n` characters already known not to contain a line break.
    pub fn advance_same_line(&mut self, n: usize) {
        for _ in 0..n {
            match self.source[self.end..].chars().next() {
                Some(ch) => {
                    debug_assert!(ch != '\n', "advance_same_line crossed a line break");
                    self.end += ch.len_utf8();
                    self.end_column += 1;
                }
                None => break,
            }
        }
    }

    /// Discards the pending span: the next token starts where this one ended.
    pub fn begin_next_token(&mut self) {
        self.start = self.end;
        self.start_line = self.end_line;
        self.start_column = self.end_column;
    }

    pub fn token_text(&self) -> &str {
        &self.source[self.start..self.end]
    }

    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    pub fn start_column(&self) -> u32 {
        self.start_column
    }

    pub fn is_eof(&self) -> bool {
        self.end >= self.source.len()
    }
}
