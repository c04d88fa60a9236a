/// A single-character pattern.
pub type Pattern = fn(char) -> bool;

/// A cursor over the unconsumed part of the source.
///
/// `peek` tests the next characters against a sequence of patterns without
/// consuming anything; `eat` does the same and consumes them on success.
/// Offsets are byte offsets into the full source.
pub struct CharStream<'s> {
    rest:   &'s str,
    start:  usize,
    offset: usize,
}

impl<'s> CharStream<'s> {
    /// Creates a stream over `rest`, which begins at byte `start` of the
    /// source.
    #[must_use]
    pub const fn new(rest: &'s str, start: usize) -> Self {
        Self { rest,
               start,
               offset: start }
    }

    /// Returns `true` if the next `patterns.len()` characters match the
    /// patterns in order.
    #[must_use]
    pub fn peek(&self, patterns: &[Pattern]) -> bool {
        let mut chars = self.rest.chars();
        patterns.iter()
                .all(|pattern| chars.next().is_some_and(|c| pattern(c)))
    }

    /// Like [`Self::peek`], but consumes the matched characters on success.
    pub fn eat(&mut self, patterns: &[Pattern]) -> bool {
        if !self.peek(patterns) {
            return false;
        }
        for _ in patterns {
            if let Some(c) = self.rest.chars().next() {
                self.rest = &self.rest[c.len_utf8()..];
                self.offset += c.len_utf8();
            }
        }
        true
    }

    /// Returns `true` once every character has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    /// Byte offset of the next character in the full source.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.offset - self.start
    }
}

/// Matches any character.
#[must_use]
pub const fn any(_: char) -> bool {
    true
}

/// Matches `\n` and `\r`.
#[must_use]
pub const fn line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Matches the characters allowed after a backslash.
#[must_use]
pub const fn escape(c: char) -> bool {
    matches!(c, 'b' | 'n' | 'r' | 't' | '\'' | '"' | '\\')
}

/// Matches `\`.
#[must_use]
pub const fn backslash(c: char) -> bool {
    c == '\\'
}

/// Matches `'`.
#[must_use]
pub const fn single_quote(c: char) -> bool {
    c == '\''
}

/// Matches `"`.
#[must_use]
pub const fn double_quote(c: char) -> bool {
    c == '"'
}
