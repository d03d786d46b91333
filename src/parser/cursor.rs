use crate::{
    lexer::tokens::{Assoc, Operation, Priority, Token, TokenKind},
    Position,
};

/// A copyable, non-owning view over a range of tokens.
///
/// Positions are absolute indices into the underlying slice. Reads outside
/// `[begin, end)` yield the synthetic end-of-file token, so a cursor never
/// panics on overrun.
#[derive(Debug, Clone, Copy)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    begin: usize,
    end: usize,
    position: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenCursor::with_range(tokens, 0, tokens.len())
    }

    pub fn with_range(tokens: &'a [Token], begin: usize, end: usize) -> Self {
        let end = end.min(tokens.len());
        let begin = begin.min(end);
        TokenCursor {
            tokens,
            begin,
            end,
            position: begin,
        }
    }

    /// A cursor over `[begin, end)` of the same slice, positioned at `begin`.
    pub fn sub(&self, begin: usize, end: usize) -> Self {
        TokenCursor::with_range(self.tokens, begin, end)
    }

    pub fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn at(&self, index: usize) -> &'a Token {
        if index >= self.begin && index < self.end {
            &self.tokens[index]
        } else {
            Token::eof()
        }
    }

    pub fn get(&self) -> &'a Token {
        self.at(self.position)
    }

    pub fn peek(&self, offset: usize) -> &'a Token {
        self.at(self.position + offset)
    }

    /// Moves one token forward and returns the token moved over.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.get();
        if self.position < self.end {
            self.position += 1;
        }
        token
    }

    /// Moves `offset` tokens forward or back, clamped to the range.
    pub fn advance_by(&mut self, offset: isize) {
        let target = self.position.saturating_add_signed(offset);
        self.jump(target);
    }

    pub fn jump(&mut self, position: usize) {
        self.position = position.clamp(self.begin, self.end);
    }

    /// True past the range or on an end-of-file token.
    pub fn at_end(&self) -> bool {
        self.position >= self.end || self.get().is(TokenKind::Eof)
    }

    /// The tokens from the current position to the end of the range.
    pub fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.position.min(self.end)..self.end]
    }

    /// Source position for diagnostics: the current token, or the last token
    /// before it when the cursor has run off its range.
    pub fn location(&self) -> Position {
        if self.position < self.end {
            return self.tokens[self.position].position();
        }

        match self.position.min(self.tokens.len()).checked_sub(1) {
            Some(last) => self.tokens[last].position(),
            None => Position::null(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.get().kind
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.get().is(kind)
    }

    pub fn priority(&self) -> Priority {
        self.get().priority()
    }

    pub fn operation(&self) -> Operation {
        self.get().operation()
    }

    pub fn assoc(&self) -> Assoc {
        self.get().assoc()
    }
}
