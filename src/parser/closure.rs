//! Precedence resolution by explicit parenthesization.
//!
//! The resolver walks an expression once, pushing its tokens into a
//! [`ClosureBuffer`]. Every operator application becomes a closure: a span of
//! stream nodes whose priority, operation and associativity come from its
//! front token. When an operator arrives whose priority is lower than the last
//! pending closure, the pending closures are resolved by inserting synthetic
//! `(` and `)` tokens into the stream. At the end of input everything left is
//! resolved, so the output is fully parenthesized and can be parsed by plain
//! recursive descent.
//!
//! ```text
//! 1 + 2 * 3   =>  ( 1 + ( 2 * 3 ) )
//! a = b = c   =>  ( a = ( b = c ) )
//! -a.b        =>  ( - ( a . b ) )
//! ```

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Assoc, Operation, Priority, Token, TokenKind},
    Position, LOGIC_ERROR,
};

use super::{
    cursor::TokenCursor,
    scope::{find_paren_scope, find_scope},
};

const SENTINEL: usize = 0;

#[derive(Debug, Clone)]
struct StreamNode {
    token: Token,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A span `[front, back]` of stream nodes treated as one operator
/// application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closure {
    pub front: usize,
    pub back: usize,
}

/// A token stream held as an arena of doubly linked nodes plus the list of
/// pending closures.
///
/// Node indices stay valid across insertions, which lets resolution place
/// parentheses next to any closure in constant time. Both the stream and the
/// closure list start with a sentinel that never reaches the output.
#[derive(Debug, Clone)]
pub struct ClosureBuffer {
    nodes: Vec<StreamNode>,
    tail: usize,
    closures: Vec<Closure>,
}

impl Default for ClosureBuffer {
    fn default() -> Self {
        ClosureBuffer::new()
    }
}

impl ClosureBuffer {
    pub fn new() -> Self {
        ClosureBuffer {
            nodes: vec![StreamNode {
                token: Token::synthetic(TokenKind::None, "", Position::null()),
                prev: None,
                next: None,
            }],
            tail: SENTINEL,
            closures: vec![Closure {
                front: SENTINEL,
                back: SENTINEL,
            }],
        }
    }

    /// Appends a token at the end of the stream.
    pub fn push_token(&mut self, token: Token) -> usize {
        self.insert_after(self.tail, token)
    }

    pub fn insert_after(&mut self, node: usize, token: Token) -> usize {
        let index = self.nodes.len();
        let next = self.nodes[node].next;

        self.nodes.push(StreamNode {
            token,
            prev: Some(node),
            next,
        });
        self.nodes[node].next = Some(index);

        match next {
            Some(next) => self.nodes[next].prev = Some(index),
            None => self.tail = index,
        }

        index
    }

    pub fn insert_before(&mut self, node: usize, token: Token) -> usize {
        let prev = self.nodes[node].prev.unwrap_or(SENTINEL);
        self.insert_after(prev, token)
    }

    pub fn next_of(&self, node: usize) -> Option<usize> {
        self.nodes[node].next
    }

    pub fn token(&self, node: usize) -> &Token {
        &self.nodes[node].token
    }

    pub fn tail(&self) -> usize {
        self.tail
    }

    /// True when nothing but the sentinel is in the stream.
    pub fn is_empty(&self) -> bool {
        self.nodes[SENTINEL].next.is_none()
    }

    pub fn push_closure(&mut self, front: usize, back: usize) {
        self.closures.push(Closure { front, back });
    }

    /// Closures not yet resolved, sentinel excluded.
    pub fn pending(&self) -> &[Closure] {
        &self.closures[1..]
    }

    pub fn priority(&self, closure: usize) -> Priority {
        self.token(self.closures[closure].front).priority()
    }

    pub fn operation(&self, closure: usize) -> Operation {
        self.token(self.closures[closure].front).operation()
    }

    pub fn assoc(&self, closure: usize) -> Assoc {
        self.token(self.closures[closure].front).assoc()
    }

    /// The stream in order, sentinel removed.
    pub fn stream_to_vec(&self) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(self.nodes.len() - 1);
        let mut node = self.nodes[SENTINEL].next;

        while let Some(index) = node {
            tokens.push(self.nodes[index].token.clone());
            node = self.nodes[index].next;
        }

        tokens
    }

    /// Resolves the last pending closure together with the run of closures
    /// that must be grouped with it.
    pub fn resolve_last(&mut self) -> Result<(), Error> {
        let last = self.closures.len() - 1;
        if last == SENTINEL {
            return Err(LOGIC_ERROR!(
                Position::null(),
                "resolve_last called with no pending closure"
            ));
        }

        match self.operation(last) {
            Operation::Prefix => self.resolve_prefix_run(last),
            Operation::Postfix => self.resolve_postfix_run(last),
            Operation::Binary => self.resolve_binary_run(last),
            Operation::None => Err(LOGIC_ERROR!(
                self.token(self.closures[last].front).position(),
                "closure at `{}` has no operation",
                self.token(self.closures[last].front).describe()
            )),
        }
    }

    /// Index of the first closure of the run ending at `last`.
    fn run_start<P>(&self, last: usize, belongs: P) -> usize
    where
        P: Fn(usize) -> bool,
    {
        let mut start = last;
        while start > 1 && belongs(start - 1) {
            start -= 1;
        }
        start
    }

    fn resolve_prefix_run(&mut self, last: usize) -> Result<(), Error> {
        let start = self.run_start(last, |i| self.operation(i) == Operation::Prefix);
        debug!(run = last - start + 1, "resolving prefix run");

        let front = self.closures[start].front;
        let open = paren(TokenKind::OpenParen, self.token(front).position());
        self.insert_before(front, open);

        let close = paren(TokenKind::CloseParen, self.token(self.tail).position());
        self.push_token(close);

        self.closures.truncate(start);
        Ok(())
    }

    fn resolve_postfix_run(&mut self, last: usize) -> Result<(), Error> {
        let start = self.run_start(last, |i| self.operation(i) == Operation::Postfix);
        debug!(run = last - start + 1, "resolving postfix run");

        let operand = self.operand_after(start - 1)?;
        let back = self.closures[last].back;

        let open = paren(TokenKind::OpenParen, self.token(operand).position());
        self.insert_before(operand, open);
        let close = paren(TokenKind::CloseParen, self.token(back).position());
        self.insert_after(back, close);

        self.closures.truncate(start);
        Ok(())
    }

    fn resolve_binary_run(&mut self, last: usize) -> Result<(), Error> {
        let priority = self.priority(last);
        let assoc = self.assoc(last);
        let start = self.run_start(last, |i| {
            self.operation(i) == Operation::Binary
                && self.priority(i) == priority
                && self.assoc(i) == assoc
        });

        // Postfix closures on the left operand always bind tighter. Prefix
        // closures only do when the operator is not an access operator.
        let mut boundary = start - 1;
        while boundary > SENTINEL {
            match self.operation(boundary) {
                Operation::Postfix => boundary -= 1,
                Operation::Prefix if priority <= Priority::Postfix => boundary -= 1,
                _ => break,
            }
        }

        let left = self.operand_after(boundary)?;
        let run: Vec<Closure> = self.closures[start..=last].to_vec();
        debug!(run = run.len(), ?priority, ?assoc, "resolving binary run");

        let left_position = self.token(left).position();
        let end_position = self.token(self.tail).position();

        match assoc {
            Assoc::Right => {
                self.insert_before(left, paren(TokenKind::OpenParen, left_position));
                for pair in run.windows(2) {
                    let position = self.token(pair[0].back).position();
                    self.insert_after(pair[0].back, paren(TokenKind::OpenParen, position));
                }
                for _ in 0..run.len() {
                    self.push_token(paren(TokenKind::CloseParen, end_position));
                }
            }
            Assoc::Left | Assoc::None => {
                for _ in 0..run.len() {
                    self.insert_before(left, paren(TokenKind::OpenParen, left_position));
                }
                for pair in run.windows(2) {
                    let position = self.token(pair[1].front).position();
                    self.insert_before(pair[1].front, paren(TokenKind::CloseParen, position));
                }
                self.push_token(paren(TokenKind::CloseParen, end_position));
            }
        }

        self.closures.truncate(boundary + 1);
        Ok(())
    }

    /// The first stream node after the closure at `boundary`.
    fn operand_after(&self, boundary: usize) -> Result<usize, Error> {
        let back = self.closures[boundary].back;
        self.next_of(back).ok_or_else(|| {
            LOGIC_ERROR!(
                self.token(back).position(),
                "no operand follows `{}`",
                self.token(back).describe()
            )
        })
    }
}

fn paren(kind: TokenKind, position: Position) -> Token {
    Token::synthetic(kind, kind.spelling(), position)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expecting {
    Operative,
    Operator,
}

/// Drives a [`ClosureBuffer`] over one expression.
pub struct ClosureResolver {
    buffer: ClosureBuffer,
    expecting: Expecting,
}

impl Default for ClosureResolver {
    fn default() -> Self {
        ClosureResolver::new()
    }
}

impl ClosureResolver {
    pub fn new() -> Self {
        ClosureResolver {
            buffer: ClosureBuffer::new(),
            expecting: Expecting::Operative,
        }
    }

    /// Consumes every token of the cursor's range and resolves all closures.
    pub fn consume(&mut self, mut cursor: TokenCursor) -> Result<(), Error> {
        while !cursor.at_end() {
            match self.expecting {
                Expecting::Operative => self.consume_operative(&mut cursor)?,
                Expecting::Operator => self.consume_operator(&mut cursor)?,
            }
        }

        self.finish(&cursor)
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.buffer.stream_to_vec()
    }

    fn consume_operative(&mut self, cursor: &mut TokenCursor) -> Result<(), Error> {
        let token = cursor.get();

        if token.kind.is_singular_operand() {
            trace!(token = %token.literal, "skip operand");
            self.buffer.push_token(token.clone());
            cursor.advance();
            self.expecting = Expecting::Operator;
            return Ok(());
        }

        if token.is(TokenKind::Subtraction) {
            let next = cursor.peek(1);

            if next.kind.is_numeric_literal() {
                trace!(literal = %next.literal, "merging negative literal");
                let merged = Token::synthetic(
                    next.kind,
                    &format!("-{}", next.literal),
                    next.position(),
                );
                self.buffer.push_token(merged);
                cursor.advance_by(2);
                self.expecting = Expecting::Operator;
            } else {
                let negation = Token::synthetic(TokenKind::Negation, "-", token.position());
                self.store(negation);
                cursor.advance();
            }
            return Ok(());
        }

        if token.kind.is_singular_prefix_operator() {
            // A prefix in operand position never closes earlier operators.
            self.store(token.clone());
            cursor.advance();
            return Ok(());
        }

        if token.is(TokenKind::OpenParen) {
            return self.consume_subexpression(cursor);
        }

        match token.operation() {
            Operation::Binary | Operation::Postfix => Err(Error::new(
                ErrorImpl::OperatorFollowingOperator {
                    token: token.describe().to_string(),
                },
                token.position(),
            )),
            _ => Err(Error::new(
                ErrorImpl::InvalidPrimaryToken {
                    token: token.describe().to_string(),
                },
                token.position(),
            )),
        }
    }

    fn consume_subexpression(&mut self, cursor: &mut TokenCursor) -> Result<(), Error> {
        let scope = find_paren_scope(cursor)?;
        let interior = cursor.sub(scope.contained_begin(), scope.contained_end());
        let resolved = resolve_closures(interior)?;
        trace!(tokens = resolved.len(), "resolved subexpression");

        if is_single_group(&resolved) {
            for token in resolved {
                self.buffer.push_token(token);
            }
        } else {
            self.buffer.push_token(cursor.at(scope.begin).clone());
            for token in resolved {
                self.buffer.push_token(token);
            }
            self.buffer.push_token(cursor.at(scope.end - 1).clone());
        }

        cursor.jump(scope.end);
        self.expecting = Expecting::Operator;
        Ok(())
    }

    fn consume_operator(&mut self, cursor: &mut TokenCursor) -> Result<(), Error> {
        let token = cursor.get();

        match token.operation() {
            Operation::Postfix if token.kind.is_opening_scope() => {
                let closer = token.kind.closer().ok_or_else(|| {
                    LOGIC_ERROR!(token.position(), "`{}` has no closer", token.describe())
                })?;
                // The interior is resolved later, argument by argument.
                let scope = find_scope(token.kind, closer, cursor)?;
                self.check(token.priority())?;

                let front = self.buffer.push_token(token.clone());
                let mut back = front;
                for index in scope.contained_begin()..scope.end {
                    back = self.buffer.push_token(cursor.at(index).clone());
                }
                trace!(open = %token.literal, "capturing application");
                self.buffer.push_closure(front, back);
                cursor.jump(scope.end);
                Ok(())
            }
            Operation::Postfix => {
                self.check(token.priority())?;
                self.store(token.clone());
                cursor.advance();
                Ok(())
            }
            Operation::Binary => {
                self.check(token.priority())?;
                self.store(token.clone());
                cursor.advance();
                self.expecting = Expecting::Operative;
                Ok(())
            }
            Operation::Prefix => Err(Error::new(
                ErrorImpl::PrefixFollowingOperand {
                    token: token.describe().to_string(),
                },
                token.position(),
            )),
            Operation::None if token.kind.is_singular_operand() => Err(Error::new(
                ErrorImpl::OperandFollowingOperand {
                    token: token.describe().to_string(),
                },
                token.position(),
            )),
            Operation::None => Err(Error::new(
                ErrorImpl::TrailingTokens {
                    token: token.describe().to_string(),
                },
                token.position(),
            )),
        }
    }

    /// Pushes a single-token closure.
    fn store(&mut self, token: Token) {
        trace!(token = %token.literal, "store closure");
        let node = self.buffer.push_token(token);
        self.buffer.push_closure(node, node);
    }

    /// Resolves pending closures that bind tighter than `incoming`.
    fn check(&mut self, incoming: Priority) -> Result<(), Error> {
        while !self.buffer.pending().is_empty()
            && self.buffer.priority(self.buffer.closures.len() - 1) > incoming
        {
            self.buffer.resolve_last()?;
        }
        Ok(())
    }

    fn finish(&mut self, cursor: &TokenCursor) -> Result<(), Error> {
        if self.expecting == Expecting::Operative {
            if self.buffer.is_empty() {
                return Err(Error::new(ErrorImpl::EmptyExpression, cursor.location()));
            }

            let dangling = self.buffer.token(self.buffer.tail());
            return Err(Error::new(
                ErrorImpl::MissingOperand {
                    token: dangling.describe().to_string(),
                },
                dangling.position(),
            ));
        }

        while !self.buffer.pending().is_empty() {
            self.buffer.resolve_last()?;
        }
        Ok(())
    }
}

/// True when the tokens are exactly one parenthesized group.
fn is_single_group(tokens: &[Token]) -> bool {
    match tokens.first() {
        Some(first) if first.is(TokenKind::OpenParen) => {
            find_paren_scope(&TokenCursor::new(tokens)).is_ok_and(|scope| scope.end == tokens.len())
        }
        _ => false,
    }
}

/// Rewrites the expression in the cursor's range into an equivalent, fully
/// parenthesized token sequence.
pub fn resolve_closures(cursor: TokenCursor) -> Result<Vec<Token>, Error> {
    let mut resolver = ClosureResolver::new();
    resolver.consume(cursor)?;
    Ok(resolver.into_tokens())
}
