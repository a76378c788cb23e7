//! Event-iterator façade over the [`Lexer`].
//!
//! Ported from `core/parser.c`'s `event_next` concept (itself only
//! sketched in the reference — the bracket-tracking state machine below
//! is original to this port, built from the specification's event
//! contract). The Rust port expresses the sticky-`Error`-then-`End`
//! contract as ordinary `Iterator` fusing rather than a "call forever,
//! keep getting `End`" convention.
//!
//! | Rust item                | C equivalent          |
//! |----------------------------|--------------------------|
//! | [`EventIterator::new`]     | `serdec_parser_create`  |
//! | `Iterator::next`            | `serdec_event_next`     |
//! | [`EventIterator::error`]   | `serdec_parser_error`   |

use crate::buffer::Buffer;
use crate::error::{ErrorCode, ErrorInfo};
use crate::lexer::number::NumberToken;
use crate::lexer::{Lexer, TokenKind};

/// One parse event. `Key`/`String` carry the raw (still-escaped) span and
/// whether it contained any `\` escapes; `Number` carries the raw span
/// alongside the value the lexer already decoded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    Key { span: &'a [u8], has_escapes: bool },
    String { span: &'a [u8], has_escapes: bool },
    Number(NumberToken),
    Bool(bool),
    Null,
    Error(ErrorCode),
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Object,
    Array,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    ErrorSeen,
    Done,
}

/// Translates a token stream into a balanced sequence of [`Event`]s.
/// Implements the standard [`Iterator`] trait; once `Error` or the final
/// `End` has been yielded, every subsequent call returns `None`.
///
/// Borrows its [`Lexer`] over the caller's `'a` buffer rather than owning
/// one — `Item = Event<'a>` ties every yielded span back to the buffer the
/// caller holds, so the borrow checker enforces that it outlives both the
/// iterator and every event drawn from it.
pub struct EventIterator<'a> {
    lexer: Lexer<'a>,
    stack: Vec<Container>,
    /// `true` while inside an object and the next string token is a key
    /// rather than a value.
    expect_key: bool,
    state: State,
}

impl<'a> EventIterator<'a> {
    /// Builds an iterator over `buf`, starting at the beginning of input.
    /// Equivalent to `serdec_parser_create`.
    pub fn new(buf: &'a Buffer) -> Self {
        EventIterator {
            lexer: Lexer::new(buf),
            stack: Vec::new(),
            expect_key: false,
            state: State::Running,
        }
    }

    /// The lexer's recorded error, if any. Equivalent to `serdec_parser_error`.
    pub fn error(&self) -> &ErrorInfo {
        self.lexer.error()
    }

    fn after_value(&mut self) {
        if self.stack.last() == Some(&Container::Object) {
            self.expect_key = true;
        }
    }
}

impl<'a> Iterator for EventIterator<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Event<'a>> {
        match self.state {
            State::Done => return None,
            State::ErrorSeen => {
                self.state = State::Done;
                return Some(Event::End);
            }
            State::Running => {}
        }

        loop {
            let tok = self.lexer.next();
            match tok.kind {
                TokenKind::Error => {
                    self.state = State::ErrorSeen;
                    let code = self.lexer.error().code.unwrap_or(ErrorCode::Ok);
                    return Some(Event::Error(code));
                }
                TokenKind::Eof => {
                    self.state = State::Done;
                    return Some(Event::End);
                }
                TokenKind::Colon | TokenKind::Comma => continue,
                TokenKind::OpenObj => {
                    self.stack.push(Container::Object);
                    self.expect_key = true;
                    return Some(Event::StartObject);
                }
                TokenKind::CloseObj => {
                    self.stack.pop();
                    self.after_value();
                    return Some(Event::EndObject);
                }
                TokenKind::OpenArr => {
                    self.stack.push(Container::Array);
                    return Some(Event::StartArray);
                }
                TokenKind::CloseArr => {
                    self.stack.pop();
                    self.after_value();
                    return Some(Event::EndArray);
                }
                TokenKind::String { has_escapes } => {
                    if self.expect_key && self.stack.last() == Some(&Container::Object) {
                        self.expect_key = false;
                        return Some(Event::Key { span: tok.span, has_escapes });
                    }
                    self.after_value();
                    return Some(Event::String { span: tok.span, has_escapes });
                }
                TokenKind::Number(n) => {
                    self.after_value();
                    return Some(Event::Number(n));
                }
                TokenKind::True => {
                    self.after_value();
                    return Some(Event::Bool(true));
                }
                TokenKind::False => {
                    self.after_value();
                    return Some(Event::Bool(false));
                }
                TokenKind::Null => {
                    self.after_value();
                    return Some(Event::Null);
                }
            }
        }
    }
}
