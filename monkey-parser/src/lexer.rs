// Monkey Lexer
// Forward-only conversion of source text into tokens

use crate::token::{lookup_ident, Span, Token, TokenKind};

/// Pull-based lexer over a source string.
///
/// `next_token` hands out one token at a time and keeps returning
/// [`TokenKind::Eof`] once the input is exhausted.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    /// Offset of the byte under examination
    position: usize,
    /// Set once the `Eof` token has been produced by the iterator
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            finished: false,
        }
    }

    /// The source text this lexer reads from
    pub fn source(&self) -> &'a str {
        self.input
    }

    /// Produce the next token and advance past it
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let Some(ch) = self.current() else {
            return Token::eof(self.input.len());
        };

        let kind = match ch {
            b'=' if self.peek() == Some(b'=') => {
                return self.two_char_token(TokenKind::Eq);
            }
            b'!' if self.peek() == Some(b'=') => {
                return self.two_char_token(TokenKind::NotEq);
            }
            b'=' => TokenKind::Assign,
            b'!' => TokenKind::Bang,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b':' => TokenKind::Colon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            b'"' => return self.read_string(),
            c if is_letter(c) => return self.read_identifier(),
            c if c.is_ascii_digit() => return self.read_number(),
            _ => return self.read_illegal(),
        };

        self.position += 1;
        Token::new(
            kind,
            &self.input[start..self.position],
            Span::new(start, self.position),
        )
    }

    fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position + 1).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.position += 1;
        }
    }

    fn two_char_token(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.position += 2;
        Token::new(
            kind,
            &self.input[start..self.position],
            Span::new(start, self.position),
        )
    }

    fn read_while(&mut self, predicate: impl Fn(u8) -> bool) -> &'a str {
        let input = self.input;
        let start = self.position;
        while self.current().is_some_and(&predicate) {
            self.position += 1;
        }
        &input[start..self.position]
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        let ident = self.read_while(is_letter);
        Token::new(lookup_ident(ident), ident, Span::new(start, self.position))
    }

    fn read_number(&mut self) -> Token {
        let start = self.position;
        let digits = self.read_while(|c| c.is_ascii_digit());
        Token::new(TokenKind::Int, digits, Span::new(start, self.position))
    }

    /// Read a `"`-delimited string. An unterminated string runs to the end
    /// of input and is returned without complaint.
    fn read_string(&mut self) -> Token {
        let start = self.position;
        self.position += 1;
        let content = self.read_while(|c| c != b'"');
        if self.current() == Some(b'"') {
            self.position += 1;
        }
        Token::new(TokenKind::String, content, Span::new(start, self.position))
    }

    /// Consume one whole character that starts no token
    fn read_illegal(&mut self) -> Token {
        let start = self.position;
        let width = self.input[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.position += width;
        Token::new(
            TokenKind::Illegal,
            &self.input[start..self.position],
            Span::new(start, self.position),
        )
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token including a single trailing `Eof`
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}
