//! Tokenizer for type-expression fragments.
//!
//! Only the tokens that can appear in a type annotation are recognised.
//! Anything else is reported as `TokenKind::Unknown` and rejected by the
//! parser.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Dot,
    Comma,
    LessThan,
    GreaterThan,
    Question,
    Asterisk,
    Unknown,
    EndOfFile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: u32,
    pub end: u32,
}

pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Source text covered by `token`.
    pub fn token_text(&self, token: Token) -> &'a str {
        &self.text[token.start as usize..token.end as usize]
    }

    pub fn scan(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;
        let Some(ch) = self.text[self.pos..].chars().next() else {
            return self.token(TokenKind::EndOfFile, start);
        };

        if is_identifier_start(ch) {
            self.pos += ch.len_utf8();
            while let Some(next) = self.text[self.pos..].chars().next() {
                if !is_identifier_part(next) {
                    break;
                }
                self.pos += next.len_utf8();
            }
            return self.token(TokenKind::Identifier, start);
        }

        self.pos += ch.len_utf8();
        let kind = match ch {
            '.' => TokenKind::Dot,
            ',' => TokenKind::Comma,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            '?' => TokenKind::Question,
            '*' => TokenKind::Asterisk,
            _ => TokenKind::Unknown,
        };
        self.token(kind, start)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.text[self.pos..].chars().next() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            start: start as u32,
            end: self.pos as u32,
        }
    }
}

#[inline]
fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

#[inline]
fn is_identifier_part(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}
