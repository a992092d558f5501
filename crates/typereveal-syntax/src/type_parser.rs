//! Type-expression parser.
//!
//! Parses annotation text such as `Map<String, List<Int>>?` into a detached
//! `TypeExpr`. Parsing never touches a `NodeArena`; callers materialise the
//! result with `NodeArena::create_type_reference` once the whole fragment has
//! been accepted, so a malformed fragment leaves the tree untouched.
//!
//! Grammar:
//!
//! ```text
//! type      := qualified type_args? '?'?
//! qualified := Identifier ('.' Identifier)*
//! type_args := '<' argument (',' argument)* '>'
//! argument  := '*' | type
//! ```
//!
//! Type arguments may nest at most `MAX_TYPE_NESTING_DEPTH` levels deep.

use crate::scanner::{Scanner, Token, TokenKind};
use std::fmt;
use thiserror::Error;
use typereveal_common::limits::MAX_TYPE_NESTING_DEPTH;

/// Keywords that can never name a type.
const RESERVED_NAMES: &[&str] = &["null", "val", "var", "fun", "class", "object"];

/// A parsed type expression, not yet attached to any tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    Named {
        name: Vec<String>,
        arguments: Vec<TypeExpr>,
        nullable: bool,
    },
    /// `*` projection, only valid as a type argument.
    Star,
}

impl fmt::Display for TypeExpr {
    /// Canonical spelling: `.`-joined names, `", "` between arguments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Star => f.write_str("*"),
            Self::Named {
                name,
                arguments,
                nullable,
            } => {
                f.write_str(&name.join("."))?;
                if !arguments.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                if *nullable {
                    f.write_str("?")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message} (at offset {offset})")]
pub struct TypeParseError {
    pub message: String,
    pub offset: u32,
}

impl TypeParseError {
    fn new(message: impl Into<String>, offset: u32) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

/// Parse `text` as a complete type expression.
pub fn parse_type_text(text: &str) -> Result<TypeExpr, TypeParseError> {
    let mut parser = TypeParser::new(text);
    let ty = parser.parse_type()?;
    if parser.current.kind != TokenKind::EndOfFile {
        return Err(TypeParseError::new(
            format!("Unexpected '{}'", parser.current_text()),
            parser.current.start,
        ));
    }
    Ok(ty)
}

struct TypeParser<'a> {
    scanner: Scanner<'a>,
    current: Token,
    /// Current type-argument nesting.
    depth: u32,
}

impl<'a> TypeParser<'a> {
    fn new(text: &'a str) -> Self {
        let mut scanner = Scanner::new(text);
        let current = scanner.scan();
        Self {
            scanner,
            current,
            depth: 0,
        }
    }

    fn advance(&mut self) -> Token {
        let token = self.current;
        self.current = self.scanner.scan();
        token
    }

    fn current_text(&self) -> &'a str {
        self.scanner.token_text(self.current)
    }

    fn parse_optional(&mut self, kind: TokenKind) -> bool {
        if self.current.kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn parse_expected(&mut self, kind: TokenKind, what: &str) -> Result<Token, TypeParseError> {
        if self.current.kind == kind {
            return Ok(self.advance());
        }
        Err(self.unexpected(what))
    }

    fn unexpected(&self, what: &str) -> TypeParseError {
        if self.current.kind == TokenKind::EndOfFile {
            TypeParseError::new(format!("{what} expected"), self.current.start)
        } else {
            TypeParseError::new(
                format!("{what} expected, found '{}'", self.current_text()),
                self.current.start,
            )
        }
    }

    fn parse_type(&mut self) -> Result<TypeExpr, TypeParseError> {
        let name = self.parse_qualified_name()?;

        let mut arguments = Vec::new();
        if self.current.kind == TokenKind::LessThan {
            if self.depth >= MAX_TYPE_NESTING_DEPTH {
                return Err(TypeParseError::new(
                    format!("Type arguments nested deeper than {MAX_TYPE_NESTING_DEPTH} levels"),
                    self.current.start,
                ));
            }
            self.advance();
            self.depth += 1;
            let parsed = self.parse_type_argument_list(&mut arguments);
            self.depth -= 1;
            parsed?;
        }

        let nullable = self.parse_optional(TokenKind::Question);
        Ok(TypeExpr::Named {
            name,
            arguments,
            nullable,
        })
    }

    fn parse_type_argument_list(
        &mut self,
        arguments: &mut Vec<TypeExpr>,
    ) -> Result<(), TypeParseError> {
        loop {
            arguments.push(self.parse_type_argument()?);
            if !self.parse_optional(TokenKind::Comma) {
                break;
            }
        }
        self.parse_expected(TokenKind::GreaterThan, "'>'")?;
        Ok(())
    }

    fn parse_type_argument(&mut self) -> Result<TypeExpr, TypeParseError> {
        if self.parse_optional(TokenKind::Asterisk) {
            return Ok(TypeExpr::Star);
        }
        self.parse_type()
    }

    fn parse_qualified_name(&mut self) -> Result<Vec<String>, TypeParseError> {
        let mut segments = vec![self.parse_identifier()?];
        while self.parse_optional(TokenKind::Dot) {
            segments.push(self.parse_identifier()?);
        }
        Ok(segments)
    }

    fn parse_identifier(&mut self) -> Result<String, TypeParseError> {
        let token = self.parse_expected(TokenKind::Identifier, "Type name")?;
        let text = self.scanner.token_text(token);
        if RESERVED_NAMES.contains(&text) {
            return Err(TypeParseError::new(
                format!("'{text}' is a keyword and cannot name a type"),
                token.start,
            ));
        }
        Ok(text.to_string())
    }
}

#[cfg(test)]
#[path = "../tests/type_parser_tests.rs"]
mod tests;
