//! Data types representing tokens available in the Lox language.
use core::fmt::{Display, Formatter};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::lox::types::{Line, Literal};
use crate::lox::util::map;

/// Keywords in the Lox language.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the set of reserved words is fixed by the language."
)]
pub enum Keyword {
    // Constants
    /// `"nil"`
    Nil,
    /// `"false"`
    False,
    /// `"true"`
    True,

    // Logical Operators
    /// `"and"`
    And,
    /// `"or"`
    Or,

    // Control flow
    /// `"if"`
    If,
    /// `"else"`
    Else,
    /// `"for"`
    For,
    /// `"while"`
    While,
    /// `"return"`
    Return,

    // Declarations
    /// `"class"`
    Class,
    /// `"fun"`
    Fun,
    /// `"var"`
    Var,

    // Others
    /// `"print"`
    Print,
    /// `"super"`
    Super,
    /// `"this"`
    This,
}

impl Keyword {
    /// Look up a keyword by its exact source text. Case-sensitive.
    #[must_use]
    pub fn from_lexeme(lexeme: &str) -> Option<Keyword> {
        KEYWORDS.get(lexeme).copied()
    }

    /// The reserved word as it occurs in the source code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Nil => "nil",
            Keyword::False => "false",
            Keyword::True => "true",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::Return => "return",
            Keyword::Class => "class",
            Keyword::Fun => "fun",
            Keyword::Var => "var",
            Keyword::Print => "print",
            Keyword::Super => "super",
            Keyword::This => "this",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup table for keywords to distinguish them from identifiers.
///
/// Built on first use and never written afterwards, so concurrent
/// lexers share it freely.
pub static KEYWORDS: LazyLock<HashMap<&'static str, Keyword>> = LazyLock::new(|| {
    map! {
        "nil"    => Keyword::Nil,
        "false"  => Keyword::False,
        "true"   => Keyword::True,

        "and"    => Keyword::And,
        "or"     => Keyword::Or,

        "if"     => Keyword::If,
        "else"   => Keyword::Else,
        "for"    => Keyword::For,
        "while"  => Keyword::While,
        "return" => Keyword::Return,

        "class"  => Keyword::Class,
        "fun"    => Keyword::Fun,
        "var"    => Keyword::Var,

        "print"  => Keyword::Print,
        "super"  => Keyword::Super,
        "this"   => Keyword::This,
    }
});

/// The category of a token.
///
/// Unlike the lexeme, the category carries no data: literal values travel
/// separately on the [Token], and identifiers are identified by their lexeme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new variant MUST be handled and is a breaking change."
)]
pub enum TokenType {
    // Grouping
    /// `"("`
    LeftParen,
    /// `")"`
    RightParen,
    /// `"{"`
    LeftBrace,
    /// `"}"`
    RightBrace,

    // Arith Operators
    /// `"+"`
    Plus,
    /// `"-"`
    Minus,
    /// `"/"`
    Slash,
    /// `"*"`
    Star,

    // Boolean Operators
    /// `"!"`
    Bang,
    /// `"!="`
    BangEqual,
    /// `"=="`
    EqualEqual,
    /// `">"`
    Greater,
    /// `">="`
    GreaterEqual,
    /// `"<"`
    Less,
    /// `"<="`
    LessEqual,

    // Special Operators
    /// `","`
    Comma,
    /// `"."`
    Dot,
    /// `";"`
    Semicolon,
    /// `"="`
    Equal,

    // Literals
    /// A string literal, `"..."`.
    String,
    /// A number literal, `12` or `12.5`.
    Number,

    // Identifiers and Keywords
    /// A custom identifier
    Identifier,
    /// A specific keyword
    Keyword(Keyword),

    /// End of input. Always the last token, and only ever once.
    Eof,
}

/// A single lexeme, classified.
#[derive(Clone, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_structs,
    reason = "consumers destructure tokens; a new field is a breaking change anyway."
)]
pub struct Token {
    /// Category of this token.
    pub token_type: TokenType,
    /// Exact source text this token was scanned from.
    pub lexeme: String,
    /// Decoded value, present for strings and numbers only.
    pub literal: Option<Literal>,
    /// Line on which the token started.
    pub line: Line,
}

impl Token {
    /// Creates a token without a literal value.
    #[must_use]
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S, line: Line) -> Self {
        Token {
            token_type,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    /// Creates a token carrying a decoded literal value.
    #[must_use]
    pub fn with_literal<S: Into<String>>(
        token_type: TokenType,
        lexeme: S,
        literal: Literal,
        line: Line,
    ) -> Self {
        Token {
            literal: Some(literal),
            ..Token::new(token_type, lexeme, line)
        }
    }

    /// Is this the end-of-input sentinel?
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "<{} @ line {}>", self.lexeme, self.line)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{Keyword, Token, TokenType, KEYWORDS};
    use crate::lox::types::Literal;

    #[test]
    fn keyword_table_round_trips_every_keyword() {
        assert_eq!(KEYWORDS.len(), 16);
        for (&text, &keyword) in KEYWORDS.iter() {
            assert_eq!(keyword.as_str(), text);
        }
    }

    #[test]
    fn keyword_lookup_is_case_sensitive() {
        assert_eq!(Keyword::from_lexeme("or"), Some(Keyword::Or));
        assert_eq!(Keyword::from_lexeme("Or"), None);
        assert_eq!(Keyword::from_lexeme("OR"), None);
        assert_eq!(Keyword::from_lexeme("orr"), None);
    }

    #[test]
    fn literal_tokens_keep_their_value() {
        let token = Token::with_literal(TokenType::Number, "5", Literal::Number(5.0), 3);
        assert_eq!(token.literal, Some(Literal::Number(5.0)));
        assert_eq!(token.line, 3);
        assert_eq!(token.to_string(), "<5 @ line 3>");
        assert!(!token.is_eof(), "a number is not the end of input");
    }
}
