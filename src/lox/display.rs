//! The one-line token rendering used by the reference Lox test suites,
//! `TYPE lexeme literal`, so output can be diffed against them directly.

use crate::lox::token::tokens::{Keyword, Token, TokenType};

/// Renders a value the way the reference implementation prints it.
pub trait LoxStdDisplay {
    /// The standard rendering.
    fn std_display(&self) -> String;
}

/// The upper-case category name of a keyword, e.g. `WHILE`.
const fn keyword_name(keyword: Keyword) -> &'static str {
    match keyword {
        Keyword::Nil => "NIL",
        Keyword::False => "FALSE",
        Keyword::True => "TRUE",
        Keyword::And => "AND",
        Keyword::Or => "OR",
        Keyword::If => "IF",
        Keyword::Else => "ELSE",
        Keyword::For => "FOR",
        Keyword::While => "WHILE",
        Keyword::Return => "RETURN",
        Keyword::Class => "CLASS",
        Keyword::Fun => "FUN",
        Keyword::Var => "VAR",
        Keyword::Print => "PRINT",
        Keyword::Super => "SUPER",
        Keyword::This => "THIS",
    }
}

/// The upper-snake-case category name, e.g. `BANG_EQUAL`.
const fn type_name(token_type: TokenType) -> &'static str {
    match token_type {
        TokenType::LeftParen    => "LEFT_PAREN",
        TokenType::RightParen   => "RIGHT_PAREN",
        TokenType::LeftBrace    => "LEFT_BRACE",
        TokenType::RightBrace   => "RIGHT_BRACE",
        TokenType::Plus         => "PLUS",
        TokenType::Minus        => "MINUS",
        TokenType::Slash        => "SLASH",
        TokenType::Star         => "STAR",
        TokenType::Bang         => "BANG",
        TokenType::BangEqual    => "BANG_EQUAL",
        TokenType::EqualEqual   => "EQUAL_EQUAL",
        TokenType::Greater      => "GREATER",
        TokenType::GreaterEqual => "GREATER_EQUAL",
        TokenType::Less         => "LESS",
        TokenType::LessEqual    => "LESS_EQUAL",
        TokenType::Comma        => "COMMA",
        TokenType::Dot          => "DOT",
        TokenType::Semicolon    => "SEMICOLON",
        TokenType::Equal        => "EQUAL",
        TokenType::String       => "STRING",
        TokenType::Number       => "NUMBER",
        TokenType::Identifier   => "IDENTIFIER",
        TokenType::Keyword(kw)  => keyword_name(kw),
        TokenType::Eof          => "EOF",
    }
}

impl LoxStdDisplay for Token {
    fn std_display(&self) -> String {
        let Token {
            token_type,
            ref lexeme,
            ref literal,
            ..
        } = *self;

        match *literal {
            Some(ref literal) => format!("{} {lexeme} {literal}", type_name(token_type)),
            None => format!("{} {lexeme} null", type_name(token_type)),
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::LoxStdDisplay;
    use crate::lox::token::lexer::tokenize;

    fn render(source: &str) -> Vec<String> {
        tokenize(source)
            .expect("Tokenizing failed")
            .iter()
            .map(LoxStdDisplay::std_display)
            .collect()
    }

    #[test]
    fn renders_like_the_reference_scanner() {
        assert_eq!(
            render("var x = 5;"),
            vec![
                "VAR var null",
                "IDENTIFIER x null",
                "EQUAL = null",
                "NUMBER 5 5.0",
                "SEMICOLON ; null",
                "EOF  null",
            ]
        );
    }

    #[test]
    fn renders_operators_and_strings() {
        assert_eq!(
            render("!= \"hi there\" 1.5"),
            vec![
                "BANG_EQUAL != null",
                "STRING \"hi there\" hi there",
                "NUMBER 1.5 1.5",
                "EOF  null",
            ]
        );
    }

    #[test]
    fn renders_huge_numbers_in_exponent_notation() {
        assert_eq!(
            render("10000000000000000"),
            vec!["NUMBER 10000000000000000 1.0E16", "EOF  null"]
        );
    }
}
