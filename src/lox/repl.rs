//! Decides what the REPL does with the input buffered so far.
//!
//! A line that ends inside a string (or a block comment, when those are
//! reported) is not wrong yet, only unfinished. The REPL keeps such input and
//! rescans it once the next line has been appended.

use tracing::debug;

use crate::lox::errors::{EngineError, UnterminatedError as _};
use crate::lox::token::lexer::{tokenize_with, LexingError, ScanOptions};
use crate::lox::token::tokens::Token;

/// The outcome of scanning the buffered REPL input.
#[derive(Debug, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the REPL has to handle every outcome, a new one is a breaking change."
)]
pub enum ReplInput {
    /// The input scanned cleanly; print the tokens and start over.
    Complete(Vec<Token>),
    /// The input only fails because it ends too early; wait for another line.
    Incomplete(Vec<LexingError>),
    /// The input is wrong no matter what follows; report and start over.
    Invalid(Vec<LexingError>),
}

impl ReplInput {
    /// Scans everything buffered so far.
    #[must_use]
    pub fn scan(input: &str, options: ScanOptions) -> Self {
        match tokenize_with(input, options) {
            Ok(tokens) => ReplInput::Complete(tokens),
            Err(errs) if errs.is_unterminated() => {
                debug!(errors = errs.len(), "waiting for a continuation line");
                ReplInput::Incomplete(errs)
            }
            Err(errs) => ReplInput::Invalid(errs),
        }
    }

    /// Resolves the input once no further line will come. Input that was
    /// still waiting for a continuation is an error at that point.
    ///
    /// # Errors
    ///
    /// [`EngineError::LexingErrors`] if the input did not scan cleanly.
    pub fn finish(self) -> Result<Vec<Token>, EngineError> {
        match self {
            ReplInput::Complete(tokens) => Ok(tokens),
            ReplInput::Incomplete(errs) | ReplInput::Invalid(errs) => Err(errs.into()),
        }
    }
}

#[cfg(test)]
mod test {
    use std::process::ExitCode;

    use pretty_assertions::assert_eq;

    use super::ReplInput;
    use crate::lox::errors::EngineError;
    use crate::lox::token::lexer::{LexingError, ScanOptions};
    use crate::lox::token::tokens::{Keyword, Token, TokenType};
    use crate::lox::types::Literal;

    #[test]
    fn open_string_waits_for_the_next_line() {
        let first = ReplInput::scan("print \"open\n", ScanOptions::default());
        assert_eq!(
            first,
            ReplInput::Incomplete(vec![LexingError::UnterminatedString { line: 2 }])
        );

        let joined = ReplInput::scan("print \"open\nclose\";\n", ScanOptions::default());
        assert_eq!(
            joined,
            ReplInput::Complete(vec![
                Token::new(TokenType::Keyword(Keyword::Print), "print", 1),
                Token::with_literal(
                    TokenType::String,
                    "\"open\nclose\"",
                    Literal::String("open\nclose".to_owned()),
                    1
                ),
                Token::new(TokenType::Semicolon, ";", 2),
                Token::new(TokenType::Eof, "", 3),
            ])
        );
    }

    #[test]
    fn open_comment_only_waits_when_reported() {
        let silent = ReplInput::scan("1 /* open\n", ScanOptions::default());
        assert!(
            matches!(silent, ReplInput::Complete(ref tokens) if tokens.len() == 2),
            "unreported comments simply end the input"
        );

        let options = ScanOptions::default().with_unterminated_comments_reported(true);
        assert_eq!(
            ReplInput::scan("1 /* open\n", options),
            ReplInput::Incomplete(vec![LexingError::UnterminatedComment { line: 1 }])
        );
    }

    #[test]
    fn stray_character_is_reported_right_away() {
        assert_eq!(
            ReplInput::scan("@ \"open\n", ScanOptions::default()),
            ReplInput::Invalid(vec![
                LexingError::UnexpectedCharacter { character: '@', line: 1 },
                LexingError::UnterminatedString { line: 2 },
            ])
        );
    }

    #[test]
    fn pending_input_at_end_fails_like_a_file() {
        let pending = ReplInput::scan("\"never closed\n", ScanOptions::default());
        let err = pending.finish().expect_err("an open string cannot finish");
        assert!(
            matches!(err, EngineError::LexingErrors(ref errs) if errs.len() == 1),
            "the open string is the only error"
        );
        assert_eq!(ExitCode::from(err), ExitCode::from(65));
    }

    #[test]
    fn complete_input_finishes_with_its_tokens() {
        let tokens = ReplInput::scan("nil\n", ScanOptions::default())
            .finish()
            .expect("nil is complete");
        assert_eq!(tokens.len(), 2);
    }
}
