//! Encapsulates all behaviour necessary to properly lex Lox code.
//!
//! Note: Lexing is also commonly categorized as tokenizing. The type doing
//! the work is the [Lexer]; [tokenize] wraps it for callers that only want
//! the tokens of well-formed input.
//!
//! ```rust
//! use lox_scanner::lox::token::lexer::{tokenize, Lexer, LexingError};
//! use lox_scanner::lox::token::tokens::TokenType;
//!
//! let tokens = tokenize("var x = 5; /* a /* nested */ comment */").expect("valid input");
//! assert_eq!(tokens.len(), 6);
//! assert_eq!(tokens[3].token_type, TokenType::Number);
//!
//! let mut errors: Vec<LexingError> = Vec::new();
//! let tokens = Lexer::new("print @;", &mut errors).scan_tokens();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(errors, vec![LexingError::UnexpectedCharacter { character: '@', line: 1 }]);
//! ```
#![expect(
    clippy::min_ident_chars,
    reason = "short names do not decrease readability here."
)]

use core::str::FromStr;

use thiserror::Error;
use tracing::{debug, trace};

use crate::lox::errors::ErrorReporter;
use crate::lox::token::tokens::{Keyword, Token, TokenType};
use crate::lox::types::{Line, Literal};

/// Errors that can happen during lexing.
///
/// None of them stop the scan: each is reported once and lexing resumes
/// at the next unconsumed character.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LexingError {
    /// A character that starts no lexeme of the language.
    #[error("[line {line}] Error: Unexpected character.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Line the character is on.
        line: Line,
    },
    /// A string was started but not terminated until the end of input/file.
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString {
        /// Line the input ended on.
        line: Line,
    },
    /// A block comment was still open at the end of input/file.
    ///
    /// Only reported when enabled through [`ScanOptions`].
    #[error("[line {line}] Error: Unterminated block comment.")]
    UnterminatedComment {
        /// Line the outermost comment was opened on.
        line: Line,
    },
}

impl LexingError {
    /// The line this error is attributed to.
    #[must_use]
    pub const fn line(&self) -> Line {
        match *self {
            LexingError::UnexpectedCharacter { line, .. }
            | LexingError::UnterminatedString { line }
            | LexingError::UnterminatedComment { line } => line,
        }
    }

    /// The message without the line prefix.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match *self {
            LexingError::UnexpectedCharacter { .. } => "Unexpected character.",
            LexingError::UnterminatedString { .. } => "Unterminated string.",
            LexingError::UnterminatedComment { .. } => "Unterminated block comment.",
        }
    }
}

/// Knobs for a single scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanOptions {
    /// Report block comments still open at the end of input.
    /// Off by default, where they silently swallow the rest of the input.
    pub report_unterminated_comments: bool,
}

impl ScanOptions {
    /// Enables or disables reporting of unterminated block comments.
    #[must_use]
    pub const fn with_unterminated_comments_reported(mut self, enabled: bool) -> Self {
        self.report_unterminated_comments = enabled;
        self
    }
}

/// A one-shot scanner over a single source text.
///
/// `start` and `current` are byte offsets into `source` and always sit on
/// character boundaries, with `start <= current <= source.len()`.
#[derive(Debug)]
pub struct Lexer<'src, R> {
    /// The full source text.
    source: &'src str,
    /// Sink for malformed input.
    reporter: R,
    /// Behaviour switches for this scan.
    options: ScanOptions,
    /// Tokens emitted so far.
    tokens: Vec<Token>,
    /// Offset of the first character of the current lexeme.
    start: usize,
    /// Offset of the next unread character.
    current: usize,
    /// Line of the next unread character.
    line: Line,
    /// Line the current lexeme started on.
    start_line: Line,
}

impl<'src, R: ErrorReporter> Lexer<'src, R> {
    /// Creates a lexer with default [`ScanOptions`].
    #[must_use]
    pub fn new(source: &'src str, reporter: R) -> Self {
        Lexer::with_options(source, reporter, ScanOptions::default())
    }

    /// Creates a lexer with the given options.
    #[must_use]
    pub fn with_options(source: &'src str, reporter: R, options: ScanOptions) -> Self {
        Lexer {
            source,
            reporter,
            options,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Scans the whole source. The result always ends in exactly one
    /// [`TokenType::Eof`]; malformed input is handed to the reporter and
    /// leaves a gap in the sequence instead.
    #[must_use]
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens
            .push(Token::new(TokenType::Eof, String::new(), self.line));
        debug!(
            tokens = self.tokens.len(),
            lines = self.line,
            "finished scanning"
        );
        self.tokens
    }

    /// Lexes the next lexeme, emitting at most one token.
    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Grouping
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),

            // Arith Operators
            '+' => self.add_token(TokenType::Plus),
            '-' => self.add_token(TokenType::Minus),
            '*' => self.add_token(TokenType::Star),

            // Comments, or a plain slash
            '/' if self.next_is('/') => self.line_comment(),
            '/' if self.next_is('*') => self.block_comment(),
            '/' => self.add_token(TokenType::Slash),

            // Boolean Operators
            '!' if self.next_is('=') => self.add_token(TokenType::BangEqual),
            '!' => self.add_token(TokenType::Bang),
            '=' if self.next_is('=') => self.add_token(TokenType::EqualEqual),
            '=' => self.add_token(TokenType::Equal),
            '>' if self.next_is('=') => self.add_token(TokenType::GreaterEqual),
            '>' => self.add_token(TokenType::Greater),
            '<' if self.next_is('=') => self.add_token(TokenType::LessEqual),
            '<' => self.add_token(TokenType::Less),

            // Special Operators
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            ';' => self.add_token(TokenType::Semicolon),

            // Whitespace; `advance` already counted the newline.
            ' ' | '\t' | '\r' | '\n' => {}

            // Literals
            '"' => self.string(),
            c if is_digit(c) => self.number(),

            // Identifiers and Keywords
            c if is_alpha(c) => self.identifier(),

            // ERROR
            character => self.report(LexingError::UnexpectedCharacter {
                character,
                line: self.line,
            }),
        }
    }

    /// Skips to the end of the line, leaving the newline itself in place.
    fn line_comment(&mut self) {
        while self.advance_if(|c| c != '\n').is_some() {}
    }

    /// Skips a block comment whose opening `/*` was just consumed.
    /// Comments nest, so the comment only ends once every opened `/*`
    /// has been closed again.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "depth is at least 1 whenever it is decremented, and cannot outgrow the input length."
    )]
    fn block_comment(&mut self) {
        let mut depth = 1usize;
        while depth > 0 {
            match self.advance() {
                None => {
                    if self.options.report_unterminated_comments {
                        self.report(LexingError::UnterminatedComment {
                            line: self.start_line,
                        });
                    }
                    return;
                }
                Some('/') if self.next_is('*') => depth += 1,
                Some('*') if self.next_is('/') => depth -= 1,
                Some(_) => {}
            }
        }
    }

    /// Lexes a string literal whose opening quote was just consumed.
    /// Strings may span lines; escapes are not interpreted.
    fn string(&mut self) {
        while self.advance_if(|c| c != '"').is_some() {}

        if self.advance().is_none() {
            self.report(LexingError::UnterminatedString { line: self.line });
            return;
        }

        let lexeme = self.lexeme();
        let value = lexeme
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or_default()
            .to_owned();
        self.add_literal_token(TokenType::String, Literal::String(value));
    }

    /// Lexes a number. A `.` only belongs to the number if a digit follows
    /// it, so `1.` is a number followed by a dot.
    fn number(&mut self) {
        while self.advance_if(is_digit).is_some() {}

        if self.peek() == Some('.') && self.peek_next().is_some_and(is_digit) {
            let _: Option<char> = self.advance();
            while self.advance_if(is_digit).is_some() {}
        }

        let value = f64::from_str(self.lexeme())
            .expect("a run of digits with an optional fraction always parses");
        self.add_literal_token(TokenType::Number, Literal::Number(value));
    }

    /// Lexes an identifier, which may turn out to be a keyword.
    fn identifier(&mut self) {
        while self.advance_if(is_alpha_num).is_some() {}

        let token_type = Keyword::from_lexeme(self.lexeme())
            .map_or(TokenType::Identifier, TokenType::Keyword);
        self.add_token(token_type);
    }

    /// The source text of the current lexeme.
    fn lexeme(&self) -> &'src str {
        self.source
            .get(self.start..self.current)
            .unwrap_or_default()
    }

    /// Emits a token spanning the current lexeme.
    fn add_token(&mut self, token_type: TokenType) {
        let token = Token::new(token_type, self.lexeme(), self.start_line);
        trace!(?token_type, lexeme = token.lexeme.as_str(), line = token.line, "token");
        self.tokens.push(token);
    }

    /// Emits a token spanning the current lexeme, with a decoded value.
    fn add_literal_token(&mut self, token_type: TokenType, literal: Literal) {
        let token = Token::with_literal(token_type, self.lexeme(), literal, self.start_line);
        trace!(?token_type, lexeme = token.lexeme.as_str(), line = token.line, "token");
        self.tokens.push(token);
    }

    /// Hands an error to the reporter. Scanning carries on regardless.
    fn report(&mut self, error: LexingError) {
        debug!(line = error.line(), message = error.message(), "lexing error");
        self.reporter.report(error);
    }

    /// Have all characters been consumed?
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// The next unread character.
    fn peek(&self) -> Option<char> {
        self.source
            .get(self.current..)
            .and_then(|rest| rest.chars().next())
    }

    /// The character after the next unread one.
    fn peek_next(&self) -> Option<char> {
        self.source
            .get(self.current..)
            .and_then(|rest| rest.chars().nth(1))
    }

    /// Consumes the next character, counting lines as it goes.
    /// This is the only place `line` changes.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "both counters are bounded by the length of the source."
    )]
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes the next character only if it matches the predicate.
    fn advance_if<F: FnOnce(char) -> bool>(&mut self, test: F) -> Option<char> {
        match self.peek() {
            Some(c) if test(c) => self.advance(),
            Some(_) | None => None,
        }
    }

    /// Consumes the next character only if it is exactly `expected`.
    fn next_is(&mut self, expected: char) -> bool {
        self.advance_if(|c| c == expected).is_some()
    }
}

/// Tokenizes the given source code of Lox into either a [Vec] of [`Tokens`](Token),
/// or returns all [`LexingErrors`](LexingError) if any did occur.
/// Thus, you cannot proceed with the list of tokens if lexing had any errors.
///
/// # Errors
///
/// Every error reported during the scan, in source order.
pub fn tokenize<S: AsRef<str>>(source: S) -> Result<Vec<Token>, Vec<LexingError>> {
    tokenize_with(source, ScanOptions::default())
}

/// Like [tokenize], with explicit [`ScanOptions`].
///
/// # Errors
///
/// Every error reported during the scan, in source order.
pub fn tokenize_with<S: AsRef<str>>(
    source: S,
    options: ScanOptions,
) -> Result<Vec<Token>, Vec<LexingError>> {
    let mut errs: Vec<LexingError> = Vec::new();
    let tokens = Lexer::with_options(source.as_ref(), &mut errs, options).scan_tokens();

    if errs.is_empty() {
        Ok(tokens)
    } else {
        Err(errs)
    }
}

/// Is the character an ASCII digit?
#[inline]
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Is the character in the ASCII alphabet, or an underscore?
#[inline]
fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || (c == '_')
}

/// Is the character an alphanumeric ASCII character, or an underscore?
#[inline]
fn is_alpha_num(c: char) -> bool {
    c.is_ascii_alphanumeric() || (c == '_')
}
