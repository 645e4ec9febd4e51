//! Errors that can occur during the lifetime of the tool, and the sink
//! the scanner reports malformed input to.
use std::io::Error as IOError;
use std::process::ExitCode;

use itertools::Itertools as _;
use thiserror::Error;

use crate::lox::token::lexer::LexingError;

/// Receives every error found while scanning, in source order.
///
/// The scanner never looks at what the reporter does with an error; it
/// always carries on with the next character. Whether the input is good
/// enough to parse is up to whoever owns the reporter.
pub trait ErrorReporter {
    /// Called exactly once per malformed lexeme.
    fn report(&mut self, error: LexingError);
}

/// Collects errors for later inspection.
impl ErrorReporter for Vec<LexingError> {
    #[inline]
    fn report(&mut self, error: LexingError) {
        self.push(error);
    }
}

/// Lends a reporter to a lexer without giving it away.
impl<R: ErrorReporter + ?Sized> ErrorReporter for &mut R {
    #[inline]
    fn report(&mut self, error: LexingError) {
        (**self).report(error);
    }
}

/// An error that occurred inside the Lox engine.
/// This enum will be extended bit by bit as new phases
/// get added.
///
/// To support the [`std::process::Termination`] trait such that, just like
/// the Crafting Interpreters book, we can use exit codes as specified by
/// the [`<sysexits.h>`](https://man.freebsd.org/cgi/man.cgi?query=sysexits&apropos=0&sektion=0&manpath=FreeBSD+4.3-RELEASE&format=html)
/// header, a `From<EngineError> for ExitCode` implementation is provided.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Errors that happened when trying to load the file
    /// or read the REPL line.
    #[error("Error reading source file: {0}")]
    FileError(#[from] IOError),
    /// Errors that happened during the lexing phase.
    #[error("Errors when scanning:\n{}", join_errors(.0))]
    LexingErrors(Vec<LexingError>),
}

impl From<Vec<LexingError>> for EngineError {
    fn from(value: Vec<LexingError>) -> Self {
        EngineError::LexingErrors(value)
    }
}

/// One error per line.
fn join_errors(errs: &[LexingError]) -> String {
    errs.iter().join("\n")
}

impl From<EngineError> for ExitCode {
    fn from(value: EngineError) -> Self {
        ExitCode::from(match value {
            // Technically, 66 only specifies missing or unreadable files
            // any other errors during I/O for both the file, and the REPL command,
            // should be presented as 74, EX_IOERR
            EngineError::FileError(_) => 66,    // EX_NOINPUT
            EngineError::LexingErrors(_) => 65, // EX_DATAERR
        })
    }
}

// Continuation helpers for the REPL

/// Whether an error occurred because the input was too short.
/// Such errors can be recoverable by allowing further input on the REPL.
pub trait UnterminatedError {
    /// Was this error caused by sudden end of input?
    fn is_unterminated(&self) -> bool;
}

impl UnterminatedError for LexingError {
    fn is_unterminated(&self) -> bool {
        match *self {
            LexingError::UnexpectedCharacter { .. } => false,
            LexingError::UnterminatedString { .. } | LexingError::UnterminatedComment { .. } => {
                true
            }
        }
    }
}

/// Only recoverable if every error is; an unexpected character stays wrong
/// no matter what follows it.
impl UnterminatedError for [LexingError] {
    fn is_unterminated(&self) -> bool {
        !self.is_empty() && self.iter().all(LexingError::is_unterminated)
    }
}

impl UnterminatedError for EngineError {
    fn is_unterminated(&self) -> bool {
        match *self {
            EngineError::LexingErrors(ref errs) => errs.is_unterminated(),
            EngineError::FileError(_) => false,
        }
    }
}
