//! Front end of the grammex pipeline.
//!
//! This crate turns grammar-description source text into unresolved
//! grammar declarations:
//! - [`lexer`] splits the source into word, keyword and brace tokens,
//!   keeping single-quoted literals (whitespace included) as one token
//! - [`parser`] drives an explicit state machine over those tokens and
//!   emits one [`GrammarDecl`] per closed `grammar name { ... }` block
//!
//! Atom descriptors are kept as raw text here. Turning them into literals,
//! references and patterns is the job of `grammex-resolve`.

pub mod ast;
pub mod lexer;
pub mod observer;
pub mod options;
pub mod parser;
mod error;

pub use ast::*;
pub use error::SyntaxError;
pub use lexer::{tokenize, tokenize_with, Token, TokenKind};
pub use observer::{CompileObserver, LogCompileObserver, NoopCompileObserver};
pub use options::{CompileOptions, DuplicatePolicy, LiteralPolicy};
pub use parser::{parse_grammars, Pending, State, StateKind};

/// Result type for tokenizing and parsing grammar source.
pub type SyntaxResult<T> = std::result::Result<T, SyntaxError>;
