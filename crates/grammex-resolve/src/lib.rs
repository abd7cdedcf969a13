//! Compiled grammars and the pass that produces them.
//!
//! `grammex-syntax` hands over grammar declarations whose atoms are still
//! raw descriptors. This crate:
//! - allocates every entry of a grammar into an arena ([`Grammar`]) so
//!   references, including cyclic ones, become plain [`MatcherId`]s
//! - classifies each descriptor as a literal, a reference or a pattern
//!   ([`resolver`])
//! - exposes the whole compile step, tokens in and grammars out
//!   ([`compile`], [`compile_source`])
//! - offers [`GrammarBuilder`] for assembling grammars in code

pub mod builder;
pub mod compile;
pub mod error;
pub mod model;
pub mod resolver;

pub use builder::{literal, reference, GrammarBuilder};
pub use compile::{compile, compile_observed, compile_source, Grammars};
pub use error::{CompileError, ResolutionError};
pub use model::{Atom, Grammar, Matcher, MatcherId};
pub use resolver::{classify, resolve_grammar, Descriptor, Resolver};

pub use grammex_syntax::{CompileOptions, DuplicatePolicy, LiteralPolicy, MatcherKind, TOP};

/// Result type for resolving a single grammar.
pub type ResolveResult<T> = std::result::Result<T, ResolutionError>;

/// Result type for the whole compile step.
pub type CompileResult<T> = std::result::Result<T, CompileError>;
