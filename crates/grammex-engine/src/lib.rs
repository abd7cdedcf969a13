//! Matching input text against compiled grammars.
//!
//! ```ignore
//! let grammars = grammex_engine::compile_source(source, &config.compile)?;
//! let mut engine = Engine::new(&grammars["greeting"]).with_options(config.matching);
//! if let Some((consumed, result)) = engine.match_grammar("hello world")? {
//!     println!("{consumed}: {result}");
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod observer;
pub mod options;
pub mod result;

pub use config::Config;
pub use engine::{match_grammar, match_matcher, Engine, Match};
pub use error::{ConfigError, MatchError};
pub use observer::{LogObserver, MatchObserver, NoopObserver};
pub use options::{MatchOptions, DEFAULT_MAX_DEPTH};
pub use result::{ChildMatch, MatchResult};

pub use grammex_resolve::{
    compile, compile_observed, compile_source, CompileError, CompileOptions, Grammar, Grammars,
    Matcher, MatcherId,
};

/// Result type for match calls.
pub type EngineResult<T> = std::result::Result<T, MatchError>;
