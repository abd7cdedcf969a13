pub mod parser;
pub mod state;

pub use parser::*;
pub use state::*;
