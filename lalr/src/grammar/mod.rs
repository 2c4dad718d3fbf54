
mod types;
mod builder;
mod api;

pub use types::*;
pub use builder::{GrammarBuilder, GrammarError};
pub use api::Grammar;
