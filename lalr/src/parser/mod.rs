
mod types;
mod table;
mod derivation;
mod pda;

pub use types::Action;
pub use table::{ParseTable, ParseTableBuilder, TableError};
pub use derivation::Derivation;
pub use pda::{PDA, Session, Step};
