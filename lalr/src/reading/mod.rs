
/*
 * Loaders for the text descriptions of a grammar and
 * of its parse table.
 */

mod sections;
mod grammar;
mod table;

pub use grammar::read_grammar;
pub use table::read_table;
