
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod reading;
pub mod printing;
pub mod line_counter;
pub mod read_error;
pub mod error;
