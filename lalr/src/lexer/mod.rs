
mod munch;

pub use munch::lexicate;
