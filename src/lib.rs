pub use crate::errors::SplitError;

pub mod cli;
pub mod errors;
pub mod grouper;
pub mod groups;
pub mod registry;
pub mod scanner;
pub mod writer;
