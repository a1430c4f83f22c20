pub mod election;
pub mod models;
pub mod validation;

pub use election::{standings, CastError, ElectionData};
pub use models::*;
pub use validation::*;

#[cfg(test)]
mod tests;
