#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod alternatives;
mod catalog;
mod error;
mod exercise;
mod index;
mod metadata;
mod name;
mod record;
mod search;
mod service;
mod settings;
mod text;
mod validation;

pub use alternatives::*;
pub use catalog::*;
pub use error::*;
pub use exercise::*;
pub use index::*;
pub use metadata::*;
pub use name::*;
pub use record::*;
pub use search::*;
pub use service::*;
pub use settings::*;
pub use validation::*;

#[cfg(test)]
mod tests;
