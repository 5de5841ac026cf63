pub mod aggregate;

pub use aggregate::{CategoryRef, ModelRef, Product};
