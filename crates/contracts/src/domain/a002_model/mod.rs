pub mod aggregate;

pub use aggregate::Model;
