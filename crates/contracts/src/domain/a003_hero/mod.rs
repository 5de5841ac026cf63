pub mod aggregate;

pub use aggregate::Hero;
