//! Wire contracts shared between the admin console and the storefront API.

pub mod domain;
pub mod shared;
