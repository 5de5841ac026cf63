pub mod resource;
pub mod ui;

pub use resource::HeroDraft;
