pub mod catalog;
pub mod components;
pub mod icons;
pub mod page_frame;
pub mod resource;
pub mod toast;
