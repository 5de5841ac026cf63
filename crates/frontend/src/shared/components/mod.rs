pub mod confirm_dialog;
pub mod image_input;
pub mod page_header;
pub mod pagination_controls;
