pub mod a001_category;
pub mod a002_model;
pub mod a003_hero;
pub mod a004_product;
