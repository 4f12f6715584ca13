pub mod axis;
pub mod config;
pub mod layout;
pub mod render;
pub mod validate;
