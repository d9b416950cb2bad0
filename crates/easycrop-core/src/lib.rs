pub mod codec;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod image_list;
pub mod mapping;
pub mod selection;
pub mod session;

pub use image;
