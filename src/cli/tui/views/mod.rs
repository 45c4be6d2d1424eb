//! Screen renderers

pub mod landing;
pub mod list;
