pub mod entities;
pub mod render;
