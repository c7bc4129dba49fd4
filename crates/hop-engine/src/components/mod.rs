pub mod animation;
pub mod entity;
pub mod kind;
pub mod motion;
