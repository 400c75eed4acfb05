pub mod block;
pub mod item;
pub mod validate;
