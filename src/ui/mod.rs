pub mod board;
pub mod components;

pub use board::render;
