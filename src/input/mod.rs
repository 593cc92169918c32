pub mod adapter;
pub mod handler;

pub use adapter::{ActionAdapter, InputAdapter, KeyboardAdapter};
pub use handler::{InputHandler, KeyAction};
