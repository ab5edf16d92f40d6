pub mod handler;

pub use handler::{CommandQueue, InputHandler, KeyAction};
