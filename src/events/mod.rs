pub mod listener;
pub mod pointer;
pub mod viewport;

pub use listener::EventListener;
pub use pointer::wire_pointer_handlers;
pub use viewport::{wire_resize, SharedViewport, Viewport};
