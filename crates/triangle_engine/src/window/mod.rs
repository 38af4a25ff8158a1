//! Window abstraction and event loop
//!
//! The bootstrap only needs three things from a window: the instance
//! extensions it requires, event polling, and the close flag. Those live on
//! the `WindowBackend` trait so the application can be driven by GLFW in
//! production and by an in-memory window in tests.

pub mod backend;
pub mod event_loop;

pub use backend::WindowBackend;
pub use event_loop::{run_event_loop, LoopState};
