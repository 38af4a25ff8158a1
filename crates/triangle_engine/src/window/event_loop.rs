//! Main loop
//!
//! No per-frame work happens here. The loop polls the window system until
//! the close flag is raised, then hands control back for teardown.

use crate::window::WindowBackend;

/// Event loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Polling events
    Running,
    /// Close was requested. Terminal.
    Closed,
}

impl LoopState {
    /// Next state after observing the window's close flag
    pub fn advance(self, close_requested: bool) -> Self {
        match self {
            Self::Running if close_requested => Self::Closed,
            state => state,
        }
    }
}

/// Poll `window` until it reports a close request
///
/// Returns the number of polls performed.
pub fn run_event_loop<W: WindowBackend + ?Sized>(window: &mut W) -> u64 {
    let mut state = LoopState::Running;
    let mut polls = 0u64;

    log::info!("Entering event loop");
    loop {
        state = state.advance(window.should_close());
        if state == LoopState::Closed {
            break;
        }
        window.poll_events();
        polls += 1;
    }
    log::info!("Window closed after {} event polls", polls);

    polls
}
