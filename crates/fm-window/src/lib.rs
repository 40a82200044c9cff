//! fm Window
//!
//! The navigation state machine of one file-manager window: it resolves a
//! requested location, activates the views the resolution names, commits
//! them once the content view shows progress and rolls everything back when
//! something fails.
//!
//! Events reach the window through its mailbox and are applied by
//! [`Window::dispatch`], which settles the state to a fixed point.

pub mod error;
pub mod frontend;
pub mod lists;
pub mod mailbox;
pub mod state;
pub mod window;

pub use error::WindowError;
pub use frontend::{NullFrontend, WindowFrontend};
pub use lists::BackForwardLists;
pub use mailbox::WindowMessage;
pub use state::{Phase, StateChange};
pub use window::{Window, WindowContext};
