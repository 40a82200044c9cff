//! fm View Frames
//!
//! A [`ViewFrame`] wraps one activated view component behind a uniform
//! interface, whatever mechanism hosts it. Components talk back to their
//! window only through [`ViewSignals`]; the window receives those as
//! [`ViewEvent`]s through the [`ViewEventSink`] it passed at load time.
//!
//! # Hosting mechanisms
//! - [`NativeView`]: an in-process view that understands navigation info
//! - [`ForeignControl`]: a control that can only be told to show a URI;
//!   the frame reports progress on its behalf

pub mod component;
pub mod error;
pub mod frame;
pub mod host;
pub mod signals;

pub use component::{ForeignControl, NativeView, ViewComponent, ViewFrameId, ViewRole};
pub use error::{ActivationError, ControlError, LoadFailure};
pub use frame::ViewFrame;
pub use host::{ComponentFactory, ComponentRegistry, ViewHost};
pub use signals::{ProgressKind, ViewEvent, ViewEventSink, ViewSignals};
