//! fm Shell
//!
//! Runs windows of the fm file manager outside a desktop session: one
//! executor, the process-wide history and metadata, a filesystem file-info
//! service and a set of plain-text demo views.

pub mod app;
pub mod args;
pub mod components;
pub mod config;
pub mod frontend;
pub mod fs;

pub use app::{Application, MainLoop, ShellError, WindowId};
pub use args::{Args, ArgsError};
pub use components::demo_registry;
pub use config::ShellConfig;
pub use frontend::LogFrontend;
pub use fs::FsFileInfo;
