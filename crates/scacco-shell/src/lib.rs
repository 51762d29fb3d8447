//! Terminal presentation shell for the scacco rules engine.

pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod render;
pub mod session;
pub mod shell;

pub use command::{Command, Pointer, parse_command};
pub use config::{Glyphs, ShellConfig};
pub use error::ShellError;
pub use geometry::BoardGeometry;
pub use render::{BoardView, render, render_board};
pub use session::{ClickOutcome, Selection, Session};
pub use shell::Shell;
