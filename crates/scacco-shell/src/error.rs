//! Shell errors.

use scacco_core::FenError;

/// Errors that can occur while reading or executing shell commands.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The first word of the line is not a known command.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The unrecognized word.
        command: String,
    },

    /// A command is missing a required argument.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// What was expected.
        argument: &'static str,
    },

    /// A pixel coordinate is not a non-negative integer.
    #[error("invalid pixel coordinate: {value}")]
    InvalidCoordinate {
        /// The text that failed to parse.
        value: String,
    },

    /// A square name is not algebraic notation.
    #[error("invalid square: {value}")]
    InvalidSquare {
        /// The text that failed to parse.
        value: String,
    },

    /// A move is not coordinate notation.
    #[error("invalid move: {value}")]
    InvalidMove {
        /// The text that failed to parse.
        value: String,
    },

    /// The side-to-move field is not "w" or "b".
    #[error("invalid side to move: {value}")]
    InvalidColor {
        /// The text that failed to parse.
        value: String,
    },

    /// The placement string of a `position` command is malformed.
    #[error("invalid position: {source}")]
    InvalidPosition {
        /// The underlying placement error.
        #[from]
        source: FenError,
    },

    /// The configured window cannot hold eight columns.
    #[error("window {width}x{height} is too small for an 8x8 board")]
    WindowTooSmall {
        /// Configured width in pixels.
        width: u32,
        /// Configured height in pixels.
        height: u32,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
