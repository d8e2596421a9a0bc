/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `percolate` binary.
/// Every variant maps to a stable exit code (1 or 2) via
/// [`CliError::exit_code`]:
///
/// - Exit code **2** — input failure: a bad argument, an unreadable
///   input source, or a malformed integer stream. These terminate
///   before any result is produced.
/// - Exit code **1** — logical failure: the tool ran to completion but
///   the result is a well-defined failure (the replayed stream did not
///   percolate).
use std::fmt;
use std::path::PathBuf;

use percolate_core::PercolationError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `percolate` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with
/// each variant. [`CliError::message`] returns the human-readable error
/// string that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// An integer argument failed the positivity requirement.
    InvalidArgument {
        /// The argument's name (e.g. `"side"`, `"trials"`).
        name: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// The site stream could not be interpreted: a non-integer token,
    /// a missing grid side, a dangling row without its column, or an
    /// out-of-range coordinate.
    MalformedInput {
        /// A description of what was wrong with the stream.
        detail: String,
    },

    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the size cap.
    FileTooLarge {
        /// A human-readable label for the source (`"-"` for stdin, or
        /// the filesystem path).
        source: String,
        /// The size limit in bytes.
        limit: u64,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// A generic I/O error while reading the input.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// A replayed site stream ran out of input before the grid
    /// percolated.
    DidNotPercolate {
        /// Open sites when the stream was exhausted.
        open_sites: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2` — input failure (bad argument, unreadable input, etc.).
    /// - `1` — logical failure (the stream did not percolate).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. }
            | Self::MalformedInput { .. }
            | Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::IoError { .. } => 2,

            Self::DidNotPercolate { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to
    /// stderr.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidArgument { name, value } => {
                format!("error: {name} must be positive, got {value}")
            }
            Self::MalformedInput { detail } => {
                format!("error: malformed site stream: {detail}")
            }
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge { source, limit } => {
                format!("error: input too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::DidNotPercolate { open_sites } => {
                format!("error: the system did not percolate ({open_sites} open sites)")
            }
        }
    }

    /// Maps a core error onto the CLI taxonomy.
    ///
    /// Constructor rejections surface as [`CliError::InvalidArgument`];
    /// out-of-range coordinates can only come from the site stream and
    /// surface as [`CliError::MalformedInput`].
    pub fn from_core(e: PercolationError) -> Self {
        match e {
            PercolationError::InvalidArgument { name, value } => {
                Self::InvalidArgument { name, value }
            }
            PercolationError::IndexOutOfRange { .. } => Self::MalformedInput {
                detail: e.to_string(),
            },
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::path::PathBuf;

    use super::*;

    // ── exit_code ────────────────────────────────────────────────────────────

    #[test]
    fn invalid_argument_is_exit_2() {
        let e = CliError::InvalidArgument {
            name: "side",
            value: 0,
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn malformed_input_is_exit_2() {
        let e = CliError::MalformedInput {
            detail: "expected an integer, got 'x'".to_owned(),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn file_not_found_is_exit_2() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("sites.txt"),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn io_error_is_exit_2() {
        let e = CliError::IoError {
            source: "sites.txt".to_owned(),
            detail: "device full".to_owned(),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn did_not_percolate_is_exit_1() {
        let e = CliError::DidNotPercolate { open_sites: 4 };
        assert_eq!(e.exit_code(), 1);
    }

    // ── message content ──────────────────────────────────────────────────────

    #[test]
    fn invalid_argument_message_names_the_argument() {
        let e = CliError::InvalidArgument {
            name: "trials",
            value: 0,
        };
        let msg = e.message();
        assert!(msg.contains("trials"), "message: {msg}");
        assert!(msg.contains("positive"), "message: {msg}");
    }

    #[test]
    fn file_not_found_message_contains_path() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("left-column.txt"),
        };
        let msg = e.message();
        assert!(msg.contains("left-column.txt"), "message: {msg}");
        assert!(msg.contains("not found"), "message: {msg}");
    }

    #[test]
    fn did_not_percolate_message_reports_open_sites() {
        let e = CliError::DidNotPercolate { open_sites: 7 };
        let msg = e.message();
        assert!(msg.contains('7'), "message: {msg}");
        assert!(msg.contains("percolate"), "message: {msg}");
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::DidNotPercolate { open_sites: 1 };
        assert_eq!(format!("{e}"), e.message());
    }

    // ── from_core ────────────────────────────────────────────────────────────

    #[test]
    fn core_invalid_argument_maps_to_invalid_argument() {
        let e = CliError::from_core(PercolationError::InvalidArgument {
            name: "side",
            value: 0,
        });
        assert!(matches!(
            e,
            CliError::InvalidArgument {
                name: "side",
                value: 0,
            }
        ));
    }

    #[test]
    fn core_index_out_of_range_maps_to_malformed_input() {
        let e = CliError::from_core(PercolationError::IndexOutOfRange {
            name: "row",
            value: 9,
            min: 1,
            max: 3,
        });
        assert_eq!(e.exit_code(), 2);
        assert!(matches!(e, CliError::MalformedInput { .. }));
    }
}
