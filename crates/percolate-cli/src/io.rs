/// File and stdin reading with size enforcement and UTF-8 validation.
///
/// This module is the single entry point for all input I/O in the
/// `percolate` binary. `percolate-core` never touches the filesystem;
/// all reading happens here.
///
/// Key behaviours:
/// - Disk files: size checked via `std::fs::metadata` before any read.
/// - Stdin: buffered with a `Read::take` cap so allocation is bounded.
/// - UTF-8 validation via `String::from_utf8` with byte-offset reporting.
/// - All I/O errors are converted to [`CliError`] variants with exit code 2.
use std::io::Read as _;
use std::path::Path;

use crate::cli::PathOrStdin;
use crate::error::CliError;

/// Cap on the site-stream input size. Even a 1000×1000 replay is a few
/// megabytes of text; anything past this is a mistake, not a workload.
pub const MAX_INPUT_SIZE: u64 = 64 * 1024 * 1024;

/// Reads the entire contents of `source` into a `String`.
///
/// For disk files the file length is checked against
/// [`MAX_INPUT_SIZE`] via `std::fs::metadata` before any bytes are
/// read. For stdin a capped reader (`Read::take`) is used so that the
/// allocation is bounded.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for:
/// - file not found
/// - permission denied
/// - input exceeding the size cap
/// - any other I/O error
/// - invalid UTF-8 (includes byte offset of the first bad sequence)
pub fn read_input(source: &PathOrStdin) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path),
        PathOrStdin::Stdin => read_stdin(),
    }
}

/// Reads a disk file, enforcing the size limit and UTF-8 requirement.
fn read_file(path: &Path) -> Result<String, CliError> {
    // Size check via metadata, so nothing is allocated for an oversized
    // file.
    let file_size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => return Err(io_error_to_cli(&e, path)),
    };

    if file_size > MAX_INPUT_SIZE {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: MAX_INPUT_SIZE,
        });
    }

    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => return Err(io_error_to_cli(&e, path)),
    };

    into_utf8(bytes, &path.display().to_string())
}

/// Reads stdin through a capped reader.
fn read_stdin() -> Result<String, CliError> {
    let mut bytes = Vec::new();
    let read = std::io::stdin()
        .lock()
        .take(MAX_INPUT_SIZE + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| CliError::IoError {
            source: "-".to_owned(),
            detail: e.to_string(),
        })?;

    if read as u64 > MAX_INPUT_SIZE {
        return Err(CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: MAX_INPUT_SIZE,
        });
    }

    into_utf8(bytes, "-")
}

/// Validates `bytes` as UTF-8, reporting the first bad offset.
fn into_utf8(bytes: Vec<u8>, source: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

/// Maps a filesystem error to the matching [`CliError`] variant.
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    match e.kind() {
        std::io::ErrorKind::NotFound => CliError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied {
            path: path.to_path_buf(),
        },
        // All other I/O error kinds are wrapped in the generic IoError
        // variant. A few common ones are listed explicitly to satisfy
        // the exhaustiveness lint while still routing everything
        // unknown to IoError.
        std::io::ErrorKind::InvalidInput
        | std::io::ErrorKind::InvalidData
        | std::io::ErrorKind::TimedOut
        | std::io::ErrorKind::BrokenPipe
        | std::io::ErrorKind::IsADirectory
        | std::io::ErrorKind::UnexpectedEof
        | std::io::ErrorKind::Interrupted
        | std::io::ErrorKind::OutOfMemory
        | std::io::ErrorKind::Other
        | _ => CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        },
    }
}
