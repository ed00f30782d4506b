//! Fatal error taxonomy for a dedupe run.
//!
//! Unparseable or filtered-out URLs never show up here: those are per-line
//! exclusions decided by the normalizer. Everything in [`DedupeError`]
//! terminates the run.

use std::io;
use std::path::PathBuf;

/// Errors that end a run. Output already written before the error stays written.
#[derive(Debug, thiserror::Error)]
pub enum DedupeError {
    /// The named input file could not be opened.
    #[error("failed to open input {}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from the input stream failed mid-run.
    #[error("failed to read input")]
    Read(#[source] io::Error),

    /// The named output file could not be created.
    #[error("failed to open output {}", .path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the output stream failed.
    #[error("failed to write output")]
    Write(#[source] io::Error),

    /// The config file exists but could not be read.
    #[error("failed to read config {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML for [`crate::config::DedupeConfig`].
    #[error("malformed config {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// XDG base directories could not be resolved (e.g. no `$HOME`).
    #[error("cannot locate config directory")]
    ConfigPath(#[from] xdg::BaseDirectoriesError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn open_input_message_names_path() {
        let err = DedupeError::OpenInput {
            path: PathBuf::from("/nope/urls.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to open input /nope/urls.txt");
        assert_eq!(err.source().unwrap().to_string(), "no such file");
    }

    #[test]
    fn read_error_keeps_source() {
        let err = DedupeError::Read(io::Error::new(io::ErrorKind::Other, "disk gone"));
        assert_eq!(err.to_string(), "failed to read input");
        assert_eq!(err.source().unwrap().to_string(), "disk gone");
    }
}
