//! Common types and data structures

use std::fmt;
use std::io;

/// Result of the two-stage game launch policy.
#[derive(Debug)]
pub enum LaunchOutcome {
    /// A game process was started. `fallback_used` is set when the primary
    /// attempt failed and the unbuffered retry succeeded.
    Launched { pid: u32, fallback_used: bool },
    /// Both attempts failed; nothing was started.
    Failed(LaunchFailure),
}

/// Errors from both spawn attempts, kept separately so logs can show which
/// stage failed with what.
#[derive(Debug)]
pub struct LaunchFailure {
    pub primary: io::Error,
    pub fallback: io::Error,
}

impl fmt::Display for LaunchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.primary.kind() == self.fallback.kind() {
            write!(f, "Could not start the game: {}", self.fallback)
        } else {
            write!(
                f,
                "Could not start the game: {} (retry: {})",
                self.primary, self.fallback
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_display_collapses_identical_kinds() {
        let failure = LaunchFailure {
            primary: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            fallback: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let text = failure.to_string();
        assert!(text.starts_with("Could not start the game:"));
        assert!(!text.contains("retry"));
    }

    #[test]
    fn failure_display_shows_both_stages_when_different() {
        let failure = LaunchFailure {
            primary: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            fallback: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = failure.to_string();
        assert!(text.contains("no such file"));
        assert!(text.contains("retry: denied"));
    }
}
