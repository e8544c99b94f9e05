//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const WINDOW_TITLE: &str = "Deadman Pong Launcher";
pub const GAME_TITLE: &str = "DeadmanXXXII's Classic Pong";

/// File name of the game binary, expected next to the launcher executable.
#[cfg(windows)]
pub const GAME_BINARY: &str = "deadman-pong.exe";
#[cfg(not(windows))]
pub const GAME_BINARY: &str = "deadman-pong";

/// Flag appended on the fallback launch attempt so the game flushes its
/// output line-by-line even when stdio is not a terminal.
pub const UNBUFFERED_FLAG: &str = "--unbuffered";
