//! Game process spawning
//!
//! Two-stage launch policy: try the game binary as-is, and on any error
//! retry once with the unbuffered flag. The launcher never tracks the child
//! after a successful spawn.

use crate::constants::{GAME_BINARY, UNBUFFERED_FLAG};
use crate::types::{LaunchFailure, LaunchOutcome};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{error, info, warn};

/// The fixed game binary name joined to the directory containing the
/// launcher's own executable.
pub fn default_game_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(GAME_BINARY)))
        .unwrap_or_else(|| PathBuf::from(GAME_BINARY))
}

/// Spawn and forget. The shell takes no ownership of the game process: the
/// child handle is dropped immediately, nothing is awaited or reaped.
fn spawn_detached(path: &Path, unbuffered: bool) -> io::Result<u32> {
    let mut cmd = Command::new(path);
    if unbuffered {
        cmd.arg(UNBUFFERED_FLAG);
    }
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const DETACHED_PROCESS: u32 = 0x00000008;
        cmd.creation_flags(DETACHED_PROCESS);
    }
    let child = cmd.spawn()?;
    Ok(child.id())
}

/// Run the two-stage launch policy against the real spawner.
pub fn launch(path: &Path) -> LaunchOutcome {
    launch_with(path, spawn_detached)
}

// The spawner is injected so the retry behavior can be tested without a
// real game binary.
fn launch_with<F>(path: &Path, mut spawn: F) -> LaunchOutcome
where
    F: FnMut(&Path, bool) -> io::Result<u32>,
{
    let primary = match spawn(path, false) {
        Ok(pid) => {
            info!(pid, path = %path.display(), "Game launched");
            return LaunchOutcome::Launched {
                pid,
                fallback_used: false,
            };
        }
        Err(e) => e,
    };

    warn!(
        error = %primary,
        path = %path.display(),
        "Primary launch attempt failed, retrying with unbuffered flag"
    );

    match spawn(path, true) {
        Ok(pid) => {
            info!(pid, path = %path.display(), "Game launched on fallback attempt");
            LaunchOutcome::Launched {
                pid,
                fallback_used: true,
            }
        }
        Err(fallback) => {
            error!(
                primary = %primary,
                fallback = %fallback,
                path = %path.display(),
                "Both launch attempts failed"
            );
            LaunchOutcome::Failed(LaunchFailure { primary, fallback })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn default_path_sits_next_to_launcher() {
        let path = default_game_path();
        assert_eq!(path.file_name().unwrap(), GAME_BINARY);
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(path.parent().unwrap(), exe_dir);
    }

    #[test]
    fn primary_success_skips_fallback() {
        let calls = RefCell::new(Vec::new());
        let outcome = launch_with(Path::new("pong"), |_, unbuffered| {
            calls.borrow_mut().push(unbuffered);
            Ok(41)
        });
        assert_eq!(*calls.borrow(), vec![false]);
        match outcome {
            LaunchOutcome::Launched { pid, fallback_used } => {
                assert_eq!(pid, 41);
                assert!(!fallback_used);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn fallback_retries_same_path_with_unbuffered_flag() {
        let calls = RefCell::new(Vec::new());
        let outcome = launch_with(Path::new("pong"), |path, unbuffered| {
            calls.borrow_mut().push((path.to_path_buf(), unbuffered));
            if unbuffered {
                Ok(42)
            } else {
                Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
            }
        });
        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], (PathBuf::from("pong"), false));
        assert_eq!(calls[1], (PathBuf::from("pong"), true));
        match outcome {
            LaunchOutcome::Launched { pid, fallback_used } => {
                assert_eq!(pid, 42);
                assert!(fallback_used);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn double_failure_reports_both_errors() {
        let outcome = launch_with(Path::new("pong"), |_, unbuffered| {
            if unbuffered {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            } else {
                Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
            }
        });
        match outcome {
            LaunchOutcome::Failed(failure) => {
                assert_eq!(failure.primary.kind(), io::ErrorKind::NotFound);
                assert_eq!(failure.fallback.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn nonexistent_game_fails_both_attempts_without_hanging() {
        let path = std::env::temp_dir().join("deadman-pong-does-not-exist");
        match launch(&path) {
            LaunchOutcome::Failed(failure) => {
                assert_eq!(failure.primary.kind(), io::ErrorKind::NotFound);
                assert_eq!(failure.fallback.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn repeated_launches_spawn_independent_processes() {
        let mut next_pid = 100;
        let spawn = |_: &Path, _: bool| {
            next_pid += 1;
            Ok(next_pid)
        };
        let first = launch_with(Path::new("pong"), spawn);
        let mut next_pid = 200;
        let spawn = |_: &Path, _: bool| {
            next_pid += 1;
            Ok(next_pid)
        };
        let second = launch_with(Path::new("pong"), spawn);
        let pid = |o: &LaunchOutcome| match o {
            LaunchOutcome::Launched { pid, .. } => *pid,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_ne!(pid(&first), pid(&second));
    }

    /// End-to-end: a stub game that writes a marker file is observed to run.
    #[cfg(unix)]
    #[test]
    fn launch_executes_stub_game() {
        use std::os::unix::fs::PermissionsExt;
        use std::time::{Duration, Instant};

        let dir = std::env::temp_dir().join(format!("pong-launcher-e2e-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let marker = dir.join("marker");
        let stub = dir.join("deadman-pong");
        std::fs::write(
            &stub,
            format!("#!/bin/sh\ntouch '{}'\n", marker.display()),
        )
        .unwrap();
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

        match launch(&stub) {
            LaunchOutcome::Launched { fallback_used, .. } => assert!(!fallback_used),
            other => panic!("unexpected outcome: {:?}", other),
        }

        let deadline = Instant::now() + Duration::from_secs(5);
        while !marker.exists() {
            assert!(Instant::now() < deadline, "stub game never ran");
            std::thread::sleep(Duration::from_millis(20));
        }
        std::fs::remove_dir_all(&dir).ok();
    }
}
