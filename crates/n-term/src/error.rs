// SPDX-License-Identifier: MIT
//
// Errors surfaced by the frame runner.
//
// The layout algebra itself cannot fail, so everything here is about the
// glue around it: settings that make no sense, the worker thread, and the
// terminal writes.

use std::io;

use thiserror::Error;

/// Why a run could not start or did not finish cleanly.
#[derive(Debug, Error)]
pub enum RunError {
    /// The settings violate a precondition (e.g. a target of 0 FPS).
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The frame worker thread could not be started.
    #[error("failed to spawn frame thread: {0}")]
    Spawn(#[source] io::Error),

    /// Writing a frame to the terminal failed.
    #[error("terminal write failed: {0}")]
    Io(#[from] io::Error),

    /// The frame worker panicked, most likely inside the layout callback.
    #[error("frame thread panicked")]
    Panicked,
}
