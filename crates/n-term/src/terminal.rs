// SPDX-License-Identifier: MIT
//
// Terminal queries — how big is the screen we are drawing on?
//
// Safety: `ioctl(TIOCGWINSZ)` is the POSIX interface for this and has no
// safe wrapper in std. The unsafe blocks are the zeroed struct and the call.
#![allow(unsafe_code)]
//
// The frame runner asks once per frame, so a resized terminal is picked up
// on the next redraw without any signal handling. When stdout is not a
// terminal (piped, redirected, under test) the query returns `None` and the
// caller falls back to its configured window size.

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

impl Size {
    /// The smaller of each dimension.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self {
            cols: self.cols.min(other.cols),
            rows: self.rows.min(other.rows),
        }
    }

    /// Shrink by a margin on each axis, stopping at zero.
    #[inline]
    #[must_use]
    pub const fn shrink(self, rows: u16, cols: u16) -> Self {
        Self {
            cols: self.cols.saturating_sub(cols),
            rows: self.rows.saturating_sub(rows),
        }
    }
}

// ─── Terminal Query ─────────────────────────────────────────────────────────

/// Query the current terminal size via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn get_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size() -> Option<Size> {
    None
}

// ─── Tests ──────────────────────────────────────────────────────────────────
