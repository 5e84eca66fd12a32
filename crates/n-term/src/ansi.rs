// SPDX-License-Identifier: MIT
//
// ANSI escape sequences used by the frame runner.
//
// Pure functions that write escape sequences to any `impl Write`. A frame
// is drawn the blunt way: clear the screen, home the cursor, print the
// flattened block. Synchronized output wraps each frame so terminals that
// support it swap the whole frame in at once instead of showing the clear.
//
// All functions return `io::Result` propagated from the underlying writer.
use std::io::{self, Write};

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Move the cursor to the top-left corner (CUP with no parameters).
#[inline]
pub fn cursor_home(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[H")
}

/// Hide the cursor (DECTCEM reset).
#[inline]
pub fn cursor_hide(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show the cursor (DECTCEM set).
#[inline]
pub fn cursor_show(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

// ─── Screen ──────────────────────────────────────────────────────────────────

/// Clear the entire screen (ED 2). The cursor does not move.
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2J")
}

// ─── Synchronized Output ─────────────────────────────────────────────────────

/// Begin synchronized output (DEC Private Mode 2026).
///
/// Tells the terminal to buffer all subsequent output until [`end_sync`].
/// Terminals without support ignore it.
#[inline]
pub fn begin_sync(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?2026h")
}

/// End synchronized output — terminal renders the buffered frame.
#[inline]
pub fn end_sync(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?2026l")
}

// ─── Frames ──────────────────────────────────────────────────────────────────

/// Write one complete frame: clear, home, text, inside a sync bracket.
///
/// The text is written as-is; lines are separated by the `\n` that
/// [`Block::flatten`](n_block::Block::flatten) put there.
pub fn write_frame(w: &mut impl Write, text: &str) -> io::Result<()> {
    begin_sync(w)?;
    clear_screen(w)?;
    cursor_home(w)?;
    w.write_all(text.as_bytes())?;
    end_sync(w)?;
    w.flush()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: run an ANSI function and return its output as a string.
    fn emit<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Cursor ──────────────────────────────────────────────────────────

    #[test]
    fn cursor_home_sequence() {
        assert_eq!(emit(|w| cursor_home(w)), "\x1b[H");
    }

    #[test]
    fn cursor_visibility_sequences() {
        assert_eq!(emit(|w| cursor_hide(w)), "\x1b[?25l");
        assert_eq!(emit(|w| cursor_show(w)), "\x1b[?25h");
    }

    // ── Screen ──────────────────────────────────────────────────────────

    #[test]
    fn clear_screen_sequence() {
        assert_eq!(emit(|w| clear_screen(w)), "\x1b[2J");
    }

    #[test]
    fn sync_sequences() {
        assert_eq!(emit(|w| begin_sync(w)), "\x1b[?2026h");
        assert_eq!(emit(|w| end_sync(w)), "\x1b[?2026l");
    }

    // ── Frames ──────────────────────────────────────────────────────────

    #[test]
    fn frame_is_cleared_homed_and_synced() {
        assert_eq!(
            emit(|w| write_frame(w, "ab\ncd")),
            "\x1b[?2026h\x1b[2J\x1b[Hab\ncd\x1b[?2026l"
        );
    }

    #[test]
    fn empty_frame_still_clears() {
        let out = emit(|w| write_frame(w, ""));
        assert!(out.contains("\x1b[2J"));
        assert!(out.ends_with("\x1b[?2026l"));
    }
}
