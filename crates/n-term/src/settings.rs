// SPDX-License-Identifier: MIT
//
// Settings — how often to redraw and how big the main window may get.
//
// A plain value, built once before the run starts and read by the worker
// for the lifetime of the run. Nothing mutates it while frames are drawn.

use n_block::CornerStyle;

use crate::error::RunError;
use crate::terminal::Size;

/// Rows kept free around the main window (box border plus a line of slack
/// above and below for the shell prompt).
pub const ROW_MARGIN: u16 = 4;

/// Columns kept free around the main window (the box border).
pub const COL_MARGIN: u16 = 2;

/// Runner configuration.
///
/// # Examples
///
/// ```
/// use n_term::settings::Settings;
/// use n_term::terminal::Size;
///
/// let settings = Settings::default()
///     .with_target_fps(2)
///     .with_window_size(Size { cols: 70, rows: 50 });
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// How many frames per second the runner aims for. Must be at least 1.
    pub target_fps: u32,
    /// Upper bound for the main window; the terminal may be smaller.
    pub window_size: Size,
    /// Center the content in a boxed window sized to the screen. When
    /// `false`, the layout's block is printed as-is.
    pub draw_main_window: bool,
    /// Corner glyphs of the main window box.
    pub corners: CornerStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: 30,
            window_size: Size { cols: 200, rows: 70 },
            draw_main_window: true,
            corners: CornerStyle::Round,
        }
    }
}

impl Settings {
    #[must_use]
    pub const fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    #[must_use]
    pub const fn with_window_size(mut self, size: Size) -> Self {
        self.window_size = size;
        self
    }

    #[must_use]
    pub const fn with_main_window(mut self, draw: bool) -> Self {
        self.draw_main_window = draw;
        self
    }

    #[must_use]
    pub const fn with_corners(mut self, corners: CornerStyle) -> Self {
        self.corners = corners;
        self
    }

    /// Check the preconditions the runner relies on.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::InvalidSettings`] if `target_fps` is 0.
    pub fn validate(&self) -> Result<(), RunError> {
        if self.target_fps == 0 {
            return Err(RunError::InvalidSettings(String::from(
                "target_fps must be at least 1",
            )));
        }
        Ok(())
    }

    /// The content area of the main window.
    ///
    /// Each axis is the smaller of the configured window and the terminal
    /// (the configured window alone if the terminal could not be measured),
    /// minus [`ROW_MARGIN`] / [`COL_MARGIN`].
    #[must_use]
    pub fn effective_size(&self, terminal: Option<Size>) -> Size {
        terminal
            .map_or(self.window_size, |term| self.window_size.min(term))
            .shrink(ROW_MARGIN, COL_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.target_fps, 30);
        assert_eq!(s.window_size, Size { cols: 200, rows: 70 });
        assert!(s.draw_main_window);
        assert_eq!(s.corners, CornerStyle::Round);
    }

    #[test]
    fn builders_set_fields() {
        let s = Settings::default()
            .with_target_fps(5)
            .with_window_size(Size { cols: 10, rows: 5 })
            .with_main_window(false)
            .with_corners(CornerStyle::Sharp);
        assert_eq!(s.target_fps, 5);
        assert_eq!(s.window_size, Size { cols: 10, rows: 5 });
        assert!(!s.draw_main_window);
        assert_eq!(s.corners, CornerStyle::Sharp);
    }

    #[test]
    fn zero_fps_is_rejected() {
        let err = Settings::default().with_target_fps(0).validate().unwrap_err();
        assert!(matches!(err, RunError::InvalidSettings(_)));
    }

    #[test]
    fn effective_size_without_terminal_uses_window() {
        let s = Settings::default().with_window_size(Size { cols: 70, rows: 50 });
        assert_eq!(s.effective_size(None), Size { cols: 68, rows: 46 });
    }

    #[test]
    fn effective_size_clamps_to_terminal() {
        let s = Settings::default();
        let term = Size { cols: 80, rows: 24 };
        assert_eq!(s.effective_size(Some(term)), Size { cols: 78, rows: 20 });
    }

    #[test]
    fn effective_size_mixes_axes() {
        let s = Settings::default().with_window_size(Size { cols: 40, rows: 100 });
        let term = Size { cols: 80, rows: 24 };
        assert_eq!(s.effective_size(Some(term)), Size { cols: 38, rows: 20 });
    }

    #[test]
    fn effective_size_never_underflows() {
        let s = Settings::default().with_window_size(Size { cols: 1, rows: 1 });
        assert_eq!(s.effective_size(None), Size { cols: 0, rows: 0 });
    }
}
