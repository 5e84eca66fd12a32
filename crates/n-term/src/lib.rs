// SPDX-License-Identifier: MIT
//
// n-term — the redraw loop for n-tui.
//
// n-block builds a frame; this crate decides when and where it is drawn.
// A run owns one worker thread that, once per frame, asks the layout for
// a fresh block, fits it into the main window sized from the real
// terminal, flattens it, and writes it over the previous frame. Frame
// pacing adapts the delay between redraws toward a target FPS.
//
//   Layout ──render──▶ Block ──main_window──▶ Block ──flatten──▶ ansi::write_frame
//                                   ▲
//             Settings + terminal::get_size
//
// No raw mode, no alternate screen, no input: the screen is cleared and
// redrawn in full every frame.

pub mod ansi;
pub mod error;
pub mod layout;
pub mod runner;
pub mod scheduler;
pub mod settings;
pub mod terminal;

pub use error::RunError;
pub use layout::Layout;
pub use runner::{RunHandle, run, run_with};
pub use scheduler::{FrameScheduler, FrameStats};
pub use settings::Settings;
pub use terminal::Size;
