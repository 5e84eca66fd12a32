// SPDX-License-Identifier: MIT
//
// Frame runner — the redraw loop.
//
// One worker thread owns everything a run needs: the layout, the settings,
// the output sink, and the frame scheduler. Each iteration:
//
//   1. tick the scheduler (adapts the delay toward the target FPS)
//   2. build this frame's block from the layout
//   3. fit it into the main window (align → fit → box) if configured
//   4. flatten and write it: clear, home, text, in one sync bracket
//   5. wait `delay`, or stop early if asked to
//
// A frame always runs to completion; a stop request is only seen while
// waiting. The wait is a `recv_timeout` on a control channel, so stopping
// never has to sit out the rest of a long delay.
//
// Dropping the `RunHandle` closes the channel, which the worker reads as a
// stop request. The cursor is hidden while the run is active and shown
// again when the worker exits, even if a write failed mid-run.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};

use n_block::Block;

use crate::ansi;
use crate::error::RunError;
use crate::layout::Layout;
use crate::scheduler::{FrameScheduler, FrameStats};
use crate::settings::Settings;
use crate::terminal::{self, Size};

// ─── Frame Composition ───────────────────────────────────────────────────────

/// Fit `content` into the main window for a terminal of the given size.
///
/// The content is centered in the effective window, cropped or filled to
/// exactly that size, then boxed.
#[must_use]
pub fn main_window(content: Block, settings: &Settings, terminal: Option<Size>) -> Block {
    let size = settings.effective_size(terminal);
    let (height, width) = (usize::from(size.rows), usize::from(size.cols));

    content
        .align(Some(height), Some(width))
        .fit(Some(width), Some(height), true)
        .boxed(settings.corners)
}

/// Render one frame of `layout` to printable text.
pub fn render_frame(
    layout: &mut Layout,
    settings: &Settings,
    stats: &FrameStats,
    terminal: Option<Size>,
) -> String {
    let content = layout.render(stats);
    if settings.draw_main_window {
        main_window(content, settings, terminal).flatten()
    } else {
        content.flatten()
    }
}

// ─── Run ─────────────────────────────────────────────────────────────────────

/// Start redrawing `layout` to stdout.
///
/// # Errors
///
/// Returns an error if the settings are invalid or the worker thread
/// cannot be spawned.
pub fn run(layout: Layout, settings: Settings) -> Result<RunHandle, RunError> {
    run_with(layout, settings, io::stdout())
}

/// Start redrawing `layout` to any writer.
///
/// # Errors
///
/// Returns an error if the settings are invalid or the worker thread
/// cannot be spawned.
pub fn run_with<W>(mut layout: Layout, settings: Settings, mut out: W) -> Result<RunHandle, RunError>
where
    W: Write + Send + 'static,
{
    settings.validate()?;

    let (stop_tx, stop_rx) = mpsc::channel();
    let thread = thread::Builder::new()
        .name(String::from("n-tui-frames"))
        .spawn(move || frame_loop(&mut layout, &settings, &mut out, &stop_rx))
        .map_err(RunError::Spawn)?;

    Ok(RunHandle {
        stop: Some(stop_tx),
        thread: Some(thread),
    })
}

/// The worker body: hide the cursor, draw until stopped, show the cursor.
fn frame_loop(
    layout: &mut Layout,
    settings: &Settings,
    out: &mut impl Write,
    stop: &Receiver<()>,
) -> Result<(), RunError> {
    tracing::info!(target_fps = settings.target_fps, main_window = settings.draw_main_window, "frame loop started");

    ansi::cursor_hide(out)?;
    let result = draw_frames(layout, settings, out, stop);

    // Always restore the cursor, even if a frame write failed.
    let restored = ansi::cursor_show(out).and_then(|()| out.flush());
    tracing::info!(ok = result.is_ok(), "frame loop stopped");

    result?;
    restored?;
    Ok(())
}

/// Draw frames until a stop request arrives or a write fails.
fn draw_frames(
    layout: &mut Layout,
    settings: &Settings,
    out: &mut impl Write,
    stop: &Receiver<()>,
) -> Result<(), RunError> {
    let mut scheduler = FrameScheduler::new(settings.target_fps);
    let mut warned_no_size = false;

    loop {
        scheduler.tick();

        let size = terminal::get_size();
        if size.is_none() && settings.draw_main_window && !warned_no_size {
            tracing::warn!("terminal size unavailable, using configured window size");
            warned_no_size = true;
        }

        let frame = render_frame(layout, settings, &scheduler.stats(), size);
        ansi::write_frame(out, &frame)?;

        match stop.recv_timeout(scheduler.delay()) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

// ─── RunHandle ───────────────────────────────────────────────────────────────

/// A running frame loop.
///
/// # Example
///
/// ```no_run
/// use n_block::{Block, HAlign};
/// use n_term::layout::Layout;
/// use n_term::runner;
/// use n_term::settings::Settings;
///
/// let layout = Layout::new(|| Block::column(["Hello"], HAlign::Center));
/// let handle = runner::run(layout, Settings::default())?;
/// // ... do other work ...
/// handle.stop()?;
/// # Ok::<(), n_term::error::RunError>(())
/// ```
#[derive(Debug)]
pub struct RunHandle {
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<Result<(), RunError>>>,
}

impl RunHandle {
    /// Ask the loop to stop after the current frame and wait for it.
    ///
    /// # Errors
    ///
    /// Returns the error that ended the loop early, if any.
    pub fn stop(mut self) -> Result<(), RunError> {
        if let Some(tx) = self.stop.take() {
            // A send error means the worker already exited; join reports why.
            let _ = tx.send(());
        }
        self.wait()
    }

    /// Wait for the loop to end on its own (it only does so on error).
    ///
    /// # Errors
    ///
    /// Returns the error that ended the loop.
    pub fn join(mut self) -> Result<(), RunError> {
        self.wait()
    }

    /// Whether the worker thread has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(JoinHandle::is_finished)
    }

    fn wait(&mut self) -> Result<(), RunError> {
        match self.thread.take() {
            Some(thread) => thread.join().map_err(|_| RunError::Panicked)?,
            None => Ok(()),
        }
    }
}

impl Drop for RunHandle {
    fn drop(&mut self) {
        // Closing the channel stops the worker at its next wait.
        drop(self.stop.take());
        let _ = self.wait();
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
