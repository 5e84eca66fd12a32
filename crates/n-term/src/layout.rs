// SPDX-License-Identifier: MIT
//
// Layout — the content-producing callback the runner calls every frame.
//
// Blocks are rebuilt from scratch each frame; the layout holds no blocks,
// only the closure that makes them. The closure may read the frame stats
// (average FPS, current delay) instead of reaching for global state.

use std::fmt;

use n_block::{Block, HAlign};

use crate::scheduler::FrameStats;

type Render = Box<dyn FnMut(&FrameStats) -> Block + Send>;

/// The main window's content.
///
/// # Examples
///
/// ```
/// use n_block::{Block, HAlign};
/// use n_term::layout::Layout;
/// use n_term::scheduler::FrameStats;
///
/// let mut layout = Layout::new(|| Block::column(["foo", "bar"], HAlign::Center));
/// assert_eq!(layout.render(&FrameStats::default()).height(), 2);
/// ```
pub struct Layout {
    root: Render,
}

impl Layout {
    /// A layout from a `() -> Block` callback.
    pub fn new<F>(mut root: F) -> Self
    where
        F: FnMut() -> Block + Send + 'static,
    {
        Self {
            root: Box::new(move |_| root()),
        }
    }

    /// A layout whose callback receives the current [`FrameStats`].
    pub fn with_stats<F>(root: F) -> Self
    where
        F: FnMut(&FrameStats) -> Block + Send + 'static,
    {
        Self { root: Box::new(root) }
    }

    /// Produce this frame's block.
    pub fn render(&mut self, stats: &FrameStats) -> Block {
        (self.root)(stats)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(|| Block::column(["Hello TUI!"], HAlign::Center))
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Layout(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn default_says_hello() {
        let mut layout = Layout::default();
        assert_eq!(layout.render(&FrameStats::default()).flatten(), "Hello TUI!");
    }

    #[test]
    fn callback_runs_every_render() {
        let mut count = 0;
        let mut layout = Layout::new(move || {
            count += 1;
            Block::new(&count.to_string())
        });
        let stats = FrameStats::default();
        assert_eq!(layout.render(&stats).flatten(), "1");
        assert_eq!(layout.render(&stats).flatten(), "2");
    }

    #[test]
    fn stats_reach_the_callback() {
        let mut layout = Layout::with_stats(|stats| Block::new(&format!("{}ms", stats.delay.as_millis())));
        let stats = FrameStats {
            delay: Duration::from_millis(33),
            ..FrameStats::default()
        };
        assert_eq!(layout.render(&stats).flatten(), "33ms");
    }

    #[test]
    fn debug_is_opaque() {
        assert_eq!(format!("{:?}", Layout::default()), "Layout(..)");
    }
}
