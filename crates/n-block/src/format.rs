// SPDX-License-Identifier: MIT
//
// Format operations — padding, alignment, boxing, and cropping.
//
// Each operation consumes the block and hands it back, so a layout reads
// as one chain:
//
//   Block::new("FPS: 30").fit(Some(20), None, true).pad(1).boxed(CornerStyle::Round)
//
// They are written purely against the primitives in `block.rs`
// (`map_lines`, `append`, `prepend`, `crop_lines`), which keep the cached
// width honest. None of them can fail: a target smaller than the content
// is either ignored (alignment never shrinks) or cropped with a visible
// marker (`fit`).

use crate::assets::{CROP_MARKER, CornerStyle, LineStyle};
use crate::block::{Block, HAlign, VAlign, spaces};
use crate::width::{line_width, truncate};

impl Block {
    // ─── Padding ─────────────────────────────────────────────────────────

    /// Add `n` spaces to both ends of every line. Width grows by `2n`.
    #[must_use]
    pub fn h_pad(mut self, n: usize) -> Self {
        if n == 0 {
            return self;
        }
        let pad = spaces(n);
        self.map_lines(|line| format!("{pad}{line}{pad}"));
        self
    }

    /// Add `n` blank lines, as wide as the block, above and below.
    #[must_use]
    pub fn v_pad(mut self, n: usize) -> Self {
        let filler = spaces(self.width());
        self.prepend(std::iter::repeat_n(filler.as_str(), n));
        self.append(std::iter::repeat_n(filler.as_str(), n));
        self
    }

    /// [`v_pad`](Self::v_pad) then [`h_pad`](Self::h_pad).
    ///
    /// The order matters: the new blank lines are made at the old width,
    /// then horizontal padding widens every line uniformly.
    ///
    /// ```
    /// use n_block::Block;
    ///
    /// let padded = Block::new("x").pad(1);
    /// assert_eq!(padded.lines(), ["   ", " x ", "   "]);
    /// ```
    #[must_use]
    pub fn pad(self, n: usize) -> Self {
        self.v_pad(n).h_pad(n)
    }

    // ─── Alignment ───────────────────────────────────────────────────────

    /// Even out line widths to `width` (default: the block's width).
    ///
    /// Each line gets `width - line_width` spaces placed according to
    /// `align`. A target narrower than the block is ignored; use
    /// [`fit`](Self::fit) to shrink.
    #[must_use]
    pub fn v_align(mut self, align: HAlign, width: Option<usize>) -> Self {
        let target = width.unwrap_or(self.width());
        if target < self.width() {
            return self;
        }
        self.map_lines(|line| {
            let extra = target - line_width(line);
            match align {
                HAlign::Left => format!("{line}{}", spaces(extra)),
                HAlign::Right => format!("{}{line}", spaces(extra)),
                HAlign::Center => format!("{}{line}{}", spaces(extra / 2), spaces(extra - extra / 2)),
            }
        });
        self
    }

    /// Grow the block to `height` lines (default: its current height) by
    /// adding blank lines placed according to `align`. A target shorter
    /// than the block is ignored.
    #[must_use]
    pub fn h_align(mut self, align: VAlign, height: Option<usize>) -> Self {
        let target = height.unwrap_or(self.height());
        if target <= self.height() {
            return self;
        }
        let extra = target - self.height();
        let filler = spaces(self.width());
        let (above, below) = match align {
            VAlign::Top => (0, extra),
            VAlign::Bottom => (extra, 0),
            VAlign::Center => (extra / 2, extra - extra / 2),
        };
        self.prepend(std::iter::repeat_n(filler.as_str(), above));
        self.append(std::iter::repeat_n(filler.as_str(), below));
        self
    }

    /// Center the block inside a `height` × `width` rectangle.
    ///
    /// An axis given as `None` is left untouched.
    ///
    /// ```
    /// use n_block::Block;
    ///
    /// let centered = Block::new("x").align(Some(3), Some(3));
    /// assert_eq!(centered.lines(), ["   ", " x ", "   "]);
    /// ```
    #[must_use]
    pub fn align(self, height: Option<usize>, width: Option<usize>) -> Self {
        let block = match width {
            Some(w) => self.v_align(HAlign::Center, Some(w)),
            None => self,
        };
        match height {
            Some(h) => block.h_align(VAlign::Center, Some(h)),
            None => block,
        }
    }

    // ─── Box ─────────────────────────────────────────────────────────────

    /// Draw a border around the block with single-line edges.
    ///
    /// Lines are left-aligned to the block's width first, since a box needs
    /// rectangular content. Width and height each grow by 2.
    ///
    /// ```
    /// use n_block::Block;
    /// use n_block::assets::CornerStyle;
    ///
    /// let boxed = Block::new("x").boxed(CornerStyle::Round);
    /// assert_eq!(boxed.lines(), ["╭─╮", "│x│", "╰─╯"]);
    /// ```
    #[must_use]
    pub fn boxed(self, corners: CornerStyle) -> Self {
        self.boxed_with(corners, LineStyle::Single)
    }

    /// [`boxed`](Self::boxed) with an explicit edge style.
    #[must_use]
    pub fn boxed_with(self, corners: CornerStyle, lines: LineStyle) -> Self {
        let c = corners.corners();
        let e = lines.edges();

        let mut block = self.v_align(HAlign::Left, None);
        let rule: String = std::iter::repeat_n(e.horizontal, block.width()).collect();

        block.map_lines(|line| format!("{v}{line}{v}", v = e.vertical));
        block.prepend([format!("{}{rule}{}", c.top_left, c.top_right)]);
        block.append([format!("{}{rule}{}", c.bottom_left, c.bottom_right)]);
        block
    }

    // ─── Fit ─────────────────────────────────────────────────────────────

    /// Constrain the block to `width` columns and `height` lines.
    ///
    /// Lines wider than `width` are cut to `width - 1` columns and end with
    /// [`CROP_MARKER`]. A block taller than `height` keeps its first
    /// `height - 1` lines followed by a line of crop markers. With `fill`,
    /// narrower lines are centered in `width` and missing lines are added
    /// as blanks, so the result is exactly `width` × `height`.
    ///
    /// `fit` does not even out ragged lines without `fill`; call
    /// [`v_align`](Self::v_align) first if that matters.
    ///
    /// ```
    /// use n_block::Block;
    ///
    /// assert_eq!(Block::new("hello").fit(Some(3), None, false).lines(), ["he░"]);
    /// ```
    #[must_use]
    pub fn fit(mut self, width: Option<usize>, height: Option<usize>, fill: bool) -> Self {
        if let Some(target) = width {
            self.map_lines(|line| {
                let w = line_width(line);
                if w > target {
                    crop_line(line, target)
                } else if fill && w < target {
                    let extra = target - w;
                    format!("{}{line}{}", spaces(extra / 2), spaces(extra - extra / 2))
                } else {
                    line.to_owned()
                }
            });
        }

        if let Some(target) = height {
            // Always room for the crop marker line.
            let target = target.max(1);
            if self.height() > target {
                let marker: String = std::iter::repeat_n(CROP_MARKER, self.width()).collect();
                self.crop_lines(target - 1, marker);
            } else if fill && self.height() < target {
                let filler = spaces(self.width());
                let missing = target - self.height();
                self.append(std::iter::repeat_n(filler.as_str(), missing));
            }
        }

        self
    }
}

/// Cut `line` to exactly `target` columns, the last one being the marker.
///
/// A wide glyph that would straddle the cut is replaced by spaces.
fn crop_line(line: &str, target: usize) -> String {
    if target == 0 {
        return String::new();
    }
    let (prefix, used) = truncate(line, target - 1);
    format!("{prefix}{}{CROP_MARKER}", spaces(target - 1 - used))
}

// ─── Tests ──────────────────────────────────────────────────────────────────
