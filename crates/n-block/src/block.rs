// SPDX-License-Identifier: MIT
//
// Block — a rectangle-ish grid of text lines, the unit of layout.
//
// A block is nothing more than an ordered list of lines (top to bottom)
// plus the cached display width of its widest line. Everything else in the
// crate is built on the handful of primitives defined here:
//
//   - append / prepend  add whole lines below or above
//   - map_lines         rewrite every line in place
//   - column / row      compose many blocks into one
//
// Composition consumes its inputs. The result owns freshly built lines and
// shares nothing with the blocks it was made from, so a frame's block graph
// can be built, formatted, flattened, and dropped without any aliasing.
//
// Lines are never empty: a leaf built from "" still has one (empty) line,
// and composing zero elements produces `Block::empty()`.
//
//   column("Hi", "Bye", Left)      row("a", "bb")
//
//     ┌───┐                          ┌───┐
//     │Hi │                          │abb│
//     │Bye│                          └───┘
//     └───┘

use std::fmt;

use crate::width::max_width;

// ─── Alignment ──────────────────────────────────────────────────────────────

/// Where spare columns go when a line or block is narrower than its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HAlign {
    /// Content hugs the left edge; spaces are added on the right.
    Left,
    /// Half the spare columns on each side; an odd one goes on the right.
    #[default]
    Center,
    /// Content hugs the right edge; spaces are added on the left.
    Right,
}

/// Where spare lines go when a block is shorter than its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VAlign {
    /// Content hugs the top; blank lines are added at the bottom.
    Top,
    /// Half the spare lines above and below; an odd one goes at the bottom.
    #[default]
    Center,
    /// Content hugs the bottom; blank lines are added at the top.
    Bottom,
}

// ─── Element ────────────────────────────────────────────────────────────────

/// One input to [`Block::column`] or [`Block::row`]: plain text or a block.
///
/// Text is turned into a leaf block before any composition happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Text(String),
    Block(Block),
}

impl Element {
    /// Normalize to a block.
    #[must_use]
    pub fn into_block(self) -> Block {
        match self {
            Self::Text(text) => Block::new(&text),
            Self::Block(block) => block,
        }
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Element {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Block> for Element {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}

// ─── Block ──────────────────────────────────────────────────────────────────

/// An ordered sequence of text lines with a cached display width.
///
/// `width` always equals the widest line's display width once a public
/// method returns. Lines may be ragged (of different widths) until an
/// alignment operation evens them out.
///
/// # Examples
///
/// ```
/// use n_block::{Block, HAlign};
///
/// let block = Block::column(["Hi", "Bye"], HAlign::Left);
/// assert_eq!(block.lines(), ["Hi ", "Bye"]);
/// assert_eq!(block.width(), 3);
/// assert_eq!(block.flatten(), "Hi \nBye");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
    width: usize,
}

impl Block {
    // ─── Construction ────────────────────────────────────────────────────

    /// A leaf block from text.
    ///
    /// Each `\n`-separated segment becomes one line, so text without a
    /// newline is a single-line block.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::from_lines(text.split('\n'))
    }

    /// A block from explicit lines. No lines at all gives [`Block::empty`].
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        let width = max_width(&lines);
        Self { lines, width }
    }

    /// A single empty line, width 0.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: vec![String::new()],
            width: 0,
        }
    }

    // ─── Composition ─────────────────────────────────────────────────────

    /// Stack elements top to bottom.
    ///
    /// Every element is padded horizontally to the widest one according to
    /// `align`. Result width is the widest input, result height the sum of
    /// input heights. An empty input gives [`Block::empty`].
    #[must_use]
    pub fn column<I, T>(items: I, align: HAlign) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Element>,
    {
        Self::column_with(items, align, |block| block)
    }

    /// [`column`](Self::column), passing each element through `transform`
    /// before the elements are aligned and stacked.
    ///
    /// ```
    /// use n_block::{Block, HAlign};
    /// use n_block::assets::CornerStyle;
    ///
    /// let boxed = Block::column_with(["a", "b"], HAlign::Center, |b| b.boxed(CornerStyle::Round));
    /// assert_eq!(boxed.height(), 6);
    /// ```
    #[must_use]
    pub fn column_with<I, T, F>(items: I, align: HAlign, transform: F) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Element>,
        F: FnMut(Self) -> Self,
    {
        let rows: Vec<Self> = items
            .into_iter()
            .map(|item| item.into().into_block())
            .map(transform)
            .collect();

        let Some(max_row_width) = rows.iter().map(Self::width).max() else {
            return Self::empty();
        };

        let mut lines = Vec::with_capacity(rows.iter().map(Self::height).sum());
        for mut row in rows {
            let extra = max_row_width - row.width;
            if extra > 0 {
                match align {
                    HAlign::Left => row.map_lines(|line| format!("{line}{}", spaces(extra))),
                    HAlign::Right => row.map_lines(|line| format!("{}{line}", spaces(extra))),
                    HAlign::Center => {
                        row = row.h_pad(extra / 2);
                        if extra % 2 == 1 {
                            row.map_lines(|line| format!("{line} "));
                        }
                    }
                }
            }
            lines.extend(row.lines);
        }

        Self::from_lines(lines)
    }

    /// Place elements side by side, left to right.
    ///
    /// Every element is padded vertically to the tallest one according to
    /// `align`, and each element's lines are padded on the right to that
    /// element's width so the columns stay straight. Result width is the sum
    /// of input widths, result height the tallest input. An empty input
    /// gives [`Block::empty`].
    ///
    /// ```
    /// use n_block::{Block, VAlign};
    ///
    /// let row = Block::row(["a", "bb"], VAlign::Center);
    /// assert_eq!(row.lines(), ["abb"]);
    /// ```
    #[must_use]
    pub fn row<I, T>(items: I, align: VAlign) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Element>,
    {
        Self::row_with(items, align, |block| block)
    }

    /// [`row`](Self::row), passing each element through `transform` before
    /// the elements are aligned and joined.
    #[must_use]
    pub fn row_with<I, T, F>(items: I, align: VAlign, transform: F) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Element>,
        F: FnMut(Self) -> Self,
    {
        let cols: Vec<Self> = items
            .into_iter()
            .map(|item| item.into().into_block())
            .map(transform)
            .collect();

        let Some(max_col_height) = cols.iter().map(Self::height).max() else {
            return Self::empty();
        };

        let cols: Vec<Vec<String>> = cols
            .into_iter()
            .map(|mut col| {
                let extra = max_col_height - col.height();
                match align {
                    VAlign::Top => col.append(std::iter::repeat_n("", extra)),
                    VAlign::Bottom => col.prepend(std::iter::repeat_n("", extra)),
                    VAlign::Center => {
                        col = col.v_pad(extra / 2);
                        if extra % 2 == 1 {
                            col.push_line("");
                        }
                    }
                }
                // Straight columns: every line of this column shares its width.
                col.v_align(HAlign::Left, None).lines
            })
            .collect();

        let lines = (0..max_col_height).map(|i| cols.iter().map(|col| col[i].as_str()).collect::<String>());
        Self::from_lines(lines)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Display width of the widest line.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of lines.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// The lines, top to bottom.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take the lines out of the block.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    // ─── Primitives ──────────────────────────────────────────────────────

    /// Add one line at the bottom. No alignment is performed.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.append(std::iter::once(line));
    }

    /// Add lines at the bottom, in order. No alignment is performed; use
    /// [`v_align`](Self::v_align) to even out widths afterwards.
    pub fn append<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let start = self.lines.len();
        self.lines.extend(lines.into_iter().map(Into::into));
        self.width = self.width.max(max_width(&self.lines[start..]));
    }

    /// Add lines at the top, keeping their order.
    ///
    /// ```
    /// use n_block::Block;
    ///
    /// let mut block = Block::new("1");
    /// block.prepend(["2", "3"]);
    /// assert_eq!(block.lines(), ["2", "3", "1"]);
    /// ```
    pub fn prepend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let head: Vec<String> = lines.into_iter().map(Into::into).collect();
        self.width = self.width.max(max_width(&head));
        self.lines.splice(0..0, head);
    }

    /// Rewrite every line in place and re-measure the block.
    pub fn map_lines<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        for line in &mut self.lines {
            *line = f(line);
        }
        self.width = max_width(&self.lines);
    }

    /// Keep the first `keep` lines, then add `last` below them.
    pub(crate) fn crop_lines(&mut self, keep: usize, last: String) {
        self.lines.truncate(keep);
        self.lines.push(last);
        self.width = max_width(&self.lines);
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Join the lines with `\n` — the printable form of the block.
    #[must_use]
    pub fn flatten(&self) -> String {
        self.lines.join("\n")
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Block {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Block {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// `n` spaces.
pub(crate) fn spaces(n: usize) -> String {
    " ".repeat(n)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
