// SPDX-License-Identifier: MIT
//
// Box-drawing assets — the glyphs `Block::boxed` draws with.
//
// Two independent tables: corner sets (the four glyphs that close a box)
// and line sets (the vertical and horizontal edge glyphs between them).
// Both are keyed by name so a style can come from a settings file or a
// command-line flag. Everything here is `'static` and immutable.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Glyph appended to a line (or repeated across a line) where content
/// was cropped by [`Block::fit`](crate::Block::fit).
pub const CROP_MARKER: char = '░';

/// A style name that is not in the asset table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} style: {name:?}")]
pub struct UnknownStyle {
    /// Which table was searched ("corner" or "line").
    pub kind: &'static str,
    /// The name that failed to resolve.
    pub name: String,
}

// ─── Corners ────────────────────────────────────────────────────────────────

/// The four corner glyphs of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corners {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

/// Named corner sets.
///
/// # Examples
///
/// ```
/// use n_block::assets::CornerStyle;
///
/// let round: CornerStyle = "round".parse().unwrap();
/// assert_eq!(round.corners().top_left, '╭');
/// assert!("wavy".parse::<CornerStyle>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CornerStyle {
    /// `┏┓┗┛`
    Sharp,
    /// `╭╮╰╯`
    #[default]
    Round,
}

impl CornerStyle {
    /// Look up a corner set by name. Returns `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sharp" => Some(Self::Sharp),
            "round" => Some(Self::Round),
            _ => None,
        }
    }

    /// The table key for this style.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sharp => "sharp",
            Self::Round => "round",
        }
    }

    /// All corner style names.
    #[must_use]
    pub const fn names() -> &'static [&'static str] {
        &["sharp", "round"]
    }

    /// The glyphs for this style.
    #[must_use]
    pub const fn corners(self) -> Corners {
        match self {
            Self::Sharp => Corners {
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
            },
            Self::Round => Corners {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
            },
        }
    }
}

impl FromStr for CornerStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownStyle {
            kind: "corner",
            name: s.to_owned(),
        })
    }
}

impl fmt::Display for CornerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Lines ──────────────────────────────────────────────────────────────────

/// The edge glyphs of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edges {
    /// Drawn on both sides of every content line.
    pub vertical: char,
    /// Repeated across the top and bottom border.
    pub horizontal: char,
}

/// Named line sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    /// `│─`
    #[default]
    Single,
    /// `┃━`, pairs with [`CornerStyle::Sharp`].
    Heavy,
}

impl LineStyle {
    /// Look up a line set by name. Returns `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "single" => Some(Self::Single),
            "heavy" => Some(Self::Heavy),
            _ => None,
        }
    }

    /// The table key for this style.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Heavy => "heavy",
        }
    }

    /// All line style names.
    #[must_use]
    pub const fn names() -> &'static [&'static str] {
        &["single", "heavy"]
    }

    /// The glyphs for this style.
    #[must_use]
    pub const fn edges(self) -> Edges {
        match self {
            Self::Single => Edges {
                vertical: '│',
                horizontal: '─',
            },
            Self::Heavy => Edges {
                vertical: '┃',
                horizontal: '━',
            },
        }
    }
}

impl FromStr for LineStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownStyle {
            kind: "line",
            name: s.to_owned(),
        })
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
