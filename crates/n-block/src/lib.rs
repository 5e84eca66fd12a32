//! # n-block — text-block layout algebra for n-tui
//!
//! Builds terminal screens out of rectangles of text instead of cursor
//! math. A screen is a tree of blocks composed every frame:
//!
//! ```text
//! &str / Block
//!     │
//!     ▼
//! block.rs:  Block::column / Block::row (compose, with per-element transform)
//!     │
//!     ▼
//! format.rs: pad / align / fit / boxed (chained, by value)
//!     │
//!     ▼
//! block.rs:  flatten → String, ready to print
//! ```
//!
//! Widths are always display widths ([`width`]), so CJK text and combining
//! marks line up. Box glyphs and the crop marker live in [`assets`].
//!
//! # Example
//!
//! ```
//! use n_block::{Block, HAlign, VAlign};
//! use n_block::assets::CornerStyle;
//!
//! let screen = Block::column_with(
//!     [
//!         Block::new("Greetings!"),
//!         Block::row(["FPS: 30", " | ", "delay: 33ms"], VAlign::Center),
//!     ],
//!     HAlign::Center,
//!     |b| b.h_pad(1),
//! )
//! .boxed(CornerStyle::Round);
//!
//! assert_eq!(screen.height(), 4);
//! assert_eq!(screen.width(), 25);
//! ```

pub mod assets;
pub mod block;
mod format;
pub mod width;

pub use assets::{CROP_MARKER, CornerStyle, LineStyle, UnknownStyle};
pub use block::{Block, Element, HAlign, VAlign};
