// SPDX-License-Identifier: MIT
//
// End-to-end layouts through the public API: build, format, flatten.

use n_block::width::{line_width, max_width};
use n_block::{Block, CornerStyle, Element, HAlign, VAlign};
use pretty_assertions::assert_eq;

fn is_rectangular(block: &Block) -> bool {
    block.lines().iter().all(|l| line_width(l) == block.width())
}

#[test]
fn column_left_scenario() {
    let block = Block::column(["Hi", "Bye"], HAlign::Left);
    assert_eq!(block.flatten(), "Hi \nBye");
}

#[test]
fn row_default_center_scenario() {
    let block = Block::row(["a", "bb"], VAlign::default());
    assert_eq!(block.flatten(), "abb");
}

#[test]
fn box_scenario() {
    let block = Block::new("x").boxed(CornerStyle::Round);
    assert_eq!(block.flatten(), "╭─╮\n│x│\n╰─╯");
}

#[test]
fn fit_scenario() {
    let block = Block::new("hello").fit(Some(3), None, false);
    assert_eq!(block.flatten(), "he░");
}

#[test]
fn composition_sizes_add_up() {
    let a = Block::from_lines(["one", "two"]);
    let b = Block::from_lines(["three", "four", "five"]);

    let col = Block::column([a.clone(), b.clone()], HAlign::Center);
    assert_eq!(col.height(), a.height() + b.height());
    assert_eq!(col.width(), a.width().max(b.width()));

    let row = Block::row([a.clone(), b.clone()], VAlign::Center);
    assert_eq!(row.width(), a.width() + b.width());
    assert_eq!(row.height(), a.height().max(b.height()));
}

#[test]
fn h_pad_shifts_every_line_by_fixed_offset() {
    let block = Block::from_lines(["ab", "cde"]);
    let padded = block.clone().h_pad(3);
    for (before, after) in block.lines().iter().zip(padded.lines()) {
        assert_eq!(after.len(), before.len() + 6);
        assert_eq!(&after[3..after.len() - 3], before.as_str());
        assert!(after.starts_with("   ") && after.ends_with("   "));
    }
}

#[test]
fn nested_dashboard_layout() {
    // Greeting above a row of two boxed, fixed-width panels.
    let stats = Block::row_with(
        [
            Element::from("FPS: 29.7"),
            Element::from(Block::column(["Refresh delay (ms)", "33"], HAlign::Center)),
        ],
        VAlign::Center,
        |col| col.fit(Some(20), None, true).pad(1).boxed(CornerStyle::Round).h_pad(1),
    );
    let screen = Block::column_with(["Greetings, traveler!".into(), Element::from(stats)], HAlign::Center, |row| {
        row.h_pad(1).boxed(CornerStyle::Round)
    });

    // Each panel: 20 content + 2 pad + 2 border + 2 outer pad = 26 columns.
    // The row: 52 columns, + 2 pad + 2 border = 56.
    assert_eq!(screen.width(), 56);
    assert!(is_rectangular(&screen));
    assert_eq!(screen.width(), max_width(screen.lines()));

    let text = screen.flatten();
    assert!(text.contains("Greetings, traveler!"));
    assert!(text.contains("FPS: 29.7"));
    assert!(text.contains("Refresh delay (ms)"));
}

#[test]
fn main_window_frame_is_exact_size() {
    let (height, width) = (6, 12);
    let content = Block::column(["a rather long first line", "b", "c", "d", "e", "f", "g"], HAlign::Left);
    let frame = content
        .align(Some(height), Some(width))
        .fit(Some(width), Some(height), true)
        .boxed(CornerStyle::Sharp);

    assert_eq!(frame.width(), width + 2);
    assert_eq!(frame.height(), height + 2);
    assert!(is_rectangular(&frame));
    assert!(frame.lines()[height].contains('░'));
}

#[test]
fn leaf_roundtrip() {
    for s in ["", "plain", "中文 mixed", "e\u{301}t\u{e9}"] {
        assert_eq!(Block::new(s).flatten(), s);
    }
}
