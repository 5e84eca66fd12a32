// SPDX-License-Identifier: MIT
//
// n-tui — a live dashboard that shows off the block layout engine.
//
// This is the demo binary that wires the two crates together:
//
//   n-block → Block, column/row composition, pad/fit/box formatting
//   n-term  → settings, frame pacing, the redraw loop
//
// Every frame the layout closure builds a fresh block tree from the
// current frame stats; the runner centers it in a boxed main window sized
// to the terminal and redraws the screen. Ctrl-C stops the loop and
// restores the cursor.
//
// Layout:
//
//   ┌──────────────────────────────────┐
//   │        greeting (boxed)          │  ← centered over the row below
//   ├──────────────────────────────────┤
//   │  FPS panel  │  delay panel       │  ← boxed, fixed-width panels
//   └──────────────────────────────────┘
//
// Usage:
//   n-tui [--fps N] [--size ROWSxCOLS] [--no-window] [--corners sharp|round]
//
// Logging goes to stderr and is off unless N_TUI_LOG is set
// (e.g. N_TUI_LOG=debug n-tui 2>trace.log).

use std::env;
use std::process;
use std::sync::mpsc;
use std::time::Duration;

use n_block::{Block, CornerStyle, Element, HAlign, VAlign};
use n_term::{FrameStats, Layout, Settings, Size};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "N_TUI_LOG";

/// Fixed width of each stats panel, so the row does not jump as numbers change.
const PANEL_WIDTH: usize = 20;

const USAGE: &str = "usage: n-tui [--fps N] [--size ROWSxCOLS] [--no-window] [--corners sharp|round]";

// ─── Arguments ──────────────────────────────────────────────────────────────

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Settings),
    Help,
}

/// Parse command-line arguments (without the program name) into settings.
fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut settings = Settings::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--no-window" => settings = settings.with_main_window(false),
            "--fps" => {
                let value = args.next().ok_or("--fps needs a value")?;
                let fps = value
                    .parse::<u32>()
                    .map_err(|e| format!("invalid --fps {value:?}: {e}"))?;
                settings = settings.with_target_fps(fps);
            }
            "--size" => {
                let value = args.next().ok_or("--size needs a value")?;
                settings = settings.with_window_size(parse_size(&value)?);
            }
            "--corners" => {
                let value = args.next().ok_or("--corners needs a value")?;
                let corners = value.parse::<CornerStyle>().map_err(|e| e.to_string())?;
                settings = settings.with_corners(corners);
            }
            other => return Err(format!("unexpected argument {other:?}")),
        }
    }

    Ok(Command::Run(settings))
}

/// Parse `ROWSxCOLS`, e.g. `50x70`.
fn parse_size(value: &str) -> Result<Size, String> {
    let (rows, cols) = value
        .split_once('x')
        .ok_or_else(|| format!("invalid --size {value:?}: expected ROWSxCOLS"))?;
    let parse = |n: &str| {
        n.trim()
            .parse::<u16>()
            .map_err(|e| format!("invalid --size {value:?}: {e}"))
    };
    Ok(Size {
        rows: parse(rows)?,
        cols: parse(cols)?,
    })
}

// ─── Layout ─────────────────────────────────────────────────────────────────

/// Build one frame of the dashboard.
fn dashboard(user: &str, stats: &FrameStats) -> Block {
    let panels = Block::row_with(
        [
            Element::from(format!("FPS: {:.1}", stats.avg_fps)),
            Element::from(Block::column(
                ["Refresh delay (ms)".to_owned(), stats.delay.as_millis().to_string()],
                HAlign::Center,
            )),
        ],
        VAlign::Center,
        |panel| {
            panel
                .fit(Some(PANEL_WIDTH), None, true)
                .pad(1)
                .boxed(CornerStyle::Round)
                .h_pad(1)
        },
    );

    Block::column_with(
        [Element::from(format!("Greetings, {user}!")), Element::from(panels)],
        HAlign::Center,
        |row| row.h_pad(1).boxed(CornerStyle::Round),
    )
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let settings = match parse_args(env::args().skip(1)) {
        Ok(Command::Run(settings)) => settings,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("n-tui: {e}\n{USAGE}");
            process::exit(2);
        }
    };

    let user = env::var("USER").unwrap_or_else(|_| String::from("traveler"));
    let layout = Layout::with_stats(move |stats| dashboard(&user, stats));

    let (quit_tx, quit_rx) = mpsc::channel();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = quit_tx.send(());
    }) {
        tracing::warn!("failed to install Ctrl-C handler: {e}");
    }

    tracing::info!(?settings, "starting n-tui");
    let handle = n_term::run(layout, settings).unwrap_or_else(|e| {
        eprintln!("n-tui: {e}");
        process::exit(1);
    });

    // Wake up now and then to notice a loop that died on its own.
    while !handle.is_finished() {
        if quit_rx.recv_timeout(Duration::from_millis(100)).is_ok() {
            break;
        }
    }

    if let Err(e) = handle.stop() {
        eprintln!("n-tui: {e}");
        process::exit(1);
    }
    println!();
}

// ─── Tests ──────────────────────────────────────────────────────────────────
