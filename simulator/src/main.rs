//! Attendance Display Simulator for desktop platforms.
//!
//! Runs the screens, animations and transitions of the `attendance-display`
//! crate in an `embedded-graphics-simulator` window with the real frame
//! timing. Closing the window ends the run.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

mod demo;
mod timing;
mod window;

use std::process::ExitCode;

use attendance_display::{DisplayError, Sequencer};
use clap::{Parser, ValueEnum};
use log::{error, info};

use crate::demo::{Preview, run_animations, run_screens, run_transitions};
use crate::timing::StdDelay;
use crate::window::WindowCanvas;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Demo {
    /// Named screens, faces and icons
    Screens,
    /// Timed and single-step animations
    Animations,
    /// Slide, zoom and fade transitions
    Transitions,
    /// Everything, in a loop until the window is closed
    All,
}

#[derive(Parser, Debug)]
#[command(name = "simulator")]
#[command(about = "Preview the attendance terminal display on the desktop")]
struct Args {
    /// What to play
    #[arg(value_enum, default_value_t = Demo::All)]
    demo: Demo,

    /// Window pixels per panel pixel
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=10))]
    scale: u32,
}

fn play(
    preview: &mut Preview<'_>,
    demo: Demo,
) -> Result<(), DisplayError> {
    match demo {
        Demo::Screens => run_screens(preview),
        Demo::Animations => run_animations(preview),
        Demo::Transitions => run_transitions(preview),
        Demo::All => loop {
            run_screens(preview)?;
            run_animations(preview)?;
            run_transitions(preview)?;
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    info!("playing {:?} at {}x", args.demo, args.scale);

    let mut preview = Sequencer::new(WindowCanvas::open(args.scale), StdDelay);

    match play(&mut preview, args.demo) {
        Ok(()) => {
            // leave the last frame up until the window is closed
            while preview.canvas_mut().idle() {
                std::thread::sleep(timing::POLL_INTERVAL);
            }
            ExitCode::SUCCESS
        }
        Err(DisplayError::Communication) if preview.canvas().is_closed() => {
            info!("window closed, exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}
