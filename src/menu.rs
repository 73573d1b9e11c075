//! Interactive menu loop.
//!
//! ```text
//!     [1] Add white background 1200x1200
//!     [2] Resize images 1200x1200
//!     [3] Smart resize
//!     [Q] Quit
//!     Choose an option:
//! ```
//!
//! One line is read per prompt, trimmed and uppercased. A valid option runs a
//! full batch before the prompt comes back; `Q` (or end of input) ends the
//! loop. Anything else prints [`INVALID_OPTION`] to the terminal and prompts
//! again. Invalid input is not an activity-log event.

use crate::activity::ActivityLog;
use crate::imaging::{CanvasSize, Policy};
use std::io::{self, BufRead, Write};

/// Printed to the terminal for unrecognized input.
pub const INVALID_OPTION: &str = "Invalid option. Please choose again.";

/// A parsed line of menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Policy),
    Quit,
    Invalid,
}

pub fn parse_choice(line: &str) -> MenuChoice {
    match line.trim().to_uppercase().as_str() {
        "1" => MenuChoice::Run(Policy::PadAndCenter),
        "2" => MenuChoice::Run(Policy::Resize),
        "3" => MenuChoice::Run(Policy::Smart),
        "Q" => MenuChoice::Quit,
        _ => MenuChoice::Invalid,
    }
}

/// Human label for a menu option, shared by the prompt and the log.
pub fn option_label(policy: Policy, canvas: CanvasSize) -> String {
    match policy {
        Policy::PadAndCenter => format!("Add white background {canvas}"),
        Policy::Resize => format!("Resize images {canvas}"),
        Policy::Smart => "Smart resize".to_string(),
    }
}

pub fn prompt_text(canvas: CanvasSize) -> String {
    format!(
        "\n    [1] {}\n    [2] {}\n    [3] {}\n    [Q] Quit\n    Choose an option: ",
        option_label(Policy::PadAndCenter, canvas),
        option_label(Policy::Resize, canvas),
        option_label(Policy::Smart, canvas),
    )
}

/// Drive the prompt until the operator quits or input ends.
///
/// `run_batch` is called once per valid option and must finish the whole
/// batch before returning.
pub fn run_menu<R, W, F>(
    input: &mut R,
    out: &mut W,
    canvas: CanvasSize,
    log: &mut ActivityLog,
    mut run_batch: F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(Policy, &mut ActivityLog, &mut W) -> io::Result<()>,
{
    let prompt = prompt_text(canvas);
    let mut line = String::new();

    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        line.clear();
        let choice = if input.read_line(&mut line)? == 0 {
            // Closed stdin behaves like Q.
            writeln!(out)?;
            MenuChoice::Quit
        } else {
            parse_choice(&line)
        };

        match choice {
            MenuChoice::Run(policy) => {
                log.info(&format!(
                    "Option selected: {}",
                    option_label(policy, canvas)
                ));
                run_batch(policy, log, out)?;
            }
            MenuChoice::Quit => {
                log.info("Exiting program");
                return Ok(());
            }
            MenuChoice::Invalid => writeln!(out, "{INVALID_OPTION}")?,
        }
    }
}
