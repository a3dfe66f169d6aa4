//! Headless countdown in the terminal.

use std::io::{self, Write};
use std::thread;

use colored::Colorize;
use log::info;

use crate::cli::args::{OutputFormat, RunArgs};
use crate::clock::{Metronome, TickSource, Ticker};
use crate::error::PomowatchError;
use crate::output::{format_countdown_line, format_snapshot};
use crate::session::{AdvanceMode, SessionController, TickOutcome};

use super::Context;

/// Execute run command
///
/// Blocks until the requested number of phases has finished.
///
/// # Errors
///
/// Returns an error if writing to stdout or output formatting fails.
pub fn run(ctx: &Context, args: &RunArgs) -> Result<String, PomowatchError> {
    let mut controller = ctx.controller(args.phase);
    let cycles = match ctx.mode {
        AdvanceMode::Manual => 1,
        AdvanceMode::Auto { .. } => args.cycles.max(1),
    };

    let mut ticker: Ticker<Metronome> = Ticker::new();
    let mut stdout = io::stdout();

    controller.start();
    ticker.ensure_started();
    let pretty = ctx.format == OutputFormat::Pretty;

    let finished = count_down(&mut controller, &mut ticker, cycles, |c| {
        if pretty {
            write!(stdout, "\r{}", format_countdown_line(&c.snapshot()))?;
            stdout.flush()?;
        }
        Ok(())
    })?;
    ticker.release();

    if pretty {
        writeln!(stdout)?;
        return Ok(format!(
            "{} {} phase{} finished",
            "Done:".green().bold(),
            finished,
            if finished == 1 { "" } else { "s" }
        ));
    }
    format_snapshot(&controller.snapshot(), ctx.format)
}

/// Pump `ticker` into `controller` until `cycles` phases have finished.
///
/// `render` is called once up front and after every batch of ticks.
fn count_down<S, F>(
    controller: &mut SessionController,
    ticker: &mut Ticker<S>,
    cycles: u32,
    mut render: F,
) -> Result<u32, PomowatchError>
where
    S: TickSource + Waitable,
    F: FnMut(&SessionController) -> Result<(), PomowatchError>,
{
    let mut finished = 0;
    render(controller)?;

    while finished < cycles && ticker.is_active() {
        ticker.wait();
        let outcomes = ticker.pump(controller);
        for outcome in &outcomes {
            match outcome {
                TickOutcome::Finished => {
                    finished += 1;
                    info!("{} finished ({finished}/{cycles})", controller.phase());
                }
                TickOutcome::Advanced(phase) => info!("advanced to {phase}"),
                _ => {}
            }
            if finished >= cycles {
                break;
            }
        }
        if !outcomes.is_empty() {
            render(controller)?;
        }
    }

    Ok(finished)
}

/// A tick source that can block until its next tick.
pub(crate) trait Waitable {
    fn wait(&self);
}

impl Waitable for Metronome {
    fn wait(&self) {
        thread::sleep(self.until_next());
    }
}

impl<S: TickSource + Waitable> Ticker<S> {
    fn wait(&self) {
        if let Some(source) = self.source() {
            source.wait();
        }
    }
}
