//! Clock-free session driver.

use crate::cli::args::SimulateArgs;
use crate::error::PomowatchError;
use crate::output::format_snapshot;
use crate::session::{SessionController, TickOutcome};

use super::Context;

/// Execute simulate command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn simulate(ctx: &Context, args: &SimulateArgs) -> Result<String, PomowatchError> {
    let mut controller = ctx.controller(args.phase);
    if !args.paused {
        controller.start();
    }

    drive(&mut controller, args.ticks, args.switch_after);
    format_snapshot(&controller.snapshot(), ctx.format)
}

/// Apply `ticks` ticks, switching phase once after `switch_after` of them.
fn drive(controller: &mut SessionController, ticks: u32, switch_after: Option<u32>) {
    for n in 0..ticks {
        if switch_after == Some(n) {
            controller.switch_phase();
        }
        if let TickOutcome::Advanced(phase) = controller.tick() {
            log::info!("advanced to {phase}");
        }
    }
    if switch_after == Some(ticks) {
        controller.switch_phase();
    }
}
