//! A one-shot low-battery alarm, checked once per run after the status lines
//! are printed.

use std::{io::Write, process::Command};

use anyhow::{bail, Context, Result};

use crate::collection::batteries::StatusResult;

/// The variable the notify command reads the battery percentage from.
pub const PERCENTAGE_VAR: &str = "BATTSTAT_PERCENTAGE";

/// Raised by a battery that is not charging and sits below `level` percent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LowBatteryAlarm {
    /// In `0..=100`. A level of 0 never fires.
    pub level: u8,
    /// Run through `sh -c` each time the alarm is raised.
    pub notify: Option<String>,
}

impl LowBatteryAlarm {
    pub fn is_triggered(&self, status: &StatusResult) -> bool {
        !status.charging && status.percentage < self.level
    }

    /// Writes a warning to `warnings` and runs the notify command, if there is
    /// one. A notify command that can't start or exits unsuccessfully is an
    /// error.
    pub fn raise(&self, status: &StatusResult, warnings: &mut impl Write) -> Result<()> {
        writeln!(
            warnings,
            "battstat: battery at {}%, below the alarm level of {}%.",
            status.percentage, self.level
        )?;

        let Some(notify) = &self.notify else {
            return Ok(());
        };

        crate::info!("Running the notify command '{notify}'");
        let exit = Command::new("sh")
            .arg("-c")
            .arg(notify)
            .env(PERCENTAGE_VAR, status.percentage.to_string())
            .status()
            .with_context(|| format!("Unable to run the notify command '{notify}'."))?;

        if !exit.success() {
            bail!("The notify command '{notify}' failed ({exit}).");
        }

        Ok(())
    }

    /// Raises the alarm for every triggering status, in order. Returns how many
    /// were raised.
    pub fn check(&self, statuses: &[StatusResult], warnings: &mut impl Write) -> Result<usize> {
        let mut raised = 0;
        for status in statuses.iter().filter(|status| self.is_triggered(status)) {
            self.raise(status, warnings)?;
            raised += 1;
        }

        Ok(raised)
    }
}
