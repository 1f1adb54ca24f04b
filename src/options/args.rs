//! Argument parsing via clap.
//!
//! Note that you probably want to keep this as a single file so the build script doesn't
//! trip all over itself.

use std::path::PathBuf;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "battstat [OPTIONS] [FILE]";

/// The arguments for battstat.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[arg(
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        help = "A telemetry dump to read instead of the live system.",
        long_help = indoc! {
            "A telemetry dump to read instead of the live system. The file holds one attribute per
            line, either in uevent form (POWER_SUPPLY_ENERGY_NOW=23250000) or as bare attribute
            names (energy_now=23250000). When given, no other input is read."
        }
    )]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub battery_args: BatteryArgs,

    #[command(flatten)]
    pub alarm_args: AlarmArgs,

    #[command(flatten)]
    pub general_args: GeneralArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Battery Options")]
pub struct BatteryArgs {
    #[arg(
        short = 'b',
        long,
        value_name = "NAME",
        conflicts_with_all = ["all", "list"],
        help = "Reads the named battery (e.g. BAT0).",
        long_help = "Reads the named battery (e.g. BAT0) from the power-supply directory. Defaults to \
                    the configured default battery, or else the first battery found."
    )]
    pub battery: Option<String>,

    #[arg(
        short = 'a',
        long,
        conflicts_with = "list",
        help = "Prints one status line per battery.",
        long_help = "Prints one status line per battery found, in the same order as --list. Each \
                    battery is computed independently."
    )]
    pub all: bool,

    #[arg(short = 'l', long, help = "Lists the batteries that can be read, then exits.")]
    pub list: bool,

    #[arg(
        long = "sysfs_root",
        value_name = "PATH",
        value_hint = ValueHint::DirPath,
        help = "Sets the power-supply directory to read batteries from.",
        long_help = "Sets the power-supply directory to read batteries from. Defaults to \
                    /sys/class/power_supply."
    )]
    pub sysfs_root: Option<PathBuf>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Alarm Options")]
pub struct AlarmArgs {
    #[arg(
        long,
        value_name = "PERCENT",
        value_parser = value_parser!(u8).range(0..=100),
        help = "Raises a low-battery alarm below this percentage.",
        long_help = "Raises a low-battery alarm for every battery that is not charging and sits below \
                    this percentage. The alarm is a warning on stderr, plus the --notify command if set."
    )]
    pub alarm: Option<u8>,

    #[arg(
        long,
        value_name = "COMMAND",
        help = "Runs a shell command when the alarm is raised.",
        long_help = "Runs a shell command (through `sh -c`) once per battery that raises the alarm. The \
                    battery's percentage is passed in the BATTSTAT_PERCENTAGE environment variable."
    )]
    pub notify: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long = "config",
        value_name = "CONFIG PATH",
        value_hint = ValueHint::AnyPath,
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    Unlike the default location, a path given here must exist."
    )]
    pub config_location: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(short='h', long, action=ArgAction::Help, help="Prints help info (for more details use `--help`.")]
    help: (),

    #[arg(short='V', long, action=ArgAction::Version, help="Prints version information.")]
    version: (),
}

/// Returns a [`Command`] based on [`Args`].
pub fn build_cmd() -> Command {
    Args::command()
}

/// Returns the parsed [`Args`].
pub fn get_args() -> Args {
    Args::parse()
}
