//! `booking`: month grids and hourly rental slots from the command line.
//!
//! Results go to stdout (text or `--json`); tracing output goes to stderr so
//! it never mixes into piped JSON.

mod logging;
mod render;

use anyhow::{anyhow, Context, Result};
use booking_engine::{
    build_month_view_with, epoch_to_time_label, generate_time_slots, parse_date, parse_month,
    Availability,
};
use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "booking",
    version,
    about = "Booking calendar and hourly rental slots"
)]
struct Cli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a pickup/drop-off window into one-hour slots
    Slots {
        /// Pickup instant, epoch seconds (UTC)
        #[arg(long, allow_negative_numbers = true)]
        pickup: Option<i64>,

        /// Drop-off instant, epoch seconds (UTC)
        #[arg(long, allow_negative_numbers = true)]
        drop_off: Option<i64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render the 6-week date picker grid for a month
    Month {
        /// Month to show, YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,

        /// Selected date, YYYY-MM-DD
        #[arg(long)]
        selected: Option<String>,

        /// Override today's date, YYYY-MM-DD
        #[arg(long)]
        today: Option<String>,

        /// IANA timezone used to read today's date (defaults to the local zone)
        #[arg(long)]
        tz: Option<String>,

        /// Weekdays the product is offered on, e.g. monday,friday
        #[arg(long, value_delimiter = ',')]
        available_days: Vec<String>,

        /// Keep dates before today selectable
        #[arg(long)]
        allow_past: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the 12-hour UTC label of an instant
    Label {
        /// Epoch seconds
        #[arg(allow_negative_numbers = true)]
        epoch: i64,
    },
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        Command::Slots {
            pickup,
            drop_off,
            json,
        } => {
            let result = generate_time_slots(pickup, drop_off);
            info!(
                slots = result.slots.len(),
                total_hours = result.total_hours,
                "generated time slots"
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render::time_slots(&result));
            }
        }
        Command::Month {
            month,
            selected,
            today,
            tz,
            available_days,
            allow_past,
            json,
        } => {
            let today = match today {
                Some(s) => parse_date(&s).context("failed to parse --today")?,
                None => current_date(tz.as_deref())?,
            };
            let month = match month {
                Some(s) => parse_month(&s).context("failed to parse --month")?,
                None => today,
            };
            let selected = selected
                .map(|s| parse_date(&s))
                .transpose()
                .context("failed to parse --selected")?;
            let availability = Availability::try_from_day_names(available_days.as_slice())
                .context("failed to parse --available-days")?;
            debug!(%today, %month, ?selected, ?availability, allow_past, "building month view");

            let view = build_month_view_with(month, today, selected, |date| {
                if allow_past {
                    !availability.is_available(date)
                } else {
                    availability.is_disabled(date, today)
                }
            });
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render::month_view(&view, selected));
            }
        }
        Command::Label { epoch } => {
            println!("{}", epoch_to_time_label(epoch));
        }
    }
    Ok(())
}

/// Today's calendar date in `tz`, or in the machine's local zone.
fn current_date(tz: Option<&str>) -> Result<NaiveDate> {
    match tz {
        Some(name) => {
            let tz: Tz = name
                .parse()
                .map_err(|_| anyhow!("Invalid timezone: {name}"))?;
            Ok(Utc::now().with_timezone(&tz).date_naive())
        }
        None => Ok(Local::now().date_naive()),
    }
}
