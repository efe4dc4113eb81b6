//! `agenda` CLI -- query the appointment agenda from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Slots for the default production window
//! agenda slots
//!
//! # Override any of the window/cadence inputs
//! agenda slots --start 08:00 --end 12:00 --duration 30 --buffer 0
//!
//! # Is a date bookable?
//! agenda is-working-day 2025-11-12
//!
//! # Clamp a date to the rollout start / show the default calendar anchor
//! agenda clamp 2025-01-01
//! agenda anchor
//!
//! # Month view, next bookable day, and a day's open slots
//! agenda month 2025 11
//! agenda next-working-day 2025-11-14
//! agenda availability 2025-11-12 --booked 14:00,16:30
//!
//! # Per-professional schedules from a config file
//! agenda --config agenda.json --professional eduardo-faveret slots
//! ```
//!
//! Set `RUST_LOG=agenda_core=debug` to see what the core computes.

use agenda_core::{
    CalendarCell, ScheduleDirectory, SchedulingConfig, SlotRequest, TimeSlot, WallTime,
    WeekdayName,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

#[derive(Parser)]
#[command(
    name = "agenda",
    version,
    about = "Appointment agenda: slots, working days and calendar grid"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Scheduling config JSON file (built-in production defaults if omitted)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Use this professional's schedule (falls back to the default)
    #[arg(short, long, global = true)]
    professional: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List appointment start times
    Slots {
        /// Window start (HH:MM)
        #[arg(long)]
        start: Option<String>,
        /// Window end (HH:MM)
        #[arg(long)]
        end: Option<String>,
        /// Appointment duration in minutes
        #[arg(long, allow_hyphen_values = true)]
        duration: Option<i64>,
        /// Idle minutes between appointments
        #[arg(long, allow_hyphen_values = true)]
        buffer: Option<i64>,
        /// Print a JSON array instead of one slot per line
        #[arg(long)]
        json: bool,
    },
    /// Print whether a date (YYYY-MM-DD) is a bookable weekday
    IsWorkingDay { date: String },
    /// Clamp a date (YYYY-MM-DD) to the scheduling start date
    Clamp { date: String },
    /// Print max(today, start date)
    Anchor {
        /// Use this RFC 3339 instant instead of the system clock
        #[arg(long)]
        now: Option<String>,
    },
    /// Render a month calendar; bookable days are marked with '*'
    Month {
        year: i32,
        month: u32,
        /// Date to highlight as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
        /// Print the grid cells as JSON
        #[arg(long)]
        json: bool,
    },
    /// First bookable day on or after a date (defaults to the anchor)
    NextWorkingDay { date: Option<String> },
    /// Slots of a date with already-booked times marked
    Availability {
        date: String,
        /// Comma-separated booked times (HH:MM or HH:MM:SS)
        #[arg(long)]
        booked: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective scheduling config as JSON
    ShowConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let directory = load_directory(cli.config.as_deref())?;
    let config = directory.resolve(cli.professional.as_deref());
    if let Some(id) = cli.professional.as_deref() {
        if !directory.professionals.contains_key(id) {
            tracing::warn!(professional = %id, "No schedule for professional, using default");
        }
    }

    match cli.command {
        Commands::Slots {
            start,
            end,
            duration,
            buffer,
            json,
        } => {
            let request = build_slot_request(config, start, end, duration, buffer)?;
            print_slots(&request.generate(), json)?;
        }
        Commands::IsWorkingDay { date } => {
            let date = parse_date(&date)?;
            println!("{}", agenda_core::is_working_day(config, date));
        }
        Commands::Clamp { date } => {
            let date = parse_date(&date)?;
            println!("{}", agenda_core::clamp_to_start_date(config, date));
        }
        Commands::Anchor { now } => {
            let now = parse_now(now.as_deref())?;
            println!("{}", agenda_core::current_anchor(config, now));
        }
        Commands::Month {
            year,
            month,
            today,
            json,
        } => {
            let today = match today {
                Some(s) => parse_date(&s)?,
                None => agenda_core::local_today(config, Utc::now()),
            };
            let cells = agenda_core::month_grid(config, year, month, today)
                .context("Failed to build month grid")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&cells)?);
            } else {
                print!("{}", render_month(year, month, &cells));
            }
        }
        Commands::NextWorkingDay { date } => {
            let from = match date {
                Some(s) => parse_date(&s)?,
                None => agenda_core::current_anchor_now(config),
            };
            match agenda_core::next_working_day(config, from) {
                Some(day) => println!("{} ({})", day, agenda_core::weekday_name(day)),
                None => anyhow::bail!("No working day within two weeks of {}", from),
            }
        }
        Commands::Availability { date, booked, json } => {
            let date = parse_date(&date)?;
            let booked = split_list(booked.as_deref());
            let day = agenda_core::day_availability(config, date, &booked);
            if json {
                println!("{}", serde_json::to_string_pretty(&day)?);
            } else if day.before_start {
                println!("{}: before scheduling start {}", day.date, config.start_date);
            } else if !day.working_day {
                println!("{} ({}): not a working day", day.date, day.weekday);
            } else {
                for slot in &day.slots {
                    let status = if slot.booked { "booked" } else { "open" };
                    println!("{}  {}", slot.time, status);
                }
            }
        }
        Commands::ShowConfig => {
            println!("{}", config.to_json()?);
        }
    }

    Ok(())
}

fn load_directory(path: Option<&str>) -> Result<ScheduleDirectory> {
    match path {
        Some(path) => ScheduleDirectory::load(path)
            .with_context(|| format!("Failed to load config: {}", path)),
        None => Ok(ScheduleDirectory::default()),
    }
}

/// Seed a request from the config and apply whichever flags were given.
fn build_slot_request(
    config: &SchedulingConfig,
    start: Option<String>,
    end: Option<String>,
    duration: Option<i64>,
    buffer: Option<i64>,
) -> Result<SlotRequest> {
    let mut request = SlotRequest::from_config(config);
    if let Some(start) = start {
        request = request.start(WallTime::parse(&start).context("Invalid --start")?);
    }
    if let Some(end) = end {
        request = request.end(WallTime::parse(&end).context("Invalid --end")?);
    }
    if let Some(minutes) = duration {
        request = request.appointment_minutes(minutes);
    }
    if let Some(minutes) = buffer {
        request = request.buffer_minutes(minutes);
    }
    Ok(request)
}

fn print_slots(slots: &[TimeSlot], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(slots)?);
    } else {
        for slot in slots {
            println!("{}", slot);
        }
    }
    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("Invalid --now '{}', expected RFC 3339", s))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

/// `"14:00, 15:15,"` → `["14:00", "15:15"]`.
fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Text month view, one week per line. Days outside the month are blank,
/// bookable days carry a `*` and today is wrapped in brackets.
fn render_month(year: i32, month: u32, cells: &[CalendarCell]) -> String {
    let name = MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    let mut out = format!("{} {}\n", name, year);

    let header: Vec<String> = WeekdayName::ALL
        .iter()
        .map(|day| format!("{:>5}", day.short_label()))
        .collect();
    out.push_str(header.join("").trim_end());
    out.push('\n');

    for week in cells.chunks(7) {
        let line: String = week.iter().map(render_cell).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn render_cell(cell: &CalendarCell) -> String {
    if !cell.in_current_month {
        return " ".repeat(5);
    }
    let day = cell.date.day();
    let mark = if cell.bookable { '*' } else { ' ' };
    if cell.is_today {
        format!("[{:>2}]{}", day, mark)
    } else {
        format!(" {:>2} {}", day, mark)
    }
}
