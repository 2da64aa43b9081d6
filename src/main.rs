mod commands;
mod render;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use clubcal_core::Month;
use clubcal_core::month::parse_day;

#[derive(Parser)]
#[command(name = "clubcal")]
#[command(about = "Browse and manage your club events from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly event list
    List {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Emit the raw event list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Events on a single day
    Day {
        /// Day to show (YYYY-MM-DD, defaults to today)
        date: Option<String>,
    },
    /// Create a new event
    New {
        title: Option<String>,

        /// Start date/time (e.g. "tomorrow 6pm", "2025-03-20T15:00")
        #[arg(short, long)]
        start: Option<String>,

        /// End date/time
        #[arg(short, long)]
        end: Option<String>,

        /// Duration instead of an end time (e.g. "90m", "2hours")
        #[arg(short, long)]
        duration: Option<String>,

        /// Hosting club
        #[arg(short, long)]
        club: Option<String>,

        /// Venue
        #[arg(short, long)]
        venue: Option<String>,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Display color (CSS hex, e.g. "#1e90ff")
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete an event by id
    Delete { id: String },
    /// Printable month listing (plain text, no colors)
    Print {
        /// Month to print (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Show or change configuration
    Config {
        /// Move the events database to this file
        #[arg(long)]
        data_file: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { month, json } => {
            let month = resolve_month(month.as_deref())?;
            commands::list::run(&month, json)
        }
        Commands::Day { date } => {
            let day = resolve_day(date.as_deref())?;
            commands::day::run(day)
        }
        Commands::New {
            title,
            start,
            end,
            duration,
            club,
            venue,
            description,
            color,
        } => commands::new::run(title, start, end, duration, club, venue, description, color),
        Commands::Delete { id } => commands::delete::run(&id),
        Commands::Print { month } => {
            let month = resolve_month(month.as_deref())?;
            commands::print::run(&month)
        }
        Commands::Config { data_file } => commands::config::run(data_file),
    }
}

fn resolve_month(arg: Option<&str>) -> Result<Month> {
    match arg {
        Some(s) => Ok(Month::parse(s)?),
        None => Ok(Month::current()),
    }
}

fn resolve_day(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => Ok(parse_day(s)?),
        None => Ok(Local::now().date_naive()),
    }
}
