use anyhow::Result;
use chrono::NaiveDate;
use clubcal_core::{Clubcal, Month};
use owo_colors::OwoColorize;

pub fn run(month: &Month, json: bool) -> Result<()> {
    let clubcal = Clubcal::load()?;
    let events = clubcal.store().events_in(month)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    println!("{}", format!("Events for {}", month.label()).bold());
    println!();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group events by day and print
    let mut current_date: Option<NaiveDate> = None;

    for event in &events {
        let date = event.start_date.date();

        if current_date != Some(date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(date).bold());
            current_date = Some(date);
        }

        let time = format!("{:>7}", event.start_date.format("%H:%M"));
        let club_tag = format!("[{}]", event.club);
        println!("  {} {} {}", time, event.title, club_tag.dimmed());
    }

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Mar 4")
fn format_date_label(date: NaiveDate) -> String {
    let today = chrono::Local::now().date_naive();

    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}
