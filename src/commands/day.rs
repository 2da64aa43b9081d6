use anyhow::Result;
use chrono::NaiveDate;
use clubcal_core::Clubcal;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(day: NaiveDate) -> Result<()> {
    let clubcal = Clubcal::load()?;
    let events = clubcal.store().events_on(day)?;

    println!(
        "{}",
        format!("Events for {}", day.format("%B %-d, %Y")).bold()
    );
    println!();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for (i, event) in events.iter().enumerate() {
        println!("{}", event.render());

        // Add spacing between events (but not after the last one)
        if i < events.len() - 1 {
            println!();
        }
    }

    Ok(())
}
