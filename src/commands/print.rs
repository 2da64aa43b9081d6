use anyhow::Result;
use clubcal_core::{Clubcal, Month};

/// Plain month listing with no colors, suitable for piping to a printer
/// or a file.
pub fn run(month: &Month) -> Result<()> {
    let clubcal = Clubcal::load()?;
    let events = clubcal.store().events_in(month)?;

    println!("Events for {}", month.label());
    println!();

    if events.is_empty() {
        println!("No events this month");
        return Ok(());
    }

    for event in &events {
        println!("{}", event.title);
        println!("  {}", event.club);
        println!("  {}", event.render_time_range());
        println!("  {}", event.description);
        println!("  Venue: {}", event.venue);
        println!();
    }

    Ok(())
}
