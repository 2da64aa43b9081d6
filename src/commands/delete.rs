use anyhow::Result;
use clubcal_core::{Clubcal, ClubcalError};
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(id: &str) -> Result<()> {
    let clubcal = Clubcal::load()?;
    let store = clubcal.store();

    let event = store
        .load()?
        .into_iter()
        .find(|e| e.id == id)
        .ok_or_else(|| ClubcalError::EventNotFound(id.to_string()))?;

    println!("{}", event.render());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("  Delete this event?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "  Cancelled".dimmed());
        return Ok(());
    }

    store.delete(id)?;
    println!("{}", format!("  Deleted: {}", event.title).green());

    Ok(())
}
