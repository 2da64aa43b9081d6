use anyhow::Result;
use clubcal_core::Clubcal;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // We reload Clubcal on each request so external edits to the events
    // file and the config are picked up without a restart
}

impl AppState {
    pub fn new() -> Result<Self> {
        // Verify the config and store can be loaded at startup
        let clubcal = Clubcal::load()?;
        clubcal.store().load()?;
        Ok(AppState {})
    }

    pub fn clubcal(&self) -> Result<Clubcal> {
        Ok(Clubcal::load()?)
    }
}
