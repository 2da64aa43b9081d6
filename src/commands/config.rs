use anyhow::Result;
use clubcal_core::Clubcal;
use clubcal_core::config::ClubcalConfig;
use owo_colors::OwoColorize;

pub fn run(data_file: Option<String>) -> Result<()> {
    let config_path = ClubcalConfig::config_path()?;
    let mut clubcal = Clubcal::load()?;

    if let Some(path) = data_file {
        clubcal.set_data_file(path.into())?;
        println!(
            "{}",
            format!("Events file set to {}", clubcal.display_path().display()).green()
        );
        return Ok(());
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", clubcal.data_path().display());

    Ok(())
}
