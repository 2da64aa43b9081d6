use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime, Utc};
use clubcal_core::{Clubcal, EventDraft};
use dialoguer::Input;
use owo_colors::OwoColorize;

/// Palette used when no color is given, keyed off the creation time.
const DEFAULT_COLORS: [&str; 6] = [
    "#1e90ff", "#2ecc71", "#e67e22", "#9b59b6", "#e74c3c", "#16a085",
];

pub fn run(
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    duration: Option<String>,
    club: Option<String>,
    venue: Option<String>,
    description: Option<String>,
    color: Option<String>,
) -> Result<()> {
    let interactive = title.is_none()
        || start.is_none()
        || club.is_none()
        || venue.is_none()
        || description.is_none();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Club ---
    let club = match club {
        Some(c) => c,
        None => Input::<String>::new()
            .with_prompt("  Club")
            .interact_text()?,
    };

    // --- Start ---
    let start_time = if let Some(s) = start {
        parse_datetime(&s)?
    } else {
        prompt_with_retry("  When?", parse_datetime)?
    };

    // --- Duration / End ---
    let end_time = if let Some(end_input) = end {
        parse_datetime(&end_input)?
    } else if let Some(dur_input) = duration {
        apply_duration(start_time, &dur_input)?
    } else if interactive {
        prompt_duration(start_time)?
    } else {
        default_end(start_time)
    };

    // --- Venue ---
    let venue = match venue {
        Some(v) => v,
        None => Input::<String>::new()
            .with_prompt("  Where?")
            .interact_text()?,
    };

    // --- Description ---
    let description = match description {
        Some(d) => d,
        None => Input::<String>::new()
            .with_prompt("  Description")
            .interact_text()?,
    };

    // --- Color ---
    let color = color.unwrap_or_else(default_color);

    let draft = EventDraft {
        title,
        club,
        start_date: start_time,
        end_date: end_time,
        description,
        venue,
        color,
    };

    let clubcal = Clubcal::load()?;
    let event = clubcal.store().add(draft)?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!("  Created: {} ({})", event.title, event.id).green()
    );

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<F>(prompt: &str, parse: F) -> Result<NaiveDateTime>
where
    F: Fn(&str) -> Result<NaiveDateTime>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt for duration/end with retry on parse errors.
fn prompt_duration(start: NaiveDateTime) -> Result<NaiveDateTime> {
    loop {
        let input: String = Input::new()
            .with_prompt("  How long? (1 hour)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.is_empty() {
            return Ok(default_end(start));
        }
        match parse_end(&input, start) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    let mut result = String::new();
    let lower = input.to_lowercase();

    for (i, word) in lower.split_whitespace().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let expanded = abbrevs
            .iter()
            .find(|(abbr, _)| *abbr == word)
            .map(|(_, full)| *full)
            .unwrap_or(word);
        result.push_str(expanded);
    }

    result
}

/// Parse a date/time string: the datetime-local form first, then natural
/// language via fuzzydate. Date-only input lands at midnight.
fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M") {
        return Ok(dt);
    }

    let expanded = expand_abbreviations(input);
    fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date/time: \"{}\"", input))
}

/// Parse an end input — tries duration first (humantime), then date/time.
fn parse_end(input: &str, start: NaiveDateTime) -> Result<NaiveDateTime> {
    // Try as duration first
    if let Ok(end) = try_apply_duration(start, input) {
        return Ok(end);
    }

    // Strip "until"/"to" prefix and parse as datetime
    let cleaned = input
        .strip_prefix("until ")
        .or_else(|| input.strip_prefix("to "))
        .unwrap_or(input);

    parse_datetime(cleaned)
}

/// Apply a duration string to the start time.
fn apply_duration(start: NaiveDateTime, dur_input: &str) -> Result<NaiveDateTime> {
    try_apply_duration(start, dur_input)
        .with_context(|| format!("Could not parse duration: \"{}\"", dur_input))
}

fn try_apply_duration(start: NaiveDateTime, dur_input: &str) -> Result<NaiveDateTime> {
    let std_dur = humantime::parse_duration(dur_input).map_err(|e| anyhow::anyhow!("{}", e))?;
    let chrono_dur = Duration::from_std(std_dur).context("Duration too large")?;
    Ok(start + chrono_dur)
}

/// Default end time: one hour after start.
fn default_end(start: NaiveDateTime) -> NaiveDateTime {
    start + Duration::hours(1)
}

/// Pick a default color from the palette, keyed off the current time.
fn default_color() -> String {
    let index = Utc::now().timestamp_millis() as usize % DEFAULT_COLORS.len();
    DEFAULT_COLORS[index].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    // --- expand_abbreviations ---

    #[test]
    fn expand_day_abbreviations() {
        assert_eq!(expand_abbreviations("sat 3pm"), "saturday 3pm");
        assert_eq!(expand_abbreviations("fri 9am"), "friday 9am");
        assert_eq!(expand_abbreviations("mon"), "monday");
        assert_eq!(expand_abbreviations("tues 10am"), "tuesday 10am");
    }

    #[test]
    fn expand_month_abbreviations() {
        assert_eq!(expand_abbreviations("jan 20"), "january 20");
        assert_eq!(expand_abbreviations("sep 5 3pm"), "september 5 3pm");
        assert_eq!(expand_abbreviations("sept 5"), "september 5");
    }

    #[test]
    fn expand_preserves_non_abbreviations() {
        assert_eq!(expand_abbreviations("tomorrow 6pm"), "tomorrow 6pm");
        assert_eq!(expand_abbreviations("next friday"), "next friday");
    }

    // --- parse_datetime ---

    #[test]
    fn parse_datetime_local_form() {
        let dt = parse_datetime("2025-03-20T15:00").unwrap();
        assert_eq!(
            dt,
            NaiveDate::from_ymd_opt(2025, 3, 20)
                .unwrap()
                .and_hms_opt(15, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn parse_datetime_natural_language() {
        let dt = parse_datetime("march 20").unwrap();
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.day(), 20);
    }

    #[test]
    fn parse_datetime_abbreviation_works() {
        assert!(parse_datetime("sat 3pm").is_ok());
    }

    #[test]
    fn parse_datetime_invalid_input() {
        assert!(parse_datetime("not a date at all xyz").is_err());
    }

    // --- durations ---

    #[test]
    fn apply_duration_minutes() {
        let start = NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        let end = try_apply_duration(start, "30m").unwrap();
        assert_eq!(
            end,
            NaiveDate::from_ymd_opt(2026, 3, 20)
                .unwrap()
                .and_hms_opt(15, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn apply_duration_hours() {
        let start = NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let end = try_apply_duration(start, "2hours").unwrap();
        assert_eq!(
            end,
            NaiveDate::from_ymd_opt(2026, 3, 20)
                .unwrap()
                .and_hms_opt(16, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn default_end_adds_one_hour() {
        let start = NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        let end = default_end(start);
        assert_eq!(
            end,
            NaiveDate::from_ymd_opt(2026, 3, 21)
                .unwrap()
                .and_hms_opt(0, 30, 0)
                .unwrap()
        );
    }

    // --- parse_end ---

    #[test]
    fn parse_end_duration_string() {
        let start = NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        let end = parse_end("45m", start).unwrap();
        assert_eq!(end, start + Duration::minutes(45));
    }

    #[test]
    fn parse_end_until_datetime() {
        let start = NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        let end = parse_end("until 2026-03-20T17:00", start).unwrap();
        assert_eq!(end, start + Duration::hours(2));
    }

    // --- default_color ---

    #[test]
    fn default_color_comes_from_palette() {
        assert!(DEFAULT_COLORS.contains(&default_color().as_str()));
    }
}
