//! The club event model.
//!
//! Events travel and persist with camelCase field names and minute-precision
//! naive datetimes (`YYYY-MM-DDTHH:MM`), the format HTML datetime-local
//! inputs produce.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{ClubcalError, ClubcalResult};
use crate::month::Month;

/// A club event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Assigned by the store at creation, immutable afterwards.
    pub id: String,
    pub title: String,
    /// Hosting club.
    pub club: String,
    #[serde(with = "minute_format")]
    pub start_date: NaiveDateTime,
    #[serde(with = "minute_format")]
    pub end_date: NaiveDateTime,
    pub description: String,
    pub venue: String,
    /// CSS hex color for display. Not validated.
    pub color: String,
}

impl Event {
    /// Whether the event starts on the given calendar day.
    pub fn starts_on(&self, day: NaiveDate) -> bool {
        self.start_date.date() == day
    }

    /// Whether the event starts within the given month.
    ///
    /// This is the filter the month-list and print views use: an event
    /// spanning a month boundary shows up only in its start month.
    pub fn starts_in(&self, month: &Month) -> bool {
        month.contains(&self.start_date)
    }

    /// Display form of the time range, e.g. "Mar 4, 3:00 PM - Mar 4, 5:00 PM".
    pub fn render_time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start_date.format("%b %-d, %-I:%M %p"),
            self.end_date.format("%b %-d, %-I:%M %p")
        )
    }
}

/// Creation payload: an event before the store has assigned it an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub club: String,
    #[serde(with = "minute_format")]
    pub start_date: NaiveDateTime,
    #[serde(with = "minute_format")]
    pub end_date: NaiveDateTime,
    pub description: String,
    pub venue: String,
    pub color: String,
}

impl EventDraft {
    /// Required-field check: every field must be non-empty.
    ///
    /// Date ordering is deliberately not checked; a start after the end is
    /// accepted as-is.
    pub fn validate(&self) -> ClubcalResult<()> {
        if self.title.is_empty() {
            return Err(ClubcalError::MissingField("title"));
        }
        if self.club.is_empty() {
            return Err(ClubcalError::MissingField("club"));
        }
        if self.description.is_empty() {
            return Err(ClubcalError::MissingField("description"));
        }
        if self.venue.is_empty() {
            return Err(ClubcalError::MissingField("venue"));
        }
        if self.color.is_empty() {
            return Err(ClubcalError::MissingField("color"));
        }
        Ok(())
    }

    pub(crate) fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            club: self.club,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            venue: self.venue,
            color: self.color,
        }
    }
}

/// Serde (de)serialization for minute-precision datetimes.
///
/// Serializes as `YYYY-MM-DDTHH:MM`; parsing also accepts a trailing seconds
/// component so hand-edited files keep loading.
pub mod minute_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M";
    const FORMAT_WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&s, FORMAT_WITH_SECONDS))
            .map_err(serde::de::Error::custom)
    }
}
