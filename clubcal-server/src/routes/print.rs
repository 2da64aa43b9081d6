//! Print-friendly month view

use axum::{
    Router,
    extract::{Path, State},
    response::Html,
    routing::get,
};
use indoc::formatdoc;

use clubcal_core::{Event, Month};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/print/{month}", get(print_month))
}

/// GET /print/:month - Self-contained printable HTML for one month
async fn print_month(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Html<String>, AppError> {
    let month = Month::parse(&month).map_err(|e| AppError::bad_request(e.to_string()))?;
    let events = state.clubcal()?.store().events_in(&month)?;

    Ok(Html(print_document(&month, &events)))
}

/// Build the printable HTML document for a month's events.
fn print_document(month: &Month, events: &[Event]) -> String {
    let blocks: String = events.iter().map(event_block).collect();

    formatdoc! {r#"
        <html>
          <head>
            <title>Events for {label}</title>
            <style>
              body {{ font-family: Arial, sans-serif; }}
              .event {{ margin-bottom: 10px; padding: 10px; border-radius: 4px; }}
              .club {{ color: #555; }}
              h1 {{ text-align: center; }}
              @media print {{
                body {{ -webkit-print-color-adjust: exact; }}
              }}
            </style>
          </head>
          <body>
            <h1>Events for {label}</h1>
        {blocks}  </body>
        </html>
        "#,
        label = month.label(),
        blocks = blocks,
    }
}

fn event_block(event: &Event) -> String {
    // Tinted background: the event color with a "20" alpha suffix;
    // the solid color on the left border
    formatdoc! {r#"
            <div class="event" style="background-color: {color}20; border-left: 4px solid {color}">
              <h3>{title}</h3>
              <p class="club">{club}</p>
              <p>{time}</p>
              <p>{description}</p>
              <p><strong>Venue:</strong> {venue}</p>
            </div>
        "#,
        color = event.color,
        title = escape_html(&event.title),
        club = escape_html(&event.club),
        time = event.render_time_range(),
        description = escape_html(&event.description),
        venue = escape_html(&event.venue),
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_test_event() -> Event {
        Event {
            id: "1732108800000".to_string(),
            title: "Hack Night".to_string(),
            club: "Coding Club".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 20)
                .unwrap()
                .and_hms_opt(15, 0, 0)
                .unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 20)
                .unwrap()
                .and_hms_opt(17, 0, 0)
                .unwrap(),
            description: "Monthly open hack night".to_string(),
            venue: "Lab 2".to_string(),
            color: "#1e90ff".to_string(),
        }
    }

    #[test]
    fn document_carries_month_heading() {
        let month = Month { year: 2025, month: 3 };
        let html = print_document(&month, &[]);
        assert!(html.contains("<title>Events for March 2025</title>"));
        assert!(html.contains("<h1>Events for March 2025</h1>"));
    }

    #[test]
    fn event_block_renders_fields_and_colors() {
        let month = Month { year: 2025, month: 3 };
        let html = print_document(&month, &[make_test_event()]);
        assert!(html.contains("<h3>Hack Night</h3>"));
        assert!(html.contains("Coding Club"));
        assert!(html.contains("Mar 20, 3:00 PM - Mar 20, 5:00 PM"));
        assert!(html.contains("<strong>Venue:</strong> Lab 2"));
        assert!(html.contains("background-color: #1e90ff20"));
        assert!(html.contains("border-left: 4px solid #1e90ff"));
    }

    #[test]
    fn text_fields_are_escaped() {
        let month = Month { year: 2025, month: 3 };
        let mut event = make_test_event();
        event.title = "<script>alert(1)</script>".to_string();
        let html = print_document(&month, &[event]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
