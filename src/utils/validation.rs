//! Input validation utilities

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime, Utc};
use regex::Regex;
use validator::ValidationError;

static WEBSITE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(https://www\.|http://www\.|https://|http://)?[a-zA-Z0-9]{2,}(\.[a-zA-Z0-9]{2,})(\.[a-zA-Z0-9]{2,})?",
    )
    .expect("website URL regex must compile")
});

/// Validate website URL shape (scheme optional, domain required)
pub fn validate_website_url(url: &str) -> Result<(), ValidationError> {
    if WEBSITE_URL_RE.is_match(url) {
        Ok(())
    } else {
        let mut err = ValidationError::new("website_url");
        err.message = Some("'websiteUrl' must be a valid website address.".into());
        Err(err)
    }
}

/// Check whether a reservation date lies in the past
pub fn date_in_past(date: NaiveDate) -> bool {
    date < Utc::now().date_naive()
}

/// Check whether a reservation time lies in the past.
///
/// Only constrains the time of day when the date is today; future dates
/// accept any time, past dates are handled by the date rule.
pub fn time_in_past(date: NaiveDate, time: NaiveTime) -> bool {
    let now = Utc::now();
    date == now.date_naive() && time < now.time()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_validate_website_url() {
        assert!(validate_website_url("https://www.example.com").is_ok());
        assert!(validate_website_url("http://example.co.uk").is_ok());
        assert!(validate_website_url("example.com").is_ok());
        assert!(validate_website_url("").is_err());
        assert!(validate_website_url("!!!").is_err());
    }

    #[test]
    fn test_date_in_past() {
        let today = Utc::now().date_naive();
        assert!(date_in_past(today - Duration::days(1)));
        assert!(!date_in_past(today));
        assert!(!date_in_past(today + Duration::days(1)));
    }

    #[test]
    fn test_time_on_future_date_is_never_past() {
        let tomorrow = Utc::now().date_naive() + Duration::days(1);
        assert!(!time_in_past(tomorrow, NaiveTime::from_hms_opt(0, 0, 1).unwrap()));
    }

    #[test]
    fn test_time_earlier_today_is_past() {
        let now = Utc::now();
        let earlier = now - Duration::hours(1);
        // Crossing midnight would move the date; skip the edge hour
        if earlier.date_naive() == now.date_naive() {
            assert!(time_in_past(now.date_naive(), earlier.time()));
        }
    }
}
