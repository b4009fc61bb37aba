use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Renders timestamps in the bot's display timezone.
pub struct TimezoneService {
    tz: Tz,
}

impl TimezoneService {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// e.g. `Mon 05 Jan 2026, 3:04 PM (15:04) UTC`
    pub fn format(&self, when: DateTime<Utc>) -> String {
        let local = when.with_timezone(&self.tz);

        let twelve_hour = local.format("%I:%M %p").to_string();
        // Drop the leading zero so it reads "3:04 PM" rather than "03:04 PM"
        let twelve_hour = match twelve_hour.strip_prefix('0') {
            Some(stripped) => stripped.to_string(),
            None => twelve_hour,
        };

        format!(
            "{}, {} ({}) {}",
            local.format("%a %d %b %Y"),
            twelve_hour,
            local.format("%H:%M"),
            local.format("%Z")
        )
    }

    pub fn now(&self) -> String {
        self.format(Utc::now())
    }
}

impl Default for TimezoneService {
    fn default() -> Self {
        Self::new(chrono_tz::UTC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_utc() {
        let service = TimezoneService::default();
        let when = Utc.with_ymd_and_hms(2026, 1, 5, 15, 4, 0).unwrap();
        assert_eq!(service.format(when), "Mon 05 Jan 2026, 3:04 PM (15:04) UTC");
    }

    #[test]
    fn test_format_converts_timezone() {
        let service = TimezoneService::new(chrono_tz::Asia::Kolkata);
        let when = Utc.with_ymd_and_hms(2026, 1, 5, 15, 4, 0).unwrap();
        let rendered = service.format(when);
        assert!(rendered.contains("8:34 PM (20:34)"));
        assert!(rendered.contains("IST"));
    }
}
