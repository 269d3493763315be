use chrono::{DateTime, FixedOffset, Utc};

// Display timezone is fixed (Asia/Karachi, UTC+5, no DST). Decorative only.
const DISPLAY_OFFSET_SECS: i32 = 5 * 3600;
const DISPLAY_ZONE_LABEL: &str = "PKT";

/// Wall clock pinned to the storefront's display timezone.
#[derive(Debug, Clone)]
pub struct DisplayClock {
    offset: FixedOffset,
}

impl DisplayClock {
    pub fn new() -> Self {
        let offset = FixedOffset::east_opt(DISPLAY_OFFSET_SECS)
            .expect("display offset is within +/-24h");
        Self { offset }
    }

    pub fn now_string(&self) -> String {
        self.format(Utc::now().with_timezone(&self.offset))
    }

    fn format(&self, instant: DateTime<FixedOffset>) -> String {
        format!(
            "{} {}",
            instant.format("%m/%d/%Y %I:%M%p"),
            DISPLAY_ZONE_LABEL
        )
    }
}

impl Default for DisplayClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_uses_display_offset() {
        let clock = DisplayClock::new();
        // 2024-03-01 10:30 UTC is 15:30 in UTC+5.
        let utc = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        let formatted = clock.format(utc.with_timezone(&clock.offset));
        assert_eq!(formatted, "03/01/2024 03:30PM PKT");
    }
}
