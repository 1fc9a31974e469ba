//! Alternating-day dose calculation.
//!
//! Day 0 (the anchor) and every even day after it is a full tablet, odd days
//! are a half tablet. Arithmetic is done on calendar dates only; the caller
//! resolves "today" in the configured timezone via [`local_date`].

use chrono::NaiveDate;
use chrono_tz::Tz;
use reminder_traits::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dose {
    /// Today precedes the anchor date.
    NotStarted,
    Full,
    Half,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoseSchedule {
    anchor: NaiveDate,
}

impl DoseSchedule {
    pub fn new(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Whole days from the anchor to `today`; negative before the anchor.
    pub fn days_since_anchor(&self, today: NaiveDate) -> i64 {
        today.signed_duration_since(self.anchor).num_days()
    }

    pub fn dose_on(&self, today: NaiveDate) -> Dose {
        let delta = self.days_since_anchor(today);
        if delta < 0 {
            Dose::NotStarted
        } else if delta % 2 == 0 {
            Dose::Full
        } else {
            Dose::Half
        }
    }
}

/// Calendar date of `clock.now()` in `tz`.
pub fn local_date(clock: &impl Clock, tz: Tz) -> NaiveDate {
    clock.now().with_timezone(&tz).date_naive()
}

/// Display text for each dose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoseLabels {
    pub not_started: String,
    pub full: String,
    pub half: String,
}

impl DoseLabels {
    pub fn label(&self, dose: Dose) -> &str {
        match dose {
            Dose::NotStarted => &self.not_started,
            Dose::Full => &self.full,
            Dose::Half => &self.half,
        }
    }
}

impl Default for DoseLabels {
    fn default() -> Self {
        (&reminder_config::DoseCfg::default()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use reminder_traits::FixedClock;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn days_since_anchor_is_signed() {
        let s = DoseSchedule::new(d(2026, 2, 12));
        assert_eq!(s.days_since_anchor(d(2026, 2, 12)), 0);
        assert_eq!(s.days_since_anchor(d(2026, 2, 11)), -1);
        assert_eq!(s.days_since_anchor(d(2026, 3, 12)), 28);
    }

    #[test]
    fn local_date_crosses_midnight_in_zone() {
        // 16:30 UTC is 00:30 next day in UTC+8.
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 2, 12, 16, 30, 0).unwrap());
        assert_eq!(local_date(&clock, chrono_tz::Asia::Shanghai), d(2026, 2, 13));
        assert_eq!(local_date(&clock, chrono_tz::UTC), d(2026, 2, 12));
    }

    #[test]
    fn labels_default_to_builtin_text() {
        let l = DoseLabels::default();
        assert_eq!(l.label(Dose::Full), "💊 1 片 (整片)");
        assert_eq!(l.label(Dose::Half), "🔪 0.5 片 (半片)");
        assert_eq!(l.label(Dose::NotStarted), "⏳ 尚未开始");
    }
}
