use chrono::NaiveDate;

/// Linear schedule progress (0 to 100) of `today` between `start` and `target`.
/// - before start = 0
/// - after target = 100
/// - start == target (or target before start, once started) = 100
pub fn schedule_progress(start: NaiveDate, target: NaiveDate, today: NaiveDate) -> u8 {
    if today < start {
        return 0;
    }
    if today > target {
        return 100;
    }

    let total = target.signed_duration_since(start).num_days();
    if total <= 0 {
        return 100;
    }

    let elapsed = today.signed_duration_since(start).num_days();
    ((elapsed as f64 / total as f64) * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Same as [`schedule_progress`] over ISO `YYYY-MM-DD` strings. Unparsable
/// dates count as not started.
pub fn schedule_progress_from_str(start: &str, target: &str, today: NaiveDate) -> u8 {
    match (parse_iso_date(start), parse_iso_date(target)) {
        (Some(start), Some(target)) => schedule_progress(start, target, today),
        _ => 0,
    }
}

pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Share of completed items, rounded to a whole percent. Empty = 0.
pub fn completion_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        parse_iso_date(raw).expect("valid date")
    }

    #[test]
    fn zero_before_start_and_hundred_after_target() {
        let start = date("2025-01-15");
        let target = date("2025-04-30");

        assert_eq!(schedule_progress(start, target, date("2025-01-01")), 0);
        assert_eq!(schedule_progress(start, target, start), 0);
        assert_eq!(schedule_progress(start, target, target), 100);
        assert_eq!(schedule_progress(start, target, date("2025-06-01")), 100);
    }

    #[test]
    fn interpolates_linearly_and_rounds() {
        let start = date("2025-01-01");
        let target = date("2025-01-11");

        assert_eq!(schedule_progress(start, target, date("2025-01-06")), 50);
        // 1/3 of a 3-day window
        assert_eq!(
            schedule_progress(start, date("2025-01-04"), date("2025-01-02")),
            33
        );
    }

    #[test]
    fn equal_dates_clamp_to_hundred() {
        let day = date("2025-03-01");
        assert_eq!(schedule_progress(day, day, day), 100);
        assert_eq!(schedule_progress(day, day, date("2025-02-28")), 0);
    }

    #[test]
    fn target_before_start_is_tolerated() {
        let start = date("2025-03-01");
        let target = date("2025-02-01");

        assert_eq!(schedule_progress(start, target, date("2025-01-01")), 0);
        assert_eq!(schedule_progress(start, target, date("2025-03-02")), 100);
    }

    #[test]
    fn monotonic_and_bounded_across_the_window() {
        let start = date("2025-01-15");
        let target = date("2025-04-30");
        let mut previous = 0;
        let mut day = date("2025-01-01");

        while day <= date("2025-05-15") {
            let value = schedule_progress(start, target, day);
            assert!(value <= 100);
            assert!(value >= previous);
            previous = value;
            day = day.succ_opt().unwrap();
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn unparsable_dates_count_as_not_started() {
        assert_eq!(schedule_progress_from_str("soon", "2025-04-30", date("2025-03-01")), 0);
    }

    #[test]
    fn completion_percent_rounds_and_handles_empty() {
        assert_eq!(completion_percent(2, 6), 33);
        assert_eq!(completion_percent(1, 6), 17);
        assert_eq!(completion_percent(0, 0), 0);
        assert_eq!(completion_percent(3, 3), 100);
    }
}
