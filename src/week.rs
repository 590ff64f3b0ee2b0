use crate::model::CURRENT_WEEK_LABEL;
use chrono::{Duration, Local, NaiveDate};

/// Date formats a week-ending label may use, tried in this literal order.
/// All three are numeric-only, so day/month values of 12 or less are
/// ambiguous; no locale disambiguation is attempted.
const WEEK_ENDING_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d.%m.%Y", "%d-%m-%Y"];

/// Whether a week-ending label covers today.
///
/// The work week runs Saturday to Friday, so a label is current when today
/// falls inside the seven days ending on the label's date, inclusive. The
/// sentinel label is always current, and anything unparseable is not.
pub fn is_current_week(week_ending: &str) -> bool {
    is_current_week_on(week_ending, Local::now().date_naive())
}

/// Classification against an explicit "today", for callers and tests that
/// pin the clock
pub fn is_current_week_on(week_ending: &str, today: NaiveDate) -> bool {
    if week_ending == CURRENT_WEEK_LABEL {
        return true;
    }

    let Some(end) = parse_week_ending(week_ending) else {
        return false;
    };
    let start = end - Duration::days(6);

    today >= start && today <= end
}

fn parse_week_ending(label: &str) -> Option<NaiveDate> {
    WEEK_ENDING_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(label, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn sentinel_is_always_current() {
        assert!(is_current_week_on(CURRENT_WEEK_LABEL, date(1999, 1, 1)));
        assert!(is_current_week_on(CURRENT_WEEK_LABEL, date(2030, 12, 31)));
    }

    #[test]
    fn inside_the_seven_day_window() {
        // Week ending Friday 2024-02-09 covers Saturday the 3rd onward
        assert!(is_current_week_on("9/2/2024", date(2024, 2, 3)));
        assert!(is_current_week_on("9/2/2024", date(2024, 2, 6)));
        assert!(is_current_week_on("9/2/2024", date(2024, 2, 9)));
    }

    #[test]
    fn outside_the_window() {
        assert!(!is_current_week_on("9/2/2024", date(2024, 2, 2)));
        assert!(!is_current_week_on("9/2/2024", date(2024, 2, 10)));
    }

    #[test]
    fn all_three_delimiters_parse() {
        assert!(is_current_week_on("9/2/2024", date(2024, 2, 9)));
        assert!(is_current_week_on("9.2.2024", date(2024, 2, 9)));
        assert!(is_current_week_on("9-2-2024", date(2024, 2, 9)));
    }

    #[test]
    fn day_first_trial_order() {
        // 03/04/2024 reads as 3 April, never April 3rd of another layout
        assert!(is_current_week_on("03/04/2024", date(2024, 4, 3)));
        assert!(!is_current_week_on("03/04/2024", date(2024, 3, 4)));
    }

    #[test]
    fn unparseable_labels_are_not_current() {
        assert!(!is_current_week_on("next week sometime", date(2024, 2, 9)));
        assert!(!is_current_week_on("99/99/2024", date(2024, 2, 9)));
        assert!(!is_current_week_on("", date(2024, 2, 9)));
    }
}
