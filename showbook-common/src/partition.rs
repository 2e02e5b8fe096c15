//! Past/upcoming split of a show collection

use chrono::NaiveDateTime;

use crate::time::parse_start_time;

/// Anything carrying a stored start time
pub trait StartTime {
    fn start_time(&self) -> &str;
}

/// Split `shows` into (past, upcoming) relative to `now`
///
/// `shows` must already be sorted ascending by start time. The first entry
/// strictly after `now` starts the upcoming half; nothing behind it is
/// inspected. Entries whose start time cannot be parsed never count as
/// after `now`.
pub fn split_past_upcoming<T: StartTime>(
    mut shows: Vec<T>,
    now: NaiveDateTime,
) -> (Vec<T>, Vec<T>) {
    let split = shows
        .iter()
        .position(|show| is_after(show.start_time(), now))
        .unwrap_or(shows.len());
    let upcoming = shows.split_off(split);
    (shows, upcoming)
}

/// Number of entries in the upcoming half of a sorted collection
pub fn count_upcoming<T: StartTime>(shows: &[T], now: NaiveDateTime) -> usize {
    shows
        .iter()
        .position(|show| is_after(show.start_time(), now))
        .map_or(0, |split| shows.len() - split)
}

fn is_after(start_time: &str, now: NaiveDateTime) -> bool {
    parse_start_time(start_time).is_some_and(|dt| dt > now)
}

impl StartTime for String {
    fn start_time(&self) -> &str {
        self
    }
}

impl StartTime for &str {
    fn start_time(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: &str) -> NaiveDateTime {
        parse_start_time(value).unwrap()
    }

    fn times(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_split_middle() {
        let shows = times(&[
            "2020-01-01 20:00:00",
            "2021-06-01 20:00:00",
            "2030-01-01 20:00:00",
            "2031-01-01 20:00:00",
        ]);
        let (past, upcoming) = split_past_upcoming(shows.clone(), at("2025-01-01 00:00:00"));
        assert_eq!(past, shows[..2]);
        assert_eq!(upcoming, shows[2..]);
    }

    #[test]
    fn test_split_concatenation_preserves_order() {
        let shows = times(&[
            "2020-01-01 20:00:00",
            "2020-01-01 20:00:00",
            "2026-03-01 10:00:00",
            "2029-12-31 23:59:59",
        ]);
        let (mut past, upcoming) =
            split_past_upcoming(shows.clone(), at("2026-03-01 10:00:00"));
        past.extend(upcoming);
        assert_eq!(past, shows);
    }

    #[test]
    fn test_show_at_exactly_now_is_past() {
        let shows = times(&["2026-03-01 10:00:00", "2026-03-01 10:00:01"]);
        let (past, upcoming) = split_past_upcoming(shows, at("2026-03-01 10:00:00"));
        assert_eq!(past, times(&["2026-03-01 10:00:00"]));
        assert_eq!(upcoming, times(&["2026-03-01 10:00:01"]));
    }

    #[test]
    fn test_split_bounds_hold() {
        let now = at("2024-07-04 12:00:00");
        let shows = times(&[
            "2019-05-21 21:30:00",
            "2024-07-04 11:59:59",
            "2024-07-04 12:00:01",
            "2035-04-01 20:00:00",
        ]);
        let (past, upcoming) = split_past_upcoming(shows, now);
        assert!(past.iter().all(|s| at(s) <= now));
        assert!(upcoming.iter().all(|s| at(s) > now));
    }

    #[test]
    fn test_all_past_and_all_upcoming() {
        let shows = times(&["2001-01-01 00:00:00", "2002-01-01 00:00:00"]);
        let (past, upcoming) = split_past_upcoming(shows.clone(), at("2010-01-01 00:00:00"));
        assert_eq!(past.len(), 2);
        assert!(upcoming.is_empty());

        let (past, upcoming) = split_past_upcoming(shows, at("1990-01-01 00:00:00"));
        assert!(past.is_empty());
        assert_eq!(upcoming.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let (past, upcoming) = split_past_upcoming(Vec::<String>::new(), at("2010-01-01"));
        assert!(past.is_empty());
        assert!(upcoming.is_empty());
    }

    #[test]
    fn test_unsorted_input_splits_at_first_future_entry() {
        // Precondition violated: the past entry after the split lands in upcoming.
        let shows = times(&["2030-01-01 00:00:00", "2001-01-01 00:00:00"]);
        let (past, upcoming) = split_past_upcoming(shows, at("2020-01-01 00:00:00"));
        assert!(past.is_empty());
        assert_eq!(upcoming.len(), 2);
    }

    #[test]
    fn test_unparseable_entries_stay_past() {
        let shows = times(&["tbd", "2030-01-01 00:00:00"]);
        let (past, upcoming) = split_past_upcoming(shows, at("2020-01-01 00:00:00"));
        assert_eq!(past, times(&["tbd"]));
        assert_eq!(upcoming.len(), 1);
    }

    #[test]
    fn test_count_upcoming_matches_split() {
        let now = at("2025-01-01 00:00:00");
        let shows = times(&[
            "2020-01-01 20:00:00",
            "2030-01-01 20:00:00",
            "2031-01-01 20:00:00",
        ]);
        assert_eq!(count_upcoming(&shows, now), 2);
        let (_, upcoming) = split_past_upcoming(shows, now);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(count_upcoming::<String>(&[], now), 0);
    }
}
