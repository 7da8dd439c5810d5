//! Record id generation
//!
//! Ids are the creation time in Unix milliseconds, as decimal strings. The
//! generator never hands out the same value twice: when the clock has not
//! moved past the last id it bumps by one instead. This holds only for a
//! single owner; the store takes `&mut self` for every mutation.

use time::OffsetDateTime;

use crate::clock::to_unix_millis;

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for a record created at `now`
    pub fn next(&mut self, now: OffsetDateTime) -> String {
        let millis = to_unix_millis(now);
        let id = match self.last {
            Some(last) if millis <= last => last.saturating_add(1),
            _ => millis,
        };
        self.last = Some(id);
        id.to_string()
    }

    /// Account for an id loaded from storage so later ids sort after it.
    /// Non-numeric ids are ignored.
    pub fn observe(&mut self, id: &str) {
        if let Ok(value) = id.parse::<i64>() {
            self.last = Some(self.last.map_or(value, |last| last.max(value)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use time::macros::datetime;

    #[test]
    fn test_id_is_unix_millis() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next(datetime!(1970-01-01 00:00:02 UTC)), "2000");
    }

    #[test]
    fn test_same_millisecond_ids_are_distinct() {
        let mut ids = IdGenerator::new();
        let now = datetime!(2024-09-01 08:00 UTC);

        let issued: HashSet<String> = (0..100).map(|_| ids.next(now)).collect();

        assert_eq!(issued.len(), 100);
    }

    #[test]
    fn test_clock_going_backwards_still_increases() {
        let mut ids = IdGenerator::new();
        let first: i64 = ids.next(datetime!(2024-09-01 08:00 UTC)).parse().unwrap();
        let second: i64 = ids.next(datetime!(2024-08-01 08:00 UTC)).parse().unwrap();
        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_observed_ids_are_skipped() {
        let mut ids = IdGenerator::new();
        ids.observe("1");
        ids.observe("not-a-number");
        ids.observe("5000");

        assert_eq!(ids.next(datetime!(1970-01-01 00:00:01 UTC)), "5001");
        assert_eq!(ids.next(datetime!(1970-01-01 00:00:10 UTC)), "10000");
    }
}
