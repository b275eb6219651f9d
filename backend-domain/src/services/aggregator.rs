use std::fmt::Display;

use chrono::{DateTime, Datelike, TimeZone};

use crate::entities::{CategoryCount, CategoryTally, DashboardSummary, TrashEvent};
use crate::value_objects::TrackedCategories;

/// Counts `events` per tracked category, all time and for the calendar month
/// of `now`. Month membership is judged in `now`'s time zone.
pub fn summarize<Tz>(
    events: &[TrashEvent],
    categories: &TrackedCategories,
    now: &DateTime<Tz>,
) -> DashboardSummary
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let zone = now.timezone();
    let (year, month) = (now.year(), now.month());

    let mut all_time = TallyBuilder::new(categories.len());
    let mut this_month = TallyBuilder::new(categories.len());

    for event in events {
        let slot = categories.position_of(&event.trash_name);
        all_time.record(slot);

        let local = event.time_stamp.with_timezone(&zone);
        if local.year() == year && local.month() == month {
            this_month.record(slot);
        }
    }

    DashboardSummary {
        all_time: all_time.finish(categories),
        this_month: this_month.finish(categories),
        month_label: now.format("%B").to_string(),
    }
}

struct TallyBuilder {
    total: u64,
    counts: Vec<u64>,
}

impl TallyBuilder {
    fn new(slots: usize) -> Self {
        Self {
            total: 0,
            counts: vec![0; slots],
        }
    }

    fn record(&mut self, slot: Option<usize>) {
        self.total += 1;
        if let Some(index) = slot {
            self.counts[index] += 1;
        }
    }

    fn finish(self, categories: &TrackedCategories) -> CategoryTally {
        CategoryTally {
            total: self.total,
            counts: categories
                .names()
                .iter()
                .zip(self.counts)
                .map(|(category, count)| CategoryCount {
                    category: category.clone(),
                    count,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn event(trash_name: &str, time_stamp: &str) -> TrashEvent {
        TrashEvent {
            trash_id: 1,
            trash_name: trash_name.to_string(),
            bin_id: 1,
            bin_name: "Bin A".to_string(),
            time_stamp: time_stamp.parse().expect("timestamp"),
            correct: true,
        }
    }

    fn now() -> DateTime<Utc> {
        "2026-10-18T12:00:00Z".parse().expect("now")
    }

    #[test]
    fn mixed_months_and_unknown_types() {
        let events = vec![
            event("PET", "2026-10-05T08:00:00Z"),
            event("can", "2026-09-20T08:00:00Z"),
            event("unknown", "2026-10-01T08:00:00Z"),
        ];
        let summary = summarize(&events, &TrackedCategories::default(), &now());

        assert_eq!(summary.all_time.total, 3);
        assert_eq!(summary.all_time.count_of("PET"), Some(1));
        assert_eq!(summary.all_time.count_of("CAN"), Some(1));
        assert_eq!(summary.all_time.count_of("GLASS BOTTLE"), Some(0));

        assert_eq!(summary.this_month.total, 2);
        assert_eq!(summary.this_month.count_of("PET"), Some(1));
        assert_eq!(summary.this_month.count_of("CAN"), Some(0));
        assert_eq!(summary.this_month.count_of("GLASS BOTTLE"), Some(0));
        assert_eq!(summary.month_label, "October");
    }

    #[test]
    fn categorized_sum_never_exceeds_total() {
        let events = vec![
            event("pet", "2026-10-05T08:00:00Z"),
            event("Glass Bottle", "2026-10-05T08:00:00Z"),
            event("paper", "2026-10-05T08:00:00Z"),
        ];
        let summary = summarize(&events, &TrackedCategories::default(), &now());
        assert_eq!(summary.all_time.categorized(), 2);
        assert!(summary.all_time.categorized() < summary.all_time.total);

        let tracked_only = &events[..2];
        let summary = summarize(tracked_only, &TrackedCategories::default(), &now());
        assert_eq!(summary.all_time.categorized(), summary.all_time.total);
    }

    #[test]
    fn month_counts_are_bounded_by_all_time() {
        let events = vec![
            event("PET", "2026-10-05T08:00:00Z"),
            event("PET", "2025-10-05T08:00:00Z"),
            event("CAN", "2026-11-01T08:00:00Z"),
            event("CAN", "2026-10-31T23:00:00Z"),
        ];
        let summary = summarize(&events, &TrackedCategories::default(), &now());
        assert_eq!(summary.this_month.total, 2);
        assert!(summary.this_month.total <= summary.all_time.total);
        for (month, all) in summary
            .this_month
            .counts
            .iter()
            .zip(summary.all_time.counts.iter())
        {
            assert_eq!(month.category, all.category);
            assert!(month.count <= all.count);
        }
    }

    #[test]
    fn month_boundary_follows_evaluation_time_zone() {
        let events = vec![event("PET", "2026-09-30T23:30:00Z")];
        let plus_two = FixedOffset::east_opt(2 * 3600).expect("offset");
        let local_now = now().with_timezone(&plus_two);

        let local = summarize(&events, &TrackedCategories::default(), &local_now);
        assert_eq!(local.this_month.total, 1);

        let utc = summarize(&events, &TrackedCategories::default(), &now());
        assert_eq!(utc.this_month.total, 0);
    }

    #[test]
    fn stored_wall_clock_stays_in_its_month() {
        use chrono::NaiveDateTime;

        use crate::value_objects::DbTimeZone;

        let plus_seven = FixedOffset::east_opt(7 * 3600).expect("offset");
        let stored = NaiveDateTime::parse_from_str("2026-10-31 20:00:00", "%Y-%m-%d %H:%M:%S")
            .expect("stored");
        let now = plus_seven
            .with_ymd_and_hms(2026, 10, 31, 22, 0, 0)
            .single()
            .expect("now");

        let mut read_in_zone = event("PET", "2026-01-01T00:00:00Z");
        read_in_zone.time_stamp = DbTimeZone::Fixed(plus_seven).to_utc(stored);
        let summary = summarize(&[read_in_zone], &TrackedCategories::default(), &now);
        assert_eq!(summary.this_month.total, 1);
        assert_eq!(summary.month_label, "October");

        // Read as UTC, the same row would fall on 1 November local time.
        let mut read_as_utc = event("PET", "2026-01-01T00:00:00Z");
        read_as_utc.time_stamp = stored.and_utc();
        let summary = summarize(&[read_as_utc], &TrackedCategories::default(), &now);
        assert_eq!(summary.this_month.total, 0);
    }

    #[test]
    fn summarizing_twice_gives_identical_results() {
        let events = vec![
            event("PET", "2026-10-05T08:00:00Z"),
            event("CAN", "2026-08-05T08:00:00Z"),
        ];
        let before = events.clone();
        let first = summarize(&events, &TrackedCategories::default(), &now());
        let second = summarize(&events, &TrackedCategories::default(), &now());
        assert_eq!(first, second);
        assert_eq!(events, before);
    }

    #[test]
    fn extra_categories_are_counted() {
        let events = vec![event("Paper", "2026-10-05T08:00:00Z")];
        let categories = TrackedCategories::new(["PET", "CAN", "GLASS BOTTLE", "PAPER"]);
        let summary = summarize(&events, &categories, &now());
        assert_eq!(summary.all_time.count_of("PAPER"), Some(1));
        assert_eq!(summary.all_time.counts.len(), 4);
    }

    #[test]
    fn empty_input_yields_zeroed_counters() {
        let summary = summarize(&[], &TrackedCategories::default(), &now());
        assert_eq!(summary.all_time.total, 0);
        assert_eq!(summary.all_time.counts.len(), 3);
        assert!(summary.all_time.counts.iter().all(|entry| entry.count == 0));
    }
}
