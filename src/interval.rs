//! Review interval schedule.
//!
//! Each stage maps to a number of days until the next review. The first two
//! intervals are 1 and 2 days; every later one is the sum of the two before
//! it. Stages past the end of the table are capped at [`MAX_REVIEW_INTERVAL`].

/// Number of generated entries in the schedule table.
pub const SCHEDULE_LEN: usize = 14;

/// Four years between reviews is the ceiling for very mature tasks.
pub const MAX_REVIEW_INTERVAL: i64 = 365 * 4;

const SCHEDULE: [i64; SCHEDULE_LEN] = build_schedule();

const fn build_schedule() -> [i64; SCHEDULE_LEN] {
    let mut table = [0; SCHEDULE_LEN];
    table[0] = 1;
    table[1] = 2;
    let mut i = 2;
    while i < SCHEDULE_LEN {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
}

/// The full stage -> days table.
pub fn schedule_table() -> &'static [i64] {
    &SCHEDULE
}

/// Days until the next review for a task at `stage`.
pub fn interval_for(stage: u32) -> i64 {
    SCHEDULE.get(stage as usize).copied().unwrap_or(MAX_REVIEW_INTERVAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_seeds() {
        assert_eq!(interval_for(0), 1);
        assert_eq!(interval_for(1), 2);
    }

    #[test]
    fn test_schedule_grows_as_sum_of_previous_two() {
        let table = schedule_table();
        assert_eq!(table.len(), SCHEDULE_LEN);
        for s in 2..table.len() {
            assert_eq!(table[s], table[s - 1] + table[s - 2], "stage {}", s);
        }
    }

    #[test]
    fn test_schedule_known_values() {
        assert_eq!(schedule_table(), &[1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610]);
    }

    #[test]
    fn test_stage_at_table_length_is_capped() {
        assert_eq!(interval_for(SCHEDULE_LEN as u32), MAX_REVIEW_INTERVAL);
    }

    #[test]
    fn test_stages_beyond_table_are_capped() {
        for stage in [15, 20, 100, u32::MAX] {
            assert_eq!(interval_for(stage), MAX_REVIEW_INTERVAL);
        }
    }

    #[test]
    fn test_table_stays_under_cap() {
        assert!(schedule_table().iter().all(|&d| d < MAX_REVIEW_INTERVAL));
    }
}
