//! Collision avoidance for overloaded review days.

use chrono::NaiveDate;
use log::debug;

use super::SchedulerConfig;
use crate::calendar::CalendarIndex;

/// Pull `date` earlier one day at a time while more than `max_tasks` are
/// already due on it.
///
/// Tasks at or below the low-stage guard come back often anyway, so they keep
/// their date. There is no lower bound: in a pathological calendar the date
/// can end up in the past. The loop still terminates because the calendar is
/// finite, and it stops at [`NaiveDate::MIN`].
pub fn resolve_collision(date: NaiveDate, stage: u32, calendar: &CalendarIndex, config: &SchedulerConfig) -> NaiveDate {
    if stage <= config.low_stage_guard {
        return date;
    }

    let mut date = date;
    while calendar.count_on(date) > config.max_tasks {
        let Some(earlier) = date.pred_opt() else {
            break;
        };
        debug!(
            "{} has {} tasks (max {}), trying {}",
            date,
            calendar.count_on(date),
            config.max_tasks,
            earlier
        );
        date = earlier;
    }
    date
}
