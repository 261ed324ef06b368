//! Date arithmetic behind [`compute_milestones`].

use chrono::offset::LocalResult;
use chrono::{
    DateTime, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};
use tracing::debug;

use super::special::is_special_day_count;
use super::{Milestone, MilestoneCategory, MilestonesData};
use crate::format::format_long_date;

/// Milliseconds in one day.
pub const DAY_MS: i64 = 86_400_000;

/// Compute every milestone for `birth`, judged against `now`.
///
/// Calendar dates are anchored at local midnight in `now`'s time zone, so
/// elapsed-day counts follow the real clock across DST transitions.
/// A birth date after `now` is not rejected here: `current_days` goes
/// negative and every milestone is reported as future.
pub fn compute_milestones<Tz: TimeZone>(birth: NaiveDate, now: &DateTime<Tz>) -> MilestonesData {
    let tz = now.timezone();
    let birth_instant = local_midnight(&tz, birth);

    let elapsed_ms = now
        .clone()
        .signed_duration_since(birth_instant)
        .num_milliseconds();
    let current_days = elapsed_ms.div_euclid(DAY_MS);

    let build = |category: MilestoneCategory| -> Vec<Milestone> {
        category
            .offsets()
            .into_iter()
            .enumerate()
            .map(|(idx, (days, description))| {
                build_milestone(category, idx, days, description, birth, now)
            })
            .collect()
    };

    let data = MilestonesData {
        echoes_of_time: build(MilestoneCategory::EchoesOfTime),
        rhythms_of_universe: build(MilestoneCategory::RhythmsOfUniverse),
        moments_of_significance: build(MilestoneCategory::MomentsOfSignificance),
        current_days,
        has_special_milestone: is_special_day_count(current_days),
    };

    debug!(
        %birth,
        current_days,
        special = data.has_special_milestone,
        "computed milestones"
    );
    data
}

/// Compute milestones against the local wall clock.
pub fn compute_milestones_now(birth: NaiveDate) -> MilestonesData {
    compute_milestones(birth, &Local::now())
}

/// Compute milestones as of midnight UTC on `today`.
///
/// Useful when "today" is a calendar date rather than an instant.
pub fn compute_milestones_on(birth: NaiveDate, today: NaiveDate) -> MilestonesData {
    let now = Utc.from_utc_datetime(&today.and_time(NaiveTime::default()));
    compute_milestones(birth, &now)
}

fn build_milestone<Tz: TimeZone>(
    category: MilestoneCategory,
    idx: usize,
    days: u32,
    description: Option<&'static str>,
    birth: NaiveDate,
    now: &DateTime<Tz>,
) -> Milestone {
    let date = birth
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX);
    let instant = local_midnight(&now.timezone(), date);
    let is_past = instant <= *now;

    let days_until = if is_past {
        None
    } else {
        let remaining_ms = instant.signed_duration_since(now.clone()).num_milliseconds();
        Some(ceil_div(remaining_ms, DAY_MS))
    };

    Milestone {
        id: format!("{}-{}", category.id_prefix(), idx + 1),
        days,
        date: format_long_date(date),
        is_past,
        days_until,
        description: description.map(str::to_string),
    }
}

/// Local midnight of `date` in `tz`.
///
/// An ambiguous midnight resolves to the earlier instant. A midnight
/// swallowed by a DST gap resolves to the first instant after the gap.
/// Near the ends of the calendar the result clamps to the earliest or
/// latest representable instant.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::default());
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let day_before = midnight
                .checked_sub_signed(TimeDelta::days(1))
                .unwrap_or(midnight);
            let offset = tz.offset_from_utc_datetime(&day_before).fix().local_minus_utc();
            let utc = midnight
                .checked_sub_signed(TimeDelta::seconds(i64::from(offset)))
                .unwrap_or(if offset > 0 {
                    NaiveDateTime::MIN
                } else {
                    NaiveDateTime::MAX
                });
            tz.from_utc_datetime(&utc)
        }
    }
}

fn ceil_div(n: i64, d: i64) -> i64 {
    let q = n.div_euclid(d);
    if n.rem_euclid(d) == 0 {
        q
    } else {
        q + 1
    }
}
