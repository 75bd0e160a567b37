use std::collections::BTreeMap;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// One working shift of a doctor at a clinic on a given weekday.
///
/// A split shift is stored as two rows: the morning row and a child row whose
/// `parent_id` points back at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicSession {
    pub id: i64,
    pub clinic_id: i64,
    pub doctor_id: i64,
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Slot granularity in minutes.
    pub time_slot: i32,
    pub parent_id: Option<i64>,
}

/// Lowercase abbreviated and full English names of a weekday.
///
/// Session rows have been written with both spellings over time, so lookups
/// match either one.
pub fn weekday_names(weekday: Weekday) -> (&'static str, &'static str) {
    match weekday {
        Weekday::Mon => ("mon", "monday"),
        Weekday::Tue => ("tue", "tuesday"),
        Weekday::Wed => ("wed", "wednesday"),
        Weekday::Thu => ("thu", "thursday"),
        Weekday::Fri => ("fri", "friday"),
        Weekday::Sat => ("sat", "saturday"),
        Weekday::Sun => ("sun", "sunday"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub clinic_id: i64,
    pub doctor_id: i64,
    pub days: Vec<Weekday>,
    pub time_slot: i32,
    pub first_shift: ShiftRequest,
    pub second_shift: Option<ShiftRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionShift {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl From<&ClinicSession> for SessionShift {
    fn from(session: &ClinicSession) -> Self {
        Self {
            start_time: session.start_time,
            end_time: session.end_time,
        }
    }
}

/// Weekday of a stored day spelling, accepting `mon` as well as `Monday`.
pub fn parse_day(day: &str) -> Option<Weekday> {
    day.trim().parse::<Weekday>().ok()
}

/// Abbreviated name of a stored day spelling; unknown spellings pass
/// through lowercased.
pub fn normalize_day(day: &str) -> String {
    match parse_day(day) {
        Some(weekday) => weekday_names(weekday).0.to_string(),
        None => day.trim().to_ascii_lowercase(),
    }
}

/// Sort key putting Monday first and unknown spellings last.
fn day_order(day: &str) -> u32 {
    parse_day(day).map_or(7, |weekday| weekday.num_days_from_monday())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: String,
    pub shifts: Vec<SessionShift>,
}

/// Shifts of a doctor per weekday, Monday first.
pub type WeeklyAvailability = Vec<DayAvailability>;

pub fn group_by_day(sessions: &[ClinicSession]) -> WeeklyAvailability {
    let mut days: BTreeMap<(u32, String), Vec<SessionShift>> = BTreeMap::new();
    for session in sessions {
        days.entry((day_order(&session.day), normalize_day(&session.day)))
            .or_default()
            .push(SessionShift::from(session));
    }

    days.into_iter()
        .map(|((_, day), mut shifts)| {
            shifts.sort_by_key(|shift| shift.start_time);
            DayAvailability { day, shifts }
        })
        .collect()
}

/// A session as it is edited: the parent row with its split-shift child
/// folded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSchedule {
    pub id: i64,
    pub clinic_id: i64,
    pub doctor_id: i64,
    pub day: String,
    pub time_slot: i32,
    pub first_shift: SessionShift,
    pub second_shift: Option<SessionShift>,
}

/// Folds every child row into the second shift of its parent.
///
/// Children whose parent is not among `sessions` are dropped. Results are
/// ordered by weekday, then by first shift start.
pub fn fold_split_shifts(sessions: &[ClinicSession]) -> Vec<SessionSchedule> {
    let mut schedules: Vec<SessionSchedule> = sessions
        .iter()
        .filter(|session| session.parent_id.is_none())
        .map(|parent| SessionSchedule {
            id: parent.id,
            clinic_id: parent.clinic_id,
            doctor_id: parent.doctor_id,
            day: normalize_day(&parent.day),
            time_slot: parent.time_slot,
            first_shift: SessionShift::from(parent),
            second_shift: sessions
                .iter()
                .find(|child| child.parent_id == Some(parent.id))
                .map(SessionShift::from),
        })
        .collect();

    schedules.sort_by_key(|schedule| {
        (
            day_order(&schedule.day),
            schedule.first_shift.start_time,
            schedule.id,
        )
    });
    schedules
}
