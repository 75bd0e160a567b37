//! # Availability Slot Generator
//!
//! Produces the bookable time windows of a doctor at a clinic for one day.
//!
//! ## Algorithm
//!
//! 1. Look up the sessions of the doctor at the clinic for the weekday of the
//!    requested date. No sessions means no slots.
//! 2. Look up active holiday rows covering the date. A row for the clinic or
//!    for the doctor closes the whole day.
//! 3. Fetch the day's active appointments.
//! 4. Walk every session from its start in `time_slot` minute steps, keeping
//!    the candidates that fall strictly before the session end.
//! 5. A candidate is unavailable when another appointment of the same doctor
//!    and clinic starts at that exact time, or when it already lies in the
//!    past. With `only_available` set such candidates are dropped instead.
//!
//! Slots are returned grouped per session, in session order.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::errors::ClinicResult;
use crate::models::{
    appointment::Appointment,
    session::ClinicSession,
    slot::{Slot, SlotQuery},
};
use crate::store::AvailabilityStore;

/// Display format of a slot time, e.g. `09:20 AM`.
pub const SLOT_TIME_FORMAT: &str = "%I:%M %p";

pub type SlotGroups = Vec<Vec<Slot>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRequest {
    pub date: NaiveDate,
    pub doctor_id: i64,
    pub clinic_id: i64,
    /// Appointment being edited; it never conflicts with itself.
    pub exclude_appointment_id: Option<i64>,
    pub only_available: bool,
}

impl SlotRequest {
    /// Builds a request when every required parameter is present.
    pub fn from_query(query: &SlotQuery) -> Option<Self> {
        Some(Self {
            date: query.date?,
            doctor_id: query.doctor_id?,
            clinic_id: query.clinic_id?,
            exclude_appointment_id: query.appointment_id,
            only_available: query.only_available,
        })
    }
}

/// Computes the slot groups for `request`.
///
/// Absence of sessions or a covering holiday both yield an empty result.
/// Store failures are propagated.
pub async fn compute_slots<S>(
    store: &S,
    clock: &dyn Clock,
    request: &SlotRequest,
) -> ClinicResult<SlotGroups>
where
    S: AvailabilityStore + ?Sized,
{
    let sessions = store
        .sessions_for_day(request.doctor_id, request.clinic_id, request.date.weekday())
        .await?;

    if sessions.is_empty() {
        debug!(
            doctor_id = request.doctor_id,
            clinic_id = request.clinic_id,
            date = %request.date,
            "No sessions for requested day"
        );
        return Ok(Vec::new());
    }

    let holidays = store.holidays_covering(request.date).await?;
    if holidays
        .iter()
        .any(|h| h.covers(request.date) && h.applies_to(request.doctor_id, request.clinic_id))
    {
        debug!(date = %request.date, "Requested day is closed by a holiday");
        return Ok(Vec::new());
    }

    let appointments = store.active_appointments_on(request.date).await?;

    Ok(generate_slots(request, &sessions, &appointments, clock.now()))
}

/// Pure part of slot generation, working on rows that were already fetched.
pub fn generate_slots(
    request: &SlotRequest,
    sessions: &[ClinicSession],
    appointments: &[Appointment],
    now: NaiveDateTime,
) -> SlotGroups {
    sessions
        .iter()
        .map(|session| session_slots(request, session, appointments, now))
        .filter(|group| !group.is_empty())
        .collect()
}

fn session_slots(
    request: &SlotRequest,
    session: &ClinicSession,
    appointments: &[Appointment],
    now: NaiveDateTime,
) -> Vec<Slot> {
    let mut slots = Vec::new();

    if session.time_slot <= 0 {
        warn!(
            session_id = session.id,
            time_slot = session.time_slot,
            "Session has no usable slot length"
        );
        return slots;
    }

    let start = session.start_time;
    let Some(start) = NaiveTime::from_hms_opt(start.hour(), start.minute(), 0) else {
        return slots;
    };

    let steps = step_count(session.start_time, session.end_time, session.time_slot);

    for i in 0..=steps {
        let offset = Duration::minutes(i * i64::from(session.time_slot));
        let (candidate, wrapped) = start.overflowing_add_signed(offset);
        if wrapped != 0 {
            break;
        }
        if candidate >= session.end_time {
            continue;
        }

        let booked = appointments.iter().any(|a| {
            a.is_active()
                && a.appointment_start_time == candidate
                && a.doctor_id == request.doctor_id
                && a.clinic_id == request.clinic_id
                && Some(a.id) != request.exclude_appointment_id
        });
        let past = request.date.and_time(candidate) < now;
        let available = !booked && !past;

        if request.only_available && !available {
            continue;
        }

        slots.push(Slot {
            time: candidate.format(SLOT_TIME_FORMAT).to_string(),
            available,
        });
    }

    slots
}

/// Number of slot steps in a session.
///
/// When the session spans at least one whole hour only the whole hours are
/// counted; otherwise only the minutes. Sessions such as 09:00-10:30 with a
/// 20 minute slot therefore stop short of the last slot.
pub fn step_count(start: NaiveTime, end: NaiveTime, time_slot: i32) -> i64 {
    if time_slot <= 0 {
        return 0;
    }

    let span = (end - start).num_minutes().abs();
    let hours = span / 60;
    let minutes = span % 60;

    let counted = if hours != 0 { hours * 60 } else { minutes };
    (counted as f64 / f64::from(time_slot)).round() as i64
}
