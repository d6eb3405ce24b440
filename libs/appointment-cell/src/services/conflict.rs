use chrono::{NaiveDate, NaiveTime};

use crate::models::{Appointment, AvailabilitySlot};

/// Half-open intersection of `[start1, end1)` and `[start2, end2)`.
///
/// Intervals that only touch (`end1 == start2`) do not overlap.
pub fn intervals_overlap<T: PartialOrd>(start1: T, end1: T, start2: T, end2: T) -> bool {
    start1 < end2 && start2 < end1
}

/// The first slot that fully contains `[start, end)` for this doctor and date.
pub fn find_covering_slot<'a, I>(
    slots: I,
    doctor_id: u64,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> Option<&'a AvailabilitySlot>
where
    I: IntoIterator<Item = &'a AvailabilitySlot>,
{
    slots
        .into_iter()
        .find(|slot| slot.covers(doctor_id, date, start, end))
}

/// Which resource a double-booking scan is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Doctor(u64),
    Room(u64),
}

impl Resource {
    fn holds(&self, appointment: &Appointment) -> bool {
        match *self {
            Resource::Doctor(id) => appointment.doctor_id == id,
            Resource::Room(id) => appointment.room_id == id,
        }
    }
}

/// The first existing appointment that commits `resource` during `[start, end)` on `date`.
pub fn find_conflict<'a, I>(
    appointments: I,
    resource: Resource,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> Option<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    appointments.into_iter().find(|existing| {
        resource.holds(existing)
            && existing.date == date
            && intervals_overlap(existing.start_time, existing.end_time, start, end)
    })
}
