// =====================================================================================
// BOOKING VALIDATION TESTS
// =====================================================================================

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime};

use appointment_cell::models::{
    Appointment, AppointmentError, AppointmentFilters, CreateAppointmentRequest, NewAppointment,
};
use appointment_cell::services::{
    intervals_overlap, validate_and_admit, validate_booking, AppointmentBookingService,
};
use shared_database::Collection;
use shared_models::AvailabilitySlot;
use shared_utils::test_utils::{date, time, TestClinic};

fn candidate(
    doctor_id: u64,
    room_id: u64,
    on: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> NewAppointment {
    NewAppointment {
        patient_name: "Jane Doe".to_string(),
        patient_phone: String::new(),
        doctor_id,
        room_id,
        date: on,
        start_time: start,
        end_time: end,
        notes: String::new(),
    }
}

fn request(
    doctor_id: u64,
    room_id: u64,
    on: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        patient_name: Some("Jane Doe".to_string()),
        patient_phone: None,
        doctor_id: Some(doctor_id),
        room_id: Some(room_id),
        date: Some(on),
        start_time: Some(start),
        end_time: Some(end),
        notes: None,
    }
}

fn morning_slot(doctor_id: u64) -> Collection<AvailabilitySlot> {
    let mut slots = Collection::new();
    slots.insert_with(|id| AvailabilitySlot {
        id,
        doctor_id,
        date: date(2024, 1, 10),
        start_time: time(9, 0),
        end_time: time(12, 0),
    });
    slots
}

#[test]
fn test_overlap_boundaries() {
    assert!(!intervals_overlap(time(9, 0), time(10, 0), time(10, 0), time(11, 0)));
    assert!(intervals_overlap(time(9, 0), time(10, 0), time(9, 30), time(10, 30)));
}

#[test]
fn test_admits_booking_inside_slot() {
    let slots = morning_slot(1);
    let mut appointments = Collection::new();

    let admitted = validate_and_admit(
        candidate(1, 5, date(2024, 1, 10), time(9, 30), time(10, 0)),
        &slots,
        &mut appointments,
    )
    .unwrap();

    assert_eq!(admitted.id, 1);
    assert_eq!(appointments.len(), 1);
}

#[test]
fn test_doctor_check_runs_before_room_check() {
    let slots = morning_slot(1);
    let mut appointments = Collection::new();
    let on = date(2024, 1, 10);

    validate_and_admit(candidate(1, 5, on, time(9, 30), time(10, 0)), &slots, &mut appointments)
        .unwrap();

    // Same doctor and same room: both rules are broken, the doctor rule is reported.
    let err = validate_and_admit(
        candidate(1, 5, on, time(9, 45), time(10, 15)),
        &slots,
        &mut appointments,
    )
    .unwrap_err();

    assert_eq!(err, AppointmentError::DoctorDoubleBooked);
    assert_eq!(err.code(), "DOCTOR_DOUBLE_BOOKED");
    assert_eq!(appointments.len(), 1);
}

#[test]
fn test_doctor_without_slots_is_not_available() {
    let slots = morning_slot(1);
    let appointments: Vec<Appointment> = Vec::new();

    let err = validate_booking(
        &candidate(2, 5, date(2024, 1, 10), time(9, 30), time(10, 0)),
        slots.iter(),
        &appointments,
    )
    .unwrap_err();

    assert_eq!(err, AppointmentError::DoctorNotAvailable);
}

#[test]
fn test_availability_is_checked_before_double_booking() {
    let slots = morning_slot(1);
    let mut appointments = Collection::new();
    let on = date(2024, 1, 10);
    validate_and_admit(candidate(1, 5, on, time(11, 0), time(12, 0)), &slots, &mut appointments)
        .unwrap();

    // Overlaps the existing booking and also runs past the slot.
    let err = validate_booking(
        &candidate(1, 5, on, time(11, 30), time(12, 30)),
        slots.iter(),
        appointments.iter(),
    )
    .unwrap_err();

    assert_eq!(err, AppointmentError::DoctorNotAvailable);
}

#[test]
fn test_slot_on_another_date_does_not_count() {
    let slots = morning_slot(1);
    let appointments: Vec<Appointment> = Vec::new();

    let err = validate_booking(
        &candidate(1, 5, date(2024, 1, 11), time(9, 30), time(10, 0)),
        slots.iter(),
        &appointments,
    )
    .unwrap_err();

    assert_eq!(err, AppointmentError::DoctorNotAvailable);
}

#[test]
fn test_booking_may_fill_the_whole_slot() {
    let slots = morning_slot(1);
    let appointments: Vec<Appointment> = Vec::new();

    let result = validate_booking(
        &candidate(1, 5, date(2024, 1, 10), time(9, 0), time(12, 0)),
        slots.iter(),
        &appointments,
    );

    assert!(result.is_ok());
}

#[test]
fn test_room_double_booking_with_different_doctors() {
    let mut slots = morning_slot(1);
    slots.insert_with(|id| AvailabilitySlot {
        id,
        doctor_id: 2,
        date: date(2024, 1, 10),
        start_time: time(9, 0),
        end_time: time(12, 0),
    });
    let mut appointments = Collection::new();
    let on = date(2024, 1, 10);

    validate_and_admit(candidate(1, 5, on, time(9, 0), time(10, 0)), &slots, &mut appointments)
        .unwrap();

    let err = validate_and_admit(
        candidate(2, 5, on, time(9, 30), time(10, 30)),
        &slots,
        &mut appointments,
    )
    .unwrap_err();
    assert_eq!(err, AppointmentError::RoomDoubleBooked);
    assert_eq!(err.code(), "ROOM_DOUBLE_BOOKED");

    // Another room at the same time is fine.
    let admitted = validate_and_admit(
        candidate(2, 6, on, time(9, 30), time(10, 30)),
        &slots,
        &mut appointments,
    )
    .unwrap();
    assert_eq!(admitted.id, 2);
}

#[test]
fn test_back_to_back_bookings_are_allowed() {
    let slots = morning_slot(1);
    let mut appointments = Collection::new();
    let on = date(2024, 1, 10);

    validate_and_admit(candidate(1, 5, on, time(9, 0), time(10, 0)), &slots, &mut appointments)
        .unwrap();
    validate_and_admit(candidate(1, 5, on, time(10, 0), time(11, 0)), &slots, &mut appointments)
        .unwrap();

    assert_eq!(appointments.len(), 2);
}

#[test]
fn test_rejection_leaves_appointments_untouched() {
    let slots = morning_slot(1);
    let mut appointments = Collection::new();
    let on = date(2024, 1, 10);
    validate_and_admit(candidate(1, 5, on, time(9, 0), time(10, 0)), &slots, &mut appointments)
        .unwrap();
    let before = appointments.to_vec();

    let rejected = [
        candidate(3, 5, on, time(10, 0), time(10, 30)),
        candidate(1, 7, on, time(9, 30), time(10, 30)),
        candidate(1, 5, on, time(8, 0), time(9, 30)),
    ];
    for booking in rejected {
        assert!(validate_and_admit(booking, &slots, &mut appointments).is_err());
        assert_eq!(appointments.to_vec(), before);
    }
}

#[test]
fn test_admitted_bookings_never_overlap_per_doctor_or_room() {
    let mut slots = Collection::new();
    for doctor_id in 1..=3 {
        slots.insert_with(|id| AvailabilitySlot {
            id,
            doctor_id,
            date: date(2024, 1, 10),
            start_time: time(8, 0),
            end_time: time(18, 0),
        });
    }
    let mut appointments = Collection::new();

    // Sweep staggered 45-minute requests across three doctors and two rooms.
    for step in 0..40u32 {
        let start_minutes = 8 * 60 + step * 15;
        let end_minutes = start_minutes + 45;
        if end_minutes > 18 * 60 {
            break;
        }
        let start = time(start_minutes / 60, start_minutes % 60);
        let end = time(end_minutes / 60, end_minutes % 60);
        let doctor_id = u64::from(step % 3) + 1;
        let room_id = u64::from(step % 2) + 10;
        let _ = validate_and_admit(
            candidate(doctor_id, room_id, date(2024, 1, 10), start, end),
            &slots,
            &mut appointments,
        );
    }

    let admitted = appointments.to_vec();
    assert!(!admitted.is_empty());
    for (i, a) in admitted.iter().enumerate() {
        assert!(slots
            .iter()
            .any(|s| s.covers(a.doctor_id, a.date, a.start_time, a.end_time)));
        for b in &admitted[i + 1..] {
            let overlap = intervals_overlap(a.start_time, a.end_time, b.start_time, b.end_time);
            if a.date == b.date && overlap {
                assert_ne!(a.doctor_id, b.doctor_id, "{:?} vs {:?}", a, b);
                assert_ne!(a.room_id, b.room_id, "{:?} vs {:?}", a, b);
            }
        }
    }
}

// ==============================================================================
// SERVICE-LEVEL TESTS
// ==============================================================================

#[tokio::test]
async fn test_service_books_and_lists_by_date() {
    let clinic = TestClinic::new();
    clinic.slot(1, date(2024, 1, 10), time(9, 0), time(12, 0)).await;
    clinic.slot(1, date(2024, 1, 11), time(9, 0), time(12, 0)).await;
    let service = AppointmentBookingService::new(&clinic.store);

    service
        .book_appointment(request(1, 5, date(2024, 1, 10), time(9, 0), time(9, 30)))
        .await
        .unwrap();
    service
        .book_appointment(request(1, 5, date(2024, 1, 11), time(9, 0), time(9, 30)))
        .await
        .unwrap();

    let all = service.list_appointments(&AppointmentFilters::default()).await;
    assert_eq!(all.len(), 2);

    let on_eleventh = service
        .list_appointments(&AppointmentFilters {
            date: Some(date(2024, 1, 11)),
        })
        .await;
    assert_eq!(on_eleventh.len(), 1);
    assert_eq!(on_eleventh[0].id, 2);
}

#[tokio::test]
async fn test_service_reports_missing_room() {
    let clinic = TestClinic::new();
    let service = AppointmentBookingService::new(&clinic.store);

    let mut incomplete = request(1, 5, date(2024, 1, 10), time(9, 0), time(9, 30));
    incomplete.room_id = None;

    let err = service.book_appointment(incomplete).await.unwrap_err();
    assert_matches!(err, AppointmentError::MissingField("room_id"));
}

#[tokio::test]
async fn test_service_delete_is_idempotent() {
    let clinic = TestClinic::new();
    let apt = clinic
        .appointment("Jane Doe", 1, 5, date(2024, 1, 10), time(9, 0), time(9, 30))
        .await;
    let service = AppointmentBookingService::new(&clinic.store);

    assert!(service.delete_appointment(apt.id).await);
    assert!(!service.delete_appointment(apt.id).await);
    assert!(clinic.store.read().await.appointments.is_empty());
}

#[tokio::test]
async fn test_concurrent_bookings_for_same_time_admit_exactly_one() {
    let clinic = TestClinic::new();
    clinic.slot(1, date(2024, 1, 10), time(9, 0), time(12, 0)).await;
    let store = clinic.store.clone();

    let mut handles = Vec::new();
    for room_id in 0..20u64 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            AppointmentBookingService::new(&store)
                .book_appointment(request(1, room_id, date(2024, 1, 10), time(10, 0), time(10, 30)))
                .await
        }));
    }

    let mut admitted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => admitted += 1,
            Err(e) => assert_eq!(e, AppointmentError::DoctorDoubleBooked),
        }
    }

    assert_eq!(admitted, 1);
    assert_eq!(store.read().await.appointments.len(), 1);
}
