pub mod booking;
pub mod conflict;
pub mod schedule;

pub use booking::{validate_and_admit, validate_booking, AppointmentBookingService};
pub use conflict::intervals_overlap;
pub use schedule::{today_schedule, ScheduleService};
