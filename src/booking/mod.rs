//! Appointment booking domain
//!
//! The typed appointment record, the option lists its selection fields draw
//! from, and the constraints checked before a booking is accepted.

mod options;
mod record;
mod violation;

pub use options::{time_slots, year_options, TimeSlot};
pub use record::{AppointmentRequest, FieldKind, FieldUpdate, FormField, Transmission};
pub use violation::ConstraintViolation;
