mod appointment_form;
mod header;
mod help_overlay;
mod status_bar;
mod success_modal;

pub use appointment_form::{AppointmentForm, FormEvent, FormFocus};
pub use header::{render_hero, Header};
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use success_modal::SuccessModal;
