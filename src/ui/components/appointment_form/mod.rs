//! Appointment form component
//!
//! Owns the in-progress [`AppointmentRequest`] and the editing state around it
//! (focus, text cursor, raw date buffer). Rendering lives in `render.rs`.

mod render;

use chrono::{Datelike, NaiveDate};

use crate::booking::{
    time_slots, year_options, AppointmentRequest, ConstraintViolation, FieldKind, FieldUpdate,
    FormField, Transmission,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_INPUT_LEN: usize = 10;

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FormField),
    Submit,
}

/// What the caller should do after a key was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    None,
    SubmitRequested,
}

/// The booking form: one live record plus its editing state
pub struct AppointmentForm {
    record: AppointmentRequest,
    date_input: String,
    focus: FormFocus,
    /// Character (not byte) offset into the focused text control
    cursor: usize,
    today: NaiveDate,
}

impl AppointmentForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            record: AppointmentRequest::default(),
            date_input: String::new(),
            focus: FormFocus::Field(FormField::ALL[0]),
            cursor: 0,
            today,
        }
    }

    pub fn record(&self) -> &AppointmentRequest {
        &self.record
    }

    #[allow(dead_code)]
    pub fn date_input(&self) -> &str {
        &self.date_input
    }

    #[allow(dead_code)]
    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn focused_field(&self) -> Option<FormField> {
        match self.focus {
            FormFocus::Field(field) => Some(field),
            FormFocus::Submit => None,
        }
    }

    #[allow(dead_code)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[allow(dead_code)]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Refresh the date used for the minimum appointment date and model years
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Model years offered by the year selector, newest first
    pub fn year_options(&self) -> Vec<i32> {
        year_options(self.today.year()).collect()
    }

    /// Set one field of the record
    pub fn update_field(&mut self, update: FieldUpdate) {
        if let FieldUpdate::AppointmentDate(date) = &update {
            self.date_input = date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default();
        }
        let field = update.field();
        self.record.update(update);
        if self.focused_field() == Some(field) {
            self.cursor = self.focused_len();
        }
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
        self.cursor = self.focused_len();
    }

    pub fn focus_next(&mut self) {
        let next = match self.focus {
            FormFocus::Submit => FormFocus::Field(FormField::ALL[0]),
            FormFocus::Field(field) => FormField::ALL
                .get(field.index() + 1)
                .map_or(FormFocus::Submit, |f| FormFocus::Field(*f)),
        };
        self.set_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = match self.focus {
            FormFocus::Submit => FormFocus::Field(FormField::ALL[FormField::ALL.len() - 1]),
            FormFocus::Field(field) => match field.index() {
                0 => FormFocus::Submit,
                i => FormFocus::Field(FormField::ALL[i - 1]),
            },
        };
        self.set_focus(prev);
    }

    /// Text of the focused control, for controls edited as text
    fn focused_text(&self) -> Option<&str> {
        let field = self.focused_field()?;
        match field.kind() {
            FieldKind::Date => Some(&self.date_input),
            _ => self.record.text(field),
        }
    }

    fn focused_len(&self) -> usize {
        self.focused_text().map_or(0, |t| t.chars().count())
    }

    /// Apply an edit to the focused text control and write it back to the record
    fn edit_text<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut String, &mut usize),
    {
        let Some(field) = self.focused_field() else {
            return;
        };
        match field.kind() {
            FieldKind::Date => {
                edit(&mut self.date_input, &mut self.cursor);
                // chrono accepts single-digit days, a date control does not
                let parsed = (self.date_input.len() == DATE_INPUT_LEN)
                    .then(|| NaiveDate::parse_from_str(&self.date_input, DATE_FORMAT).ok())
                    .flatten();
                self.record.update(FieldUpdate::AppointmentDate(parsed));
            }
            FieldKind::Text | FieldKind::MultiLineText => {
                let mut value = self.record.text(field).unwrap_or_default().to_string();
                edit(&mut value, &mut self.cursor);
                if let Some(update) = FieldUpdate::text(field, value) {
                    self.record.update(update);
                }
            }
            FieldKind::Select | FieldKind::Checkbox => {}
        }
    }

    /// Handle a printable character for the focused control
    pub fn handle_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        match field.kind() {
            FieldKind::Text | FieldKind::MultiLineText => {
                self.edit_text(|value, cursor| insert_at(value, cursor, c));
            }
            FieldKind::Date => {
                if (c.is_ascii_digit() || c == '-') && self.date_input.len() < DATE_INPUT_LEN {
                    self.edit_text(|value, cursor| insert_at(value, cursor, c));
                }
            }
            FieldKind::Select if c == ' ' => self.cycle_option(true),
            FieldKind::Checkbox if c == ' ' => self.toggle_checkbox(),
            FieldKind::Select | FieldKind::Checkbox => {}
        }
    }

    pub fn handle_backspace(&mut self) {
        self.edit_text(|value, cursor| {
            if *cursor > 0 {
                *cursor -= 1;
                value.remove(byte_index(value, *cursor));
            }
        });
    }

    pub fn handle_delete(&mut self) {
        self.edit_text(|value, cursor| {
            if *cursor < value.chars().count() {
                value.remove(byte_index(value, *cursor));
            }
        });
    }

    /// Left arrow: move the cursor, or pick the previous option
    pub fn handle_left(&mut self) {
        match self.focused_field().map(|f| f.kind()) {
            Some(FieldKind::Select) => self.cycle_option(false),
            Some(_) => self.cursor = self.cursor.saturating_sub(1),
            None => {}
        }
    }

    /// Right arrow: move the cursor, or pick the next option
    pub fn handle_right(&mut self) {
        match self.focused_field().map(|f| f.kind()) {
            Some(FieldKind::Select) => self.cycle_option(true),
            Some(_) => self.cursor = (self.cursor + 1).min(self.focused_len()),
            None => {}
        }
    }

    pub fn handle_home(&mut self) {
        self.cursor = 0;
    }

    pub fn handle_end(&mut self) {
        self.cursor = self.focused_len();
    }

    pub fn handle_enter(&mut self) -> FormEvent {
        match self.focus {
            FormFocus::Submit => return FormEvent::SubmitRequested,
            FormFocus::Field(field) => match field.kind() {
                FieldKind::MultiLineText => self.handle_char('\n'),
                FieldKind::Checkbox => self.toggle_checkbox(),
                _ => self.focus_next(),
            },
        }
        FormEvent::None
    }

    pub fn toggle_checkbox(&mut self) {
        if self.focused_field() == Some(FormField::HasLpg) {
            let checked = !self.record.has_lpg;
            self.update_field(FieldUpdate::HasLpg(checked));
        }
    }

    /// Step the focused selection through its placeholder and options
    pub fn cycle_option(&mut self, forward: bool) {
        let update = match self.focused_field() {
            Some(FormField::ModelYear) => FieldUpdate::ModelYear(cycle(
                self.record.model_year,
                &self.year_options(),
                forward,
            )),
            Some(FormField::Transmission) => FieldUpdate::Transmission(cycle(
                self.record.transmission,
                &Transmission::ALL,
                forward,
            )),
            Some(FormField::AppointmentTime) => {
                let slots: Vec<_> = time_slots().collect();
                FieldUpdate::AppointmentTime(cycle(self.record.appointment_time, &slots, forward))
            }
            _ => return,
        };
        self.update_field(update);
    }

    /// Check constraints and, if they hold, clear the form for the next booking.
    ///
    /// On a violation the offending control gets focus and the record is left
    /// as it was.
    pub fn submit(&mut self) -> Result<(), ConstraintViolation> {
        if let Err(violation) = self.check() {
            self.set_focus(FormFocus::Field(violation.field()));
            return Err(violation);
        }
        self.reset();
        Ok(())
    }

    fn check(&self) -> Result<(), ConstraintViolation> {
        match self.record.check_constraints(self.today) {
            Err(ConstraintViolation::MissingRequired(FormField::AppointmentDate))
                if !self.date_input.is_empty() =>
            {
                Err(ConstraintViolation::MalformedDate(self.date_input.clone()))
            }
            other => other,
        }
    }

    pub fn reset(&mut self) {
        self.record.reset();
        self.date_input.clear();
        self.set_focus(FormFocus::Field(FormField::ALL[0]));
    }
}

/// Byte offset of the `char_idx`-th character
fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(i, _)| i)
}

fn insert_at(value: &mut String, cursor: &mut usize, c: char) {
    value.insert(byte_index(value, *cursor), c);
    *cursor += 1;
}

/// Next value in `[unset, options...]`, wrapping around
fn cycle<T: Copy + PartialEq>(current: Option<T>, options: &[T], forward: bool) -> Option<T> {
    let len = options.len() + 1;
    let pos = current
        .and_then(|c| options.iter().position(|o| *o == c))
        .map_or(0, |i| i + 1);
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    next.checked_sub(1).map(|i| options[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::TimeSlot;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn type_text(form: &mut AppointmentForm, text: &str) {
        for c in text.chars() {
            form.handle_char(c);
        }
    }

    fn focus(form: &mut AppointmentForm, field: FormField) {
        form.set_focus(FormFocus::Field(field));
    }

    #[test]
    fn test_initial_state() {
        let form = AppointmentForm::new(date(2026, 10, 18));
        assert!(form.record().is_empty());
        assert_eq!(form.focus(), FormFocus::Field(FormField::CustomerName));
        assert_eq!(form.cursor(), 0);
    }

    #[test]
    fn test_typing_updates_record() {
        let mut form = AppointmentForm::new(date(2026, 10, 18));
        type_text(&mut form, "Ali Veli");
        form.focus_next();
        type_text(&mut form, "05551234567");

        assert_eq!(form.record().customer_name, "Ali Veli");
        assert_eq!(form.record().phone, "05551234567");
        assert_eq!(form.focus(), FormFocus::Field(FormField::Phone));
    }

    #[test]
    fn test_multibyte_cursor_editing() {
        let mut form = AppointmentForm::new(date(2026, 10, 18));
        focus(&mut form, FormField::ServiceType);
        type_text(&mut form, "Bakım");
        form.handle_home();
        type_text(&mut form, "Periyodik ");
        assert_eq!(form.record().service_type, "Periyodik Bakım");

        form.handle_end();
        form.handle_backspace();
        form.handle_left();
        form.handle_delete();
        assert_eq!(form.record().service_type, "Periyodik Bak");
        assert_eq!(form.cursor(), 13);
    }

    #[test]
    fn test_focus_wraps_through_submit() {
        let mut form = AppointmentForm::new(date(2026, 10, 18));
        form.focus_prev();
        assert_eq!(form.focus(), FormFocus::Submit);
        form.focus_prev();
        assert_eq!(form.focus(), FormFocus::Field(FormField::Notes));
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), FormFocus::Field(FormField::CustomerName));
    }

    #[test]
    fn test_focus_moves_cursor_to_end() {
        let mut form = AppointmentForm::new(date(2026, 10, 18));
        form.update_field(FieldUpdate::Phone("0555".into()));
        focus(&mut form, FormField::Phone);
        assert_eq!(form.cursor(), 4);
    }

    #[test]
    fn test_select_cycles_through_placeholder() {
        let mut form = AppointmentForm::new(date(2026, 10, 18));
        focus(&mut form, FormField::Transmission);
        form.handle_right();
        assert_eq!(form.record().transmission, Some(Transmission::Manual));
        form.handle_right();
        assert_eq!(form.record().transmission, Some(Transmission::Automatic));
        form.handle_right();
        assert_eq!(form.record().transmission, None);
        form.handle_left();
        assert_eq!(form.record().transmission, Some(Transmission::Automatic));
    }

    #[test]
    fn test_year_select_starts_at_current_year() {
        let mut form = AppointmentForm::new(date(2026, 10, 18));
        focus(&mut form, FormField::ModelYear);
        form.handle_char(' ');
        assert_eq!(form.record().model_year, Some(2026));
        form.handle_left();
        form.handle_left();
        assert_eq!(form.record().model_year, Some(2000));
        assert_eq!(form.year_options().len(), 27);
    }

    #[test]
    fn test_time_select() {
        let mut form = AppointmentForm::new(date(2026, 10, 18));
        focus(&mut form, FormField::AppointmentTime);
        form.handle_right();
        form.handle_right();
        assert_eq!(form.record().appointment_time, TimeSlot::from_hour(10));
    }

    #[test]
    fn test_checkbox_toggle() {
        let mut form = AppointmentForm::new(date(2026, 10, 18));
        focus(&mut form, FormField::HasLpg);
        form.handle_char(' ');
        assert!(form.record().has_lpg);
        assert_eq!(form.handle_enter(), FormEvent::None);
        assert!(!form.record().has_lpg);
    }

    #[test]
    fn test_date_input_parses_when_complete() {
        let mut form = AppointmentForm::new(date(2026, 10, 18));
        focus(&mut form, FormField::AppointmentDate);
        type_text(&mut form, "2026-10-2");
        assert_eq!(form.record().appointment_date, None);
        type_text(&mut form, "0x");
        assert_eq!(form.date_input(), "2026-10-20");
        assert_eq!(form.record().appointment_date, Some(date(2026, 10, 20)));
        form.handle_char('1');
        assert_eq!(form.date_input(), "2026-10-20");
    }

    #[test]
    fn test_update_field_syncs_date_buffer() {
        let mut form = AppointmentForm::new(date(2026, 10, 18));
        form.update_field(FieldUpdate::AppointmentDate(Some(date(2026, 11, 2))));
        assert_eq!(form.date_input(), "2026-11-02");
    }

    #[test]
    fn test_notes_accept_newlines() {
        let mut form = AppointmentForm::new(date(2026, 10, 18));
        focus(&mut form, FormField::Notes);
        type_text(&mut form, "Fren");
        assert_eq!(form.handle_enter(), FormEvent::None);
        type_text(&mut form, "sesi");
        assert_eq!(form.record().notes, "Fren\nsesi");
    }

    #[test]
    fn test_enter_advances_and_submits() {
        let mut form = AppointmentForm::new(date(2026, 10, 18));
        assert_eq!(form.handle_enter(), FormEvent::None);
        assert_eq!(form.focus(), FormFocus::Field(FormField::Phone));
        form.set_focus(FormFocus::Submit);
        assert_eq!(form.handle_enter(), FormEvent::SubmitRequested);
    }

    #[test]
    fn test_submit_missing_field_focuses_it() {
        let mut form = AppointmentForm::new(date(2026, 10, 18));
        form.update_field(FieldUpdate::CustomerName("Ali Veli".into()));
        form.set_focus(FormFocus::Submit);

        let err = form.submit().unwrap_err();
        assert_eq!(err, ConstraintViolation::MissingRequired(FormField::Phone));
        assert_eq!(form.focus(), FormFocus::Field(FormField::Phone));
        assert_eq!(form.record().customer_name, "Ali Veli");
    }

    #[test]
    fn test_submit_reports_malformed_date() {
        let mut form = AppointmentForm::new(date(2025, 1, 1));
        fill_scenario(&mut form);
        focus(&mut form, FormField::AppointmentDate);
        form.handle_backspace();
        assert_eq!(
            form.submit(),
            Err(ConstraintViolation::MalformedDate("2025-01-1".to_string()))
        );
    }

    #[test]
    fn test_submit_rejects_malformed_email() {
        let mut form = AppointmentForm::new(date(2025, 1, 1));
        fill_scenario(&mut form);
        form.update_field(FieldUpdate::Email("not an email".into()));
        form.set_focus(FormFocus::Submit);

        assert_eq!(
            form.submit(),
            Err(ConstraintViolation::MalformedEmail("not an email".to_string()))
        );
        assert_eq!(form.focus(), FormFocus::Field(FormField::Email));
        assert_eq!(form.record().email, "not an email");
        assert_eq!(form.record().customer_name, "Ali Veli");
    }

    #[test]
    fn test_submit_rejects_past_date() {
        let mut form = AppointmentForm::new(date(2025, 2, 1));
        fill_scenario(&mut form);
        assert!(matches!(
            form.submit(),
            Err(ConstraintViolation::DateBeforeMinimum { .. })
        ));
        assert!(!form.record().is_empty());
    }

    fn fill_scenario(form: &mut AppointmentForm) {
        for update in [
            FieldUpdate::CustomerName("Ali Veli".into()),
            FieldUpdate::Phone("05551234567".into()),
            FieldUpdate::CarModel("308".into()),
            FieldUpdate::EngineName("1.6 BlueHDi".into()),
            FieldUpdate::ModelYear(Some(2020)),
            FieldUpdate::Transmission(Transmission::parse("Manuel")),
            FieldUpdate::AppointmentDate(Some(date(2025, 1, 10))),
            FieldUpdate::AppointmentTime(TimeSlot::parse("10:00")),
            FieldUpdate::ServiceType("Periyodik Bakım".into()),
        ] {
            form.update_field(update);
        }
    }

    #[test]
    fn test_submit_resets_record() {
        let mut form = AppointmentForm::new(date(2025, 1, 1));
        fill_scenario(&mut form);
        form.update_field(FieldUpdate::HasLpg(true));
        form.set_focus(FormFocus::Submit);

        assert_eq!(form.submit(), Ok(()));
        assert!(form.record().is_empty());
        assert!(!form.record().has_lpg);
        assert_eq!(form.date_input(), "");
        assert_eq!(form.focus(), FormFocus::Field(FormField::CustomerName));
    }

    #[test]
    fn test_cycle_helper() {
        let options = [1, 2, 3];
        assert_eq!(cycle(None, &options, true), Some(1));
        assert_eq!(cycle(Some(3), &options, true), None);
        assert_eq!(cycle(None, &options, false), Some(3));
        assert_eq!(cycle(Some(9), &options, true), Some(1));
        assert_eq!(cycle::<i32>(None, &[], true), None);
    }
}
