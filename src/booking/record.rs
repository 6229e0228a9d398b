use chrono::NaiveDate;

use super::options::TimeSlot;
use super::violation::ConstraintViolation;

/// Gearbox type of the customer's vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub const ALL: [Transmission; 2] = [Transmission::Manual, Transmission::Automatic];

    /// Label shown in the selection control
    pub fn label(&self) -> &'static str {
        match self {
            Transmission::Manual => "Manuel",
            Transmission::Automatic => "Otomatik",
        }
    }

    #[allow(dead_code)]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "manuel" | "manual" => Some(Transmission::Manual),
            "otomatik" | "automatic" => Some(Transmission::Automatic),
            _ => None,
        }
    }
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    MultiLineText,
    Select,
    Checkbox,
    Date,
}

/// Fields of an appointment request, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    CustomerName,
    Phone,
    Email,
    CarModel,
    EngineName,
    ModelYear,
    Transmission,
    ServiceType,
    HasLpg,
    AppointmentDate,
    AppointmentTime,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 12] = [
        FormField::CustomerName,
        FormField::Phone,
        FormField::Email,
        FormField::CarModel,
        FormField::EngineName,
        FormField::ModelYear,
        FormField::Transmission,
        FormField::ServiceType,
        FormField::HasLpg,
        FormField::AppointmentDate,
        FormField::AppointmentTime,
        FormField::Notes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::CustomerName => "Ad Soyad",
            FormField::Phone => "Telefon",
            FormField::Email => "E-posta",
            FormField::CarModel => "Aracın Modeli",
            FormField::EngineName => "Motor Adı",
            FormField::ModelYear => "Model Yılı",
            FormField::Transmission => "Vites Türü",
            FormField::ServiceType => "Servis Türü",
            FormField::HasLpg => "Aracımda LPG sistemi bulunuyor",
            FormField::AppointmentDate => "Randevu Tarihi",
            FormField::AppointmentTime => "Randevu Saati",
            FormField::Notes => "Ek Notlar",
        }
    }

    /// Hint shown while the control holds no value
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::CustomerName => "Adınızı ve soyadınızı girin",
            FormField::Phone => "0555 123 45 67",
            FormField::Email => "ornek@email.com",
            FormField::CarModel => "Örn: Peugeot 308",
            FormField::EngineName => "Örn: 1.6 BlueHDi",
            FormField::ModelYear => "Yıl Seçin",
            FormField::Transmission => "Vites Türü Seçin",
            FormField::ServiceType => "Örn: Periyodik Bakım, Motor Arızası, Fren Sistemi",
            FormField::HasLpg => "LPG sistemi bulunmuyorsa işaretlemeyin",
            FormField::AppointmentDate => "YYYY-AA-GG",
            FormField::AppointmentTime => "Saat Seçin",
            FormField::Notes => "Varsa özel taleplerinizi buraya yazabilirsiniz...",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(
            self,
            FormField::Email | FormField::HasLpg | FormField::Notes
        )
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::ModelYear | FormField::Transmission | FormField::AppointmentTime => {
                FieldKind::Select
            }
            FormField::HasLpg => FieldKind::Checkbox,
            FormField::AppointmentDate => FieldKind::Date,
            FormField::Notes => FieldKind::MultiLineText,
            _ => FieldKind::Text,
        }
    }

    /// Position in form order
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// A new value for exactly one field of an [`AppointmentRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    CustomerName(String),
    Phone(String),
    Email(String),
    CarModel(String),
    EngineName(String),
    ModelYear(Option<i32>),
    Transmission(Option<Transmission>),
    ServiceType(String),
    HasLpg(bool),
    AppointmentDate(Option<NaiveDate>),
    AppointmentTime(Option<TimeSlot>),
    Notes(String),
}

impl FieldUpdate {
    /// Build a text update for a free-text field
    pub fn text(field: FormField, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        match field {
            FormField::CustomerName => Some(FieldUpdate::CustomerName(value)),
            FormField::Phone => Some(FieldUpdate::Phone(value)),
            FormField::Email => Some(FieldUpdate::Email(value)),
            FormField::CarModel => Some(FieldUpdate::CarModel(value)),
            FormField::EngineName => Some(FieldUpdate::EngineName(value)),
            FormField::ServiceType => Some(FieldUpdate::ServiceType(value)),
            FormField::Notes => Some(FieldUpdate::Notes(value)),
            _ => None,
        }
    }

    /// The field this update writes
    pub fn field(&self) -> FormField {
        match self {
            FieldUpdate::CustomerName(_) => FormField::CustomerName,
            FieldUpdate::Phone(_) => FormField::Phone,
            FieldUpdate::Email(_) => FormField::Email,
            FieldUpdate::CarModel(_) => FormField::CarModel,
            FieldUpdate::EngineName(_) => FormField::EngineName,
            FieldUpdate::ModelYear(_) => FormField::ModelYear,
            FieldUpdate::Transmission(_) => FormField::Transmission,
            FieldUpdate::ServiceType(_) => FormField::ServiceType,
            FieldUpdate::HasLpg(_) => FormField::HasLpg,
            FieldUpdate::AppointmentDate(_) => FormField::AppointmentDate,
            FieldUpdate::AppointmentTime(_) => FormField::AppointmentTime,
            FieldUpdate::Notes(_) => FormField::Notes,
        }
    }
}

/// The in-progress booking held by the form.
///
/// Values are stored exactly as entered; nothing is trimmed or reformatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub customer_name: String,
    pub phone: String,
    pub email: String,
    pub car_model: String,
    pub engine_name: String,
    pub model_year: Option<i32>,
    pub transmission: Option<Transmission>,
    pub has_lpg: bool,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<TimeSlot>,
    pub service_type: String,
    pub notes: String,
}

impl AppointmentRequest {
    /// Write one field, leaving every other field untouched
    pub fn update(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::CustomerName(v) => self.customer_name = v,
            FieldUpdate::Phone(v) => self.phone = v,
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::CarModel(v) => self.car_model = v,
            FieldUpdate::EngineName(v) => self.engine_name = v,
            FieldUpdate::ModelYear(v) => self.model_year = v,
            FieldUpdate::Transmission(v) => self.transmission = v,
            FieldUpdate::ServiceType(v) => self.service_type = v,
            FieldUpdate::HasLpg(v) => self.has_lpg = v,
            FieldUpdate::AppointmentDate(v) => self.appointment_date = v,
            FieldUpdate::AppointmentTime(v) => self.appointment_time = v,
            FieldUpdate::Notes(v) => self.notes = v,
        }
    }

    /// Current value of a free-text field
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::CustomerName => Some(&self.customer_name),
            FormField::Phone => Some(&self.phone),
            FormField::Email => Some(&self.email),
            FormField::CarModel => Some(&self.car_model),
            FormField::EngineName => Some(&self.engine_name),
            FormField::ServiceType => Some(&self.service_type),
            FormField::Notes => Some(&self.notes),
            _ => None,
        }
    }

    /// Whether the field holds a value that satisfies "required"
    pub fn is_present(&self, field: FormField) -> bool {
        match field {
            FormField::ModelYear => self.model_year.is_some(),
            FormField::Transmission => self.transmission.is_some(),
            FormField::HasLpg => true,
            FormField::AppointmentDate => self.appointment_date.is_some(),
            FormField::AppointmentTime => self.appointment_time.is_some(),
            _ => self.text(field).is_some_and(|v| !v.is_empty()),
        }
    }

    /// Check the controls' own constraints, reporting the first failure in form order
    pub fn check_constraints(&self, today: NaiveDate) -> Result<(), ConstraintViolation> {
        for field in FormField::ALL {
            if field.is_required() && !self.is_present(field) {
                return Err(ConstraintViolation::MissingRequired(field));
            }
            if field == FormField::Email && !self.email.is_empty() && !is_email(&self.email) {
                return Err(ConstraintViolation::MalformedEmail(self.email.clone()));
            }
            if field == FormField::AppointmentDate {
                if let Some(date) = self.appointment_date {
                    if date < today {
                        return Err(ConstraintViolation::DateBeforeMinimum {
                            date,
                            minimum: today,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Same shape an email input accepts: `local@domain`, no whitespace
fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
