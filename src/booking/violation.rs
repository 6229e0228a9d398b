use chrono::NaiveDate;
use thiserror::Error;

use super::record::FormField;

/// A control constraint that blocks submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("Lütfen bu alanı doldurun: {}", .0.label())]
    MissingRequired(FormField),

    #[error("Geçersiz e-posta adresi '{0}': ad@alan adı biçiminde girin")]
    MalformedEmail(String),

    #[error("Geçersiz tarih '{0}': YYYY-AA-GG biçiminde girin")]
    MalformedDate(String),

    #[error("Randevu tarihi {minimum} veya sonrası olmalıdır ({date} girildi)")]
    DateBeforeMinimum { date: NaiveDate, minimum: NaiveDate },
}

impl ConstraintViolation {
    /// The control that has to be corrected
    pub fn field(&self) -> FormField {
        match self {
            ConstraintViolation::MissingRequired(field) => *field,
            ConstraintViolation::MalformedEmail(_) => FormField::Email,
            ConstraintViolation::MalformedDate(_)
            | ConstraintViolation::DateBeforeMinimum { .. } => FormField::AppointmentDate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let missing = ConstraintViolation::MissingRequired(FormField::Phone);
        assert_eq!(missing.to_string(), "Lütfen bu alanı doldurun: Telefon");
        assert_eq!(missing.field(), FormField::Phone);

        let early = ConstraintViolation::DateBeforeMinimum {
            date: NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
            minimum: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        };
        assert!(early.to_string().contains("2025-01-10"));
        assert_eq!(early.field(), FormField::AppointmentDate);

        let email = ConstraintViolation::MalformedEmail("ali".into());
        assert!(email.to_string().contains("'ali'"));
        assert_eq!(email.field(), FormField::Email);
    }
}
