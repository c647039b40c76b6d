//! Client-side validation of the record form.
//!
//! Validation is field scoped: every problem lands in the slot of the field
//! that caused it, and a form with any slot filled never reaches the store.

use crate::{Level, NewRecord, Record};

pub const NAME_REQUIRED: &str = "Name is required";
pub const POSITION_REQUIRED: &str = "Job title is required";
pub const LEVEL_REQUIRED: &str = "Experience level is required";
pub const LEVEL_UNKNOWN: &str = "Experience level must be Intern, Junior or Senior";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    Name,
    Position,
    Level,
}

/// The editing buffer behind the form. `level` stays a string so a draft can
/// hold no level at all.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RecordForm {
    pub name: String,
    pub position: String,
    pub level: String,
}

impl RecordForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Position => self.position = value,
            Field::Level => self.level = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.position.is_empty() && self.level.is_empty()
    }
}

impl From<Record> for RecordForm {
    fn from(record: Record) -> Self {
        Self {
            name: record.name,
            position: record.position,
            level: record.level.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub position: Option<String>,
    pub level: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none() && self.level.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Position => self.position.as_deref(),
            Field::Level => self.level.as_deref(),
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Position => self.position = None,
            Field::Level => self.level = None,
        }
    }

    /// Filled slots in field order, for printing.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        [Field::Name, Field::Position, Field::Level]
            .into_iter()
            .filter_map(move |field| self.get(field).map(|message| (field, message)))
    }
}

/// Checks a form without touching it. The returned record carries the values
/// exactly as typed.
pub fn validate(form: &RecordForm) -> Result<NewRecord, FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some(NAME_REQUIRED.to_string());
    }

    if form.position.trim().is_empty() {
        errors.position = Some(POSITION_REQUIRED.to_string());
    }

    let level = if form.level.is_empty() {
        errors.level = Some(LEVEL_REQUIRED.to_string());
        None
    } else {
        match form.level.parse::<Level>() {
            Ok(level) => Some(level),
            Err(_) => {
                errors.level = Some(LEVEL_UNKNOWN.to_string());
                None
            }
        }
    };

    match level {
        Some(level) if errors.is_empty() => Ok(NewRecord {
            name: form.name.clone(),
            position: form.position.clone(),
            level,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, position: &str, level: &str) -> RecordForm {
        RecordForm {
            name: name.to_owned(),
            position: position.to_owned(),
            level: level.to_owned(),
        }
    }

    #[test]
    fn test_missing_name_only() {
        let errors = validate(&form("", "Engineer", "Senior")).unwrap_err();

        assert_eq!(
            errors,
            FieldErrors {
                name: Some("Name is required".to_owned()),
                ..FieldErrors::default()
            }
        );
    }

    #[test]
    fn test_blank_fields_each_reported() {
        let errors = validate(&form("   ", "\t", "")).unwrap_err();

        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Position), Some(POSITION_REQUIRED));
        assert_eq!(errors.get(Field::Level), Some(LEVEL_REQUIRED));
        assert_eq!(errors.iter().count(), 3);
    }

    #[test]
    fn test_unknown_level() {
        let errors = validate(&form("Ana", "Engineer", "Principal")).unwrap_err();

        assert_eq!(errors.get(Field::Level), Some(LEVEL_UNKNOWN));
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_valid_for_every_level() {
        for level in Level::ALL {
            let new_record = validate(&form("Ana", "Engineer", level.as_str())).unwrap();
            assert_eq!(new_record.level, level);
        }
    }

    #[test]
    fn test_does_not_normalize() {
        let typed = form("  Ana ", "Engineer", "Intern");

        let new_record = validate(&typed).unwrap();

        assert_eq!(new_record.name, "  Ana ");
        assert_eq!(typed.name, "  Ana ");
    }
}
