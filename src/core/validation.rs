use std::fmt;

use super::models::{
    DraftForm,
    FormField,
    StudentFields,
};

pub const NAME_REQUIRED: &str = "Name is required";
pub const CLASS_REQUIRED: &str = "Class is required";
pub const AGE_REQUIRED: &str = "Age is required";
pub const AGE_NOT_POSITIVE: &str = "Age must be a positive number";
pub const AGE_NOT_WHOLE: &str = "Age must be a whole number";
pub const AGE_TOO_LARGE: &str = "Age is too large";

/// Inline messages shown next to each form field. An empty string means the
/// field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    name: String,
    class: String,
    age: String,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        let message = match field {
            FormField::Name => &self.name,
            FormField::Class => &self.class,
            FormField::Age => &self.age,
        };
        if message.is_empty() { None } else { Some(message.as_str()) }
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Class => &mut self.class,
            FormField::Age => &mut self.age,
        };
        *slot = message.into();
    }

    pub fn clear_field(&mut self, field: FormField) {
        self.set(field, String::new());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.class.is_empty() && self.age.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        FormField::ALL.into_iter().filter_map(move |field| self.get(field).map(|m| (field, m)))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.iter().map(|(_, message)| message).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Checks every field of the draft; all failures are reported together.
pub fn validate(draft: &DraftForm) -> Result<StudentFields, FormErrors> {
    let mut errors = FormErrors::default();

    if draft.name.trim().is_empty() {
        errors.set(FormField::Name, NAME_REQUIRED);
    }

    if draft.class.trim().is_empty() {
        errors.set(FormField::Class, CLASS_REQUIRED);
    }

    let age = match parse_age(&draft.age) {
        Ok(age) => Some(age),
        Err(message) => {
            errors.set(FormField::Age, message);
            None
        }
    };

    match age {
        Some(age) if errors.is_empty() => {
            Ok(StudentFields { name: draft.name.clone(), class: draft.class.clone(), age })
        }
        _ => Err(errors),
    }
}

/// Any numeric spelling is accepted ("16", "16.0", "1e1"). The value must be
/// finite, greater than zero and integral.
fn parse_age(text: &str) -> Result<u32, &'static str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AGE_REQUIRED);
    }

    let value = match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => return Err(AGE_NOT_POSITIVE),
    };

    if value.fract() != 0.0 {
        return Err(AGE_NOT_WHOLE);
    }
    if value > f64::from(u32::MAX) {
        return Err(AGE_TOO_LARGE);
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, class: &str, age: &str) -> DraftForm {
        DraftForm { name: name.to_string(), class: class.to_string(), age: age.to_string() }
    }

    #[test]
    fn accepts_complete_draft() {
        let fields = validate(&draft("An", "10A1", "16")).unwrap();
        assert_eq!(fields, StudentFields { name: "An".into(), class: "10A1".into(), age: 16 });
    }

    #[test]
    fn reports_every_failing_field() {
        let errors = validate(&draft("", "  ", "")).unwrap_err();
        assert_eq!(errors.get(FormField::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(FormField::Class), Some(CLASS_REQUIRED));
        assert_eq!(errors.get(FormField::Age), Some(AGE_REQUIRED));
    }

    #[test]
    fn rejects_non_positive_or_non_numeric_age() {
        for age in ["0", "-5", "abc", "-0.5", "inf", "NaN", "12abc"] {
            let errors = validate(&draft("An", "10A1", age)).unwrap_err();
            assert_eq!(errors.get(FormField::Age), Some(AGE_NOT_POSITIVE), "age {age:?}");
            assert_eq!(errors.get(FormField::Name), None);
        }
    }

    #[test]
    fn integral_spellings_of_age_are_accepted() {
        for (text, expected) in [("16.0", 16), ("1e1", 10), ("17.00", 17), ("+18", 18), (" 2E1 ", 20)] {
            assert_eq!(validate(&draft("An", "10A1", text)).unwrap().age, expected, "age {text:?}");
        }
    }

    #[test]
    fn fractional_age_is_rejected() {
        for age in ["1.5", "0.5", "16.25"] {
            let errors = validate(&draft("An", "10A1", age)).unwrap_err();
            assert_eq!(errors.get(FormField::Age), Some(AGE_NOT_WHOLE), "age {age:?}");
        }
    }

    #[test]
    fn age_beyond_u32_is_rejected() {
        let errors = validate(&draft("An", "10A1", "1e10")).unwrap_err();
        assert_eq!(errors.get(FormField::Age), Some(AGE_TOO_LARGE));
    }

    #[test]
    fn whitespace_only_age_is_missing() {
        let errors = validate(&draft("An", "10A1", "   ")).unwrap_err();
        assert_eq!(errors.get(FormField::Age), Some(AGE_REQUIRED));
    }

    #[test]
    fn age_one_parses() {
        assert_eq!(validate(&draft("An", "10A1", "1")).unwrap().age, 1);
        assert_eq!(validate(&draft("An", "10A1", " 17 ")).unwrap().age, 17);
    }

    #[test]
    fn name_and_class_are_kept_as_typed() {
        let fields = validate(&draft(" An ", "10A1 ", "16")).unwrap();
        assert_eq!(fields.name, " An ");
        assert_eq!(fields.class, "10A1 ");
    }

    #[test]
    fn display_joins_messages() {
        let errors = validate(&draft("", "10A1", "0")).unwrap_err();
        assert_eq!(errors.to_string(), format!("{NAME_REQUIRED}; {AGE_NOT_POSITIVE}"));
    }
}
