//! Contact form state. There is no backend: a valid submission only
//! switches the modal to its thank-you view.

use thiserror::Error;

use crate::i18n::{ConceptOption, FormErrorText};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Breed,
    Concept,
    Email,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0:?} is required")]
    Required(Field),
    #[error("email address is malformed")]
    InvalidEmail,
    #[error("concept is not one of the offered options")]
    UnknownConcept,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidEmail => Field::Email,
            FieldError::UnknownConcept => Field::Concept,
        }
    }

    pub fn message<'a>(&self, text: &'a FormErrorText) -> &'a str {
        match self {
            FieldError::Required(_) => &text.required,
            FieldError::InvalidEmail => &text.email,
            FieldError::UnknownConcept => &text.concept,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub breed: String,
    pub concept: String,
    pub email: String,
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false)
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Breed => self.breed = value,
            Field::Concept => self.concept = value,
            Field::Email => self.email = value,
        }
    }

    /// Every problem, in field order.
    pub fn validate(&self, options: &[ConceptOption]) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::Required(Field::Name));
        }
        if self.breed.trim().is_empty() {
            errors.push(FieldError::Required(Field::Breed));
        }
        if self.concept.is_empty() {
            errors.push(FieldError::Required(Field::Concept));
        } else if !options.iter().any(|option| option.value == self.concept) {
            errors.push(FieldError::UnknownConcept);
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::Required(Field::Email));
        } else if !is_plausible_email(email) {
            errors.push(FieldError::InvalidEmail);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Focus target after Tab (or Shift+Tab) inside a trap of `count` elements.
/// `current` is `None` when focus sits outside the trap.
pub fn next_focus_index(current: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let next = match (current, backwards) {
        (None, false) => 0,
        (None, true) => count - 1,
        (Some(i), false) => (i + 1) % count,
        (Some(0), true) => count - 1,
        (Some(i), true) => (i - 1).min(count - 1),
    };
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<ConceptOption> {
        ["beach", "city"]
            .iter()
            .map(|value| ConceptOption {
                value: value.to_string(),
                label: value.to_uppercase(),
            })
            .collect()
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Bori".into(),
            breed: "Corgi".into(),
            concept: "beach".into(),
            email: "bori@example.com".into(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(filled().validate(&options()), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactForm::default().validate(&options()).unwrap_err();
        let fields: Vec<Field> = errors.iter().map(FieldError::field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Breed, Field::Concept, Field::Email]);
    }

    #[test]
    fn whitespace_only_is_empty() {
        let mut form = filled();
        form.set(Field::Name, "   ".into());
        assert_eq!(
            form.validate(&options()),
            Err(vec![FieldError::Required(Field::Name)])
        );
    }

    #[test]
    fn concept_must_be_offered() {
        let mut form = filled();
        form.set(Field::Concept, "volcano".into());
        assert_eq!(form.validate(&options()), Err(vec![FieldError::UnknownConcept]));
    }

    #[test]
    fn email_shapes() {
        for bad in ["bori", "bori@", "@example.com", "bori@example", "bo ri@example.com", "a@b@c.com", "bori@.com"] {
            let mut form = filled();
            form.set(Field::Email, bad.into());
            assert_eq!(
                form.validate(&options()),
                Err(vec![FieldError::InvalidEmail]),
                "{}",
                bad
            );
        }
        let mut form = filled();
        form.set(Field::Email, " bori@mail.example.co.kr ".into());
        assert_eq!(form.validate(&options()), Ok(()));
    }

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(next_focus_index(Some(3), 4, false), Some(0));
        assert_eq!(next_focus_index(Some(1), 4, false), Some(2));
        assert_eq!(next_focus_index(Some(0), 4, true), Some(3));
        assert_eq!(next_focus_index(Some(2), 4, true), Some(1));
        assert_eq!(next_focus_index(None, 4, false), Some(0));
        assert_eq!(next_focus_index(None, 4, true), Some(3));
        assert_eq!(next_focus_index(None, 0, false), None);
    }
}
