use crate::checksum::expected_control;
use crate::classifier::guess_family;
use crate::format;
use crate::stats::record_validation;
use crate::{IdentifierFamily, ValidationError, ValidationOptions};
use std::borrow::Cow;

/// Result of validating a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The canonical form of the value: uppercase, with the control character appended
    /// when that was requested.
    Valid(String),
    Invalid(ValidationError),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    pub fn canonical(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid(canonical) => Some(canonical),
            ValidationOutcome::Invalid(_) => None,
        }
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self {
            ValidationOutcome::Valid(_) => None,
            ValidationOutcome::Invalid(error) => Some(*error),
        }
    }

    pub fn into_result(self) -> Result<String, ValidationError> {
        self.into()
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            ValidationOutcome::Valid(_) => "valid",
            ValidationOutcome::Invalid(ValidationError::Structural(_)) => "structural_error",
            ValidationOutcome::Invalid(ValidationError::Checksum(_)) => "checksum_error",
        }
    }
}

impl From<ValidationOutcome> for Result<String, ValidationError> {
    fn from(outcome: ValidationOutcome) -> Self {
        match outcome {
            ValidationOutcome::Valid(canonical) => Ok(canonical),
            ValidationOutcome::Invalid(error) => Err(error),
        }
    }
}

/// Validates `value` as a document of `family` and returns its canonical form.
pub fn validate(
    value: &str,
    family: IdentifierFamily,
    options: &ValidationOptions,
) -> ValidationOutcome {
    let outcome = check(value, family, options);
    record_validation(family, &outcome);
    outcome
}

pub fn validate_nif(value: &str, options: &ValidationOptions) -> ValidationOutcome {
    validate(value, IdentifierFamily::Nif, options)
}

pub fn validate_nie(value: &str, options: &ValidationOptions) -> ValidationOutcome {
    validate(value, IdentifierFamily::Nie, options)
}

pub fn validate_cif(value: &str, options: &ValidationOptions) -> ValidationOutcome {
    validate(value, IdentifierFamily::Cif, options)
}

pub fn validate_other(value: &str, options: &ValidationOptions) -> ValidationOutcome {
    validate(value, IdentifierFamily::Other, options)
}

/// Guesses the family of `value` and validates it as such. Empty values have no family.
pub fn validate_guessed(
    value: &str,
    options: &ValidationOptions,
) -> Option<(IdentifierFamily, ValidationOutcome)> {
    let family = guess_family(value)?;
    Some((family, validate(value, family, options)))
}

/// The validation pipeline, without recording metrics.
pub(crate) fn check(
    value: &str,
    family: IdentifierFamily,
    options: &ValidationOptions,
) -> ValidationOutcome {
    let normalized = if options.case_insensitive {
        Cow::Owned(value.to_ascii_uppercase())
    } else {
        Cow::Borrowed(value)
    };

    let Some(parsed) = format::parse(family, &normalized, options) else {
        return ValidationOutcome::Invalid(ValidationError::Structural(family));
    };

    let Some(expected) = expected_control(&parsed) else {
        return ValidationOutcome::Valid(parsed.as_str().to_owned());
    };

    match parsed.control {
        Some(control) if expected.accepts(control) => {
            ValidationOutcome::Valid(parsed.as_str().to_owned())
        }
        Some(_) => ValidationOutcome::Invalid(ValidationError::Checksum(family)),
        None if options.auto_append_control_character => {
            let mut canonical = String::with_capacity(parsed.as_str().len() + 1);
            canonical.push_str(parsed.as_str());
            canonical.push(expected.canonical);
            ValidationOutcome::Valid(canonical)
        }
        None => ValidationOutcome::Valid(parsed.as_str().to_owned()),
    }
}
