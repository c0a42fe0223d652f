use crate::validation::check;
use crate::{IdentifierFamily, ValidationOptions};

/// Yes/no check of a candidate match, e.g. one found by a scanner regex.
pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

/// Spanish NIF: 8 digits followed by the letter at `number % 23` of the letter table.
pub struct NifChecksum;
/// Spanish NIE: X, Y or Z standing for 0, 1 or 2, then 7 digits and a NIF letter.
pub struct NieChecksum;
/// Spanish CIF: organization letter, 7 digits and a control letter or digit.
pub struct CifChecksum;

fn has_valid_control(value: &str, family: IdentifierFamily) -> bool {
    check(value, family, &ValidationOptions::default()).is_valid()
}

impl Validator for NifChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        has_valid_control(regex_match, IdentifierFamily::Nif)
    }
}

impl Validator for NieChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        has_valid_control(regex_match, IdentifierFamily::Nie)
    }
}

impl Validator for CifChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        has_valid_control(regex_match, IdentifierFamily::Cif)
    }
}

impl Validator for IdentifierFamily {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            IdentifierFamily::Nif => NifChecksum.is_valid_match(regex_match),
            IdentifierFamily::Nie => NieChecksum.is_valid_match(regex_match),
            IdentifierFamily::Cif => CifChecksum.is_valid_match(regex_match),
            IdentifierFamily::Other => has_valid_control(regex_match, IdentifierFamily::Other),
        }
    }
}
