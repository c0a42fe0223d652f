use super::{compile, control_slot, ParsedIdentifier};
use crate::tables::{organization_letters, OrganizationCategory};
use crate::IdentifierFamily;
use lazy_static::lazy_static;
use regex::Regex;
use strum::IntoEnumIterator;

const NUMERAL_LENGTH: usize = 7;

lazy_static! {
    static ref WITH_CONTROL: Regex = compile(&pattern(true));
    static ref OPTIONAL_CONTROL: Regex = compile(&pattern(false));
}

/// One alternative per organization category, each with the control alphabet of that category.
pub fn pattern(require_control: bool) -> String {
    OrganizationCategory::iter()
        .map(|category| {
            format!(
                "^[{}][0-9]{{{NUMERAL_LENGTH}}}{}$",
                organization_letters(category),
                control_slot(category.control_alphabet(), require_control)
            )
        })
        .collect::<Vec<_>>()
        .join("|")
}

pub fn parse(value: &str, require_control: bool) -> Option<ParsedIdentifier<'_>> {
    let regex: &Regex = if require_control {
        &WITH_CONTROL
    } else {
        &OPTIONAL_CONTROL
    };
    regex
        .is_match(value)
        .then(|| ParsedIdentifier::split(IdentifierFamily::Cif, value, true, NUMERAL_LENGTH))
}
