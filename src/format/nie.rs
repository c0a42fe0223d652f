use super::{compile, control_slot, ParsedIdentifier};
use crate::tables::{NIE_LEADING_LETTERS, NIF_CHECK_LETTERS};
use crate::IdentifierFamily;
use lazy_static::lazy_static;
use regex::Regex;

const NUMERAL_LENGTH: usize = 7;

lazy_static! {
    static ref WITH_CONTROL: Regex = compile(&pattern(true));
    static ref OPTIONAL_CONTROL: Regex = compile(&pattern(false));
}

pub fn pattern(require_control: bool) -> String {
    let leading: String = NIE_LEADING_LETTERS.iter().collect();
    let letters: String = NIF_CHECK_LETTERS.iter().collect();
    format!(
        "^[{leading}][0-9]{{{NUMERAL_LENGTH}}}{}$",
        control_slot(&letters, require_control)
    )
}

pub fn parse(value: &str, require_control: bool) -> Option<ParsedIdentifier<'_>> {
    let regex: &Regex = if require_control {
        &WITH_CONTROL
    } else {
        &OPTIONAL_CONTROL
    };
    regex
        .is_match(value)
        .then(|| ParsedIdentifier::split(IdentifierFamily::Nie, value, true, NUMERAL_LENGTH))
}
