use crate::stats::record_guess;
use crate::validation::check;
use crate::{IdentifierFamily, ValidationOptions};

/// Guesses the family of `value`.
///
/// NIF, NIE and CIF are tried in that order with a required control character, and the first
/// one that validates wins. Anything else is `Other`, even when it would not pass the
/// `Other` format. An empty value has no family at all.
pub fn guess_family(value: &str) -> Option<IdentifierFamily> {
    let guess = if value.is_empty() {
        None
    } else {
        let options = ValidationOptions::default().require_control_character(true);
        let family = IdentifierFamily::GUESS_ORDER
            .into_iter()
            .find(|family| check(value, *family, &options).is_valid())
            .unwrap_or(IdentifierFamily::Other);
        Some(family)
    };
    record_guess(guess);
    guess
}
