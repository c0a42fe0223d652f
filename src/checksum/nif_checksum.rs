use crate::checksum::numeral_value;
use crate::tables::{nie_leading_letter_index, NIF_CHECK_LETTERS};

const NIE_NUMERAL_LENGTH: u32 = 7;

/// Numeric payload of a NIF, or of a NIE once its leading letter is replaced by the
/// letter's position in `X, Y, Z`.
pub fn nif_payload(leading_letter: Option<char>, numeral: &str) -> u32 {
    let numeral = numeral_value(numeral);
    match leading_letter.and_then(nie_leading_letter_index) {
        Some(index) => index * 10_u32.pow(NIE_NUMERAL_LENGTH) + numeral,
        None => numeral,
    }
}

pub fn nif_control_letter(payload: u32) -> char {
    NIF_CHECK_LETTERS[(payload % 23) as usize]
}
