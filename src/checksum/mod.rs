mod cif_checksum;
mod nif_checksum;

pub use cif_checksum::{cif_check_number, cif_control, cif_weighted_sum};
pub use nif_checksum::{nif_control_letter, nif_payload};

use crate::format::ParsedIdentifier;
use crate::IdentifierFamily;

/// The control character a numeral calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedControl {
    /// Written when the control character is appended.
    pub canonical: char,
    /// Also accepted when reading a value, e.g. the digit form of a CIF control letter.
    pub alternate: Option<char>,
}

impl ExpectedControl {
    pub fn single(canonical: char) -> Self {
        ExpectedControl {
            canonical,
            alternate: None,
        }
    }

    pub fn accepts(&self, control: char) -> bool {
        control == self.canonical || self.alternate == Some(control)
    }
}

/// Computes the expected control character of a parsed value. `Other` documents have none.
pub fn expected_control(parsed: &ParsedIdentifier<'_>) -> Option<ExpectedControl> {
    match parsed.shape {
        IdentifierFamily::Nif | IdentifierFamily::Nie => Some(ExpectedControl::single(
            nif_control_letter(nif_payload(parsed.leading_letter, parsed.numeral)),
        )),
        IdentifierFamily::Cif => {
            let organization = parsed
                .leading_letter
                .unwrap_or_else(|| unreachable!("the CIF matcher always captures an organization"));
            Some(cif_control(organization, parsed.numeral))
        }
        IdentifierFamily::Other => None,
    }
}

/// Value of the decimal digits of `numeral`, other characters are skipped
fn numeral_value(numeral: &str) -> u32 {
    numeral
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0, |value, digit| value * 10 + digit)
}

/// Sum all the digits from a number
#[inline]
fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}

#[cfg(test)]
mod test {
    use crate::checksum::*;
    use crate::format::parse;
    use crate::ValidationOptions;

    #[test]
    fn test_sum_all_digits() {
        assert_eq!(sum_all_digits(0), 0);
        assert_eq!(sum_all_digits(7), 7);
        assert_eq!(sum_all_digits(14), 5);
        assert_eq!(sum_all_digits(18), 9);
    }

    #[test]
    fn test_numeral_value() {
        assert_eq!(numeral_value("00000000"), 0);
        assert_eq!(numeral_value("01234567"), 1_234_567);
        assert_eq!(numeral_value("99999999"), 99_999_999);
    }

    #[test]
    fn expected_control_per_family() {
        let options = ValidationOptions::default();

        let nif = parse(IdentifierFamily::Nif, "12345678Z", &options).unwrap();
        assert_eq!(expected_control(&nif), Some(ExpectedControl::single('Z')));

        let nie = parse(IdentifierFamily::Nie, "X0000000T", &options).unwrap();
        assert_eq!(expected_control(&nie), Some(ExpectedControl::single('T')));

        let cif = parse(IdentifierFamily::Cif, "B1234567D", &options).unwrap();
        let expected = expected_control(&cif).unwrap();
        assert!(expected.accepts('D'));
        assert!(expected.accepts('4'));
        assert!(!expected.accepts('E'));

        let other = parse(IdentifierFamily::Other, "AB12", &options).unwrap();
        assert_eq!(expected_control(&other), None);
    }
}
