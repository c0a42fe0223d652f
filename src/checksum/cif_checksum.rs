use crate::checksum::{sum_all_digits, ExpectedControl};
use crate::tables::{organization_category, OrganizationCategory, CIF_CHECK_CHARACTERS};

/// Weighted sum of a CIF numeral.
///
/// The official description counts positions from one and doubles the odd ones. Counting
/// from zero, as done here, that means doubling the digits at even indices. A doubled
/// digit contributes the sum of its own digits (7 -> 14 -> 5).
pub fn cif_weighted_sum(numeral: &str) -> u32 {
    numeral
        .chars()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(idx, digit)| {
            if idx % 2 == 0 {
                sum_all_digits(digit * 2)
            } else {
                digit
            }
        })
        .sum()
}

/// Index into `CIF_CHECK_CHARACTERS`, in `1..=10`. The digit form is this value mod 10.
pub fn cif_check_number(numeral: &str) -> u32 {
    10 - cif_weighted_sum(numeral) % 10
}

/// Control character of a CIF, written as the organization's category dictates.
pub fn cif_control(organization: char, numeral: &str) -> ExpectedControl {
    let check_number = cif_check_number(numeral);
    let letter = CIF_CHECK_CHARACTERS[check_number as usize];
    let digit = char::from_digit(check_number % 10, 10)
        .unwrap_or_else(|| unreachable!("a value mod 10 is a single digit"));

    match organization_category(organization) {
        Some(OrganizationCategory::ControlIsAlwaysLetter) => ExpectedControl::single(letter),
        Some(OrganizationCategory::ControlIsAlwaysDigit) => ExpectedControl::single(digit),
        Some(OrganizationCategory::ControlCanBeEither) => ExpectedControl {
            canonical: letter,
            alternate: Some(digit),
        },
        None => unreachable!("organization {organization} was accepted by the CIF matcher"),
    }
}
