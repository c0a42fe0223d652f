use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Control letters of NIF and NIE numbers, indexed by `payload % 23`.
pub const NIF_CHECK_LETTERS: [char; 23] = [
    'T', 'R', 'W', 'A', 'G', 'M', 'Y', 'F', 'P', 'D', 'X', 'B', 'N', 'J', 'Z', 'S', 'Q', 'V', 'H',
    'L', 'C', 'K', 'E',
];

/// Letter form of a CIF control character, indexed by `10 - weighted_sum % 10`.
/// Slot 0 is never produced by the formula; slot 10 (`J`) stands for the digit `0`.
pub const CIF_CHECK_CHARACTERS: [char; 11] = ['0', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// A NIE's leading letter stands for the digit at its position in this list.
pub const NIE_LEADING_LETTERS: [char; 3] = ['X', 'Y', 'Z'];

/// How the control character of a CIF is written, depending on the kind of organization.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrganizationCategory {
    ControlIsAlwaysLetter,
    ControlIsAlwaysDigit,
    ControlCanBeEither,
}

impl OrganizationCategory {
    /// Characters allowed in the control slot of a CIF of this category.
    pub fn control_alphabet(&self) -> &'static str {
        match self {
            OrganizationCategory::ControlIsAlwaysLetter => "0A-J",
            OrganizationCategory::ControlIsAlwaysDigit => "0-9",
            OrganizationCategory::ControlCanBeEither => "0-9A-J",
        }
    }
}

/// Leading letters of a CIF and the category of organization each one denotes.
pub const CIF_ORGANIZATION_TABLE: [(char, OrganizationCategory); 20] = [
    ('A', OrganizationCategory::ControlIsAlwaysDigit),
    ('B', OrganizationCategory::ControlCanBeEither),
    ('C', OrganizationCategory::ControlCanBeEither),
    ('D', OrganizationCategory::ControlCanBeEither),
    ('E', OrganizationCategory::ControlIsAlwaysDigit),
    ('F', OrganizationCategory::ControlCanBeEither),
    ('G', OrganizationCategory::ControlCanBeEither),
    ('H', OrganizationCategory::ControlIsAlwaysDigit),
    ('J', OrganizationCategory::ControlCanBeEither),
    ('K', OrganizationCategory::ControlCanBeEither),
    ('L', OrganizationCategory::ControlCanBeEither),
    ('M', OrganizationCategory::ControlCanBeEither),
    ('N', OrganizationCategory::ControlIsAlwaysLetter),
    ('P', OrganizationCategory::ControlIsAlwaysLetter),
    ('Q', OrganizationCategory::ControlIsAlwaysLetter),
    ('R', OrganizationCategory::ControlIsAlwaysLetter),
    ('S', OrganizationCategory::ControlIsAlwaysLetter),
    ('U', OrganizationCategory::ControlCanBeEither),
    ('V', OrganizationCategory::ControlCanBeEither),
    ('W', OrganizationCategory::ControlIsAlwaysLetter),
];

pub fn organization_category(letter: char) -> Option<OrganizationCategory> {
    CIF_ORGANIZATION_TABLE
        .iter()
        .find(|(organization, _)| *organization == letter)
        .map(|(_, category)| *category)
}

/// All organization letters of a category, in table order.
pub fn organization_letters(category: OrganizationCategory) -> String {
    CIF_ORGANIZATION_TABLE
        .iter()
        .filter(|(_, c)| *c == category)
        .map(|(letter, _)| *letter)
        .collect()
}

pub fn nie_leading_letter_index(letter: char) -> Option<u32> {
    NIE_LEADING_LETTERS
        .iter()
        .position(|l| *l == letter)
        .map(|idx| idx as u32)
}
