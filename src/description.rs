//! Serializable description of how a family is validated.
//!
//! Client-side validators are generated from this value rather than written by hand, so the
//! tables and patterns they use are always the ones the engines use.

use crate::format;
use crate::tables::{
    organization_letters, OrganizationCategory, CIF_CHECK_CHARACTERS, NIE_LEADING_LETTERS,
    NIF_CHECK_LETTERS,
};
use crate::{IdentifierFamily, ValidationError, ValidationOptions};
use serde::Serialize;
use strum::IntoEnumIterator;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FamilyDescription {
    pub family: IdentifierFamily,
    /// Regular expression the value must match, after uppercasing when `case_insensitive`.
    pub pattern: String,
    pub case_insensitive: bool,
    pub require_control_character: bool,
    pub auto_append_control_character: bool,
    pub formula: ChecksumFormula,
    pub messages: ErrorMessages,
}

/// How the control character is computed from the numeral.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChecksumFormula {
    /// `check_letters[payload % 23]`. A NIE leading letter is replaced by its position in
    /// `nie_leading_letters` before reading the payload.
    Mod23Letter {
        check_letters: &'static [char],
        nie_leading_letters: &'static [char],
    },
    /// Digits at even indices are doubled and their digits summed, the others are added.
    /// `n = 10 - sum % 10` selects `check_characters[n]` as the letter form and `n % 10`
    /// as the digit form.
    CifWeightedSum {
        check_characters: &'static [char],
        organizations: Vec<OrganizationGroup>,
    },
    None,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct OrganizationGroup {
    pub category: OrganizationCategory,
    pub letters: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ErrorMessages {
    pub structural: String,
    pub checksum: Option<String>,
}

pub fn describe(family: IdentifierFamily, options: &ValidationOptions) -> FamilyDescription {
    let formula = match family {
        IdentifierFamily::Nif | IdentifierFamily::Nie => ChecksumFormula::Mod23Letter {
            check_letters: &NIF_CHECK_LETTERS,
            nie_leading_letters: &NIE_LEADING_LETTERS,
        },
        IdentifierFamily::Cif => ChecksumFormula::CifWeightedSum {
            check_characters: &CIF_CHECK_CHARACTERS,
            organizations: OrganizationCategory::iter()
                .map(|category| OrganizationGroup {
                    category,
                    letters: organization_letters(category),
                })
                .collect(),
        },
        IdentifierFamily::Other => ChecksumFormula::None,
    };

    FamilyDescription {
        family,
        pattern: format::pattern(family, options),
        case_insensitive: options.case_insensitive,
        require_control_character: options.require_control_character,
        auto_append_control_character: options.auto_append_control_character,
        formula,
        messages: ErrorMessages {
            structural: ValidationError::Structural(family).to_string(),
            checksum: family
                .has_control_character()
                .then(|| ValidationError::Checksum(family).to_string()),
        },
    }
}

impl FamilyDescription {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
