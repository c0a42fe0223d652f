use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The kind of document an identifier belongs to.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdentifierFamily {
    /// Natural person: 8 digits and a control letter.
    Nif,
    /// Foreign resident: X, Y or Z, 7 digits and a control letter.
    Nie,
    /// Legal entity: organization letter, 7 digits and a control letter or digit.
    Cif,
    /// Any other document, 2 to 30 letters and digits.
    Other,
}

impl IdentifierFamily {
    /// Families tried in order when guessing the type of a value. `Other` is the fallback.
    pub const GUESS_ORDER: [IdentifierFamily; 3] = [
        IdentifierFamily::Nif,
        IdentifierFamily::Nie,
        IdentifierFamily::Cif,
    ];

    pub fn has_control_character(&self) -> bool {
        !matches!(self, IdentifierFamily::Other)
    }
}

/// Numeric document type codes, as stored by forms that keep the type in a select field.
impl From<IdentifierFamily> for u8 {
    fn from(family: IdentifierFamily) -> u8 {
        match family {
            IdentifierFamily::Nif => 1,
            IdentifierFamily::Nie => 2,
            IdentifierFamily::Cif => 3,
            IdentifierFamily::Other => 4,
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown document type code {0}")]
pub struct UnknownDocumentType(pub u8);

impl TryFrom<u8> for IdentifierFamily {
    type Error = UnknownDocumentType;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(IdentifierFamily::Nif),
            2 => Ok(IdentifierFamily::Nie),
            3 => Ok(IdentifierFamily::Cif),
            4 => Ok(IdentifierFamily::Other),
            _ => Err(UnknownDocumentType(code)),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::family::*;
    use strum::IntoEnumIterator;

    #[test]
    fn document_type_codes_round_trip() {
        for family in IdentifierFamily::iter() {
            let code: u8 = family.into();
            assert_eq!(IdentifierFamily::try_from(code), Ok(family));
        }
        assert_eq!(IdentifierFamily::try_from(0), Err(UnknownDocumentType(0)));
        assert_eq!(IdentifierFamily::try_from(5), Err(UnknownDocumentType(5)));
    }

    #[test]
    fn family_names() {
        assert_eq!(IdentifierFamily::Nie.to_string(), "nie");
        assert_eq!("cif".parse::<IdentifierFamily>(), Ok(IdentifierFamily::Cif));
        let name: &'static str = IdentifierFamily::Other.into();
        assert_eq!(name, "other");
        assert_eq!(
            serde_json::to_string(&IdentifierFamily::Nif).unwrap(),
            "\"nif\""
        );
    }

    #[test]
    fn other_has_no_control_character() {
        assert!(IdentifierFamily::Nif.has_control_character());
        assert!(!IdentifierFamily::Other.has_control_character());
    }
}
