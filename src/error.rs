use crate::IdentifierFamily;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use thiserror::Error;

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The value does not have the layout of the family. No checksum was computed.
    Structural,
    /// The layout is right but the control character does not match the numeral.
    Checksum,
}

/// Why a value was rejected. The message is meant to be shown to the person who typed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("{}", pattern_error_message(.0))]
    Structural(IdentifierFamily),

    #[error("{}", control_error_message(.0))]
    Checksum(IdentifierFamily),
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Structural(_) => ErrorKind::Structural,
            ValidationError::Checksum(_) => ErrorKind::Checksum,
        }
    }

    pub fn family(&self) -> IdentifierFamily {
        match self {
            ValidationError::Structural(family) | ValidationError::Checksum(family) => *family,
        }
    }
}

fn pattern_error_message(family: &IdentifierFamily) -> &'static str {
    match family {
        IdentifierFamily::Nif => "The valid format for NIF is 8 digits followed by a valid letter.",
        IdentifierFamily::Nie => {
            "The valid format for NIE is a leading letter followed by 7 digits and an ending letter."
        }
        IdentifierFamily::Cif => {
            "The valid format for CIF is a letter followed by 7 digits and an ending control digit."
        }
        IdentifierFamily::Other => {
            "The valid format for document is a string formed by letters and numbers."
        }
    }
}

fn control_error_message(family: &IdentifierFamily) -> &'static str {
    match family {
        IdentifierFamily::Cif => "The control digit doesn't correspond to the number.",
        _ => "The letter doesn't correspond to the number.",
    }
}
