// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod classifier;
mod description;
mod error;
mod family;
mod format;
mod observability;
mod options;
mod secondary_validation;
mod stats;
mod tables;
mod validation;

// This is the public API of the library
pub use checksum::{
    cif_check_number, cif_control, cif_weighted_sum, expected_control, nif_control_letter,
    nif_payload, ExpectedControl,
};
pub use classifier::guess_family;
pub use description::{
    describe, ChecksumFormula, ErrorMessages, FamilyDescription, OrganizationGroup,
};
pub use error::{ErrorKind, ValidationError};
pub use family::{IdentifierFamily, UnknownDocumentType};
pub use format::{parse as parse_identifier, ParsedIdentifier};
pub use observability::labels::Labels;
pub use options::ValidationOptions;
pub use secondary_validation::{CifChecksum, NieChecksum, NifChecksum, Validator};
pub use stats::{CLASSIFIER_GUESSES, VALIDATION_COUNT};
pub use tables::{
    organization_category, OrganizationCategory, CIF_CHECK_CHARACTERS, CIF_ORGANIZATION_TABLE,
    NIE_LEADING_LETTERS, NIF_CHECK_LETTERS,
};
pub use validation::{
    validate, validate_cif, validate_guessed, validate_nie, validate_nif, validate_other,
    ValidationOutcome,
};
