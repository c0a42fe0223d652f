//! Structural patterns of each identifier family.
//!
//! Every layout is fixed-width, so once a pattern accepts a value its fragments are sliced
//! out by position. The patterns are built from the lookup tables and are also what
//! [crate::describe] hands to client-side validators.

mod cif;
mod nie;
mod nif;
mod other;

use crate::{IdentifierFamily, ValidationOptions};
use regex::Regex;

/// A value accepted by a format matcher, split into its fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentifier<'a> {
    /// The layout that accepted the value. A NIE accepted by the NIF matcher reports `Nie`.
    pub shape: IdentifierFamily,
    /// NIE leading letter or CIF organization letter.
    pub leading_letter: Option<char>,
    pub numeral: &'a str,
    pub control: Option<char>,
    value: &'a str,
}

impl<'a> ParsedIdentifier<'a> {
    pub fn as_str(&self) -> &'a str {
        self.value
    }

    /// Splits a value laid out as an optional leading letter, a numeral of `numeral_len`
    /// digits and an optional control character. Only call on values a pattern accepted.
    fn split(
        shape: IdentifierFamily,
        value: &'a str,
        has_leading_letter: bool,
        numeral_len: usize,
    ) -> Self {
        let numeral_start = usize::from(has_leading_letter);
        let numeral_end = numeral_start + numeral_len;
        ParsedIdentifier {
            shape,
            leading_letter: value[..numeral_start].chars().next(),
            numeral: &value[numeral_start..numeral_end],
            control: value[numeral_end..].chars().next(),
            value,
        }
    }
}

/// Runs the matcher of `family` on an already case-normalized value.
pub fn parse<'a>(
    family: IdentifierFamily,
    value: &'a str,
    options: &ValidationOptions,
) -> Option<ParsedIdentifier<'a>> {
    let require_control = options.require_control_character;
    match family {
        IdentifierFamily::Nif => nif::parse(value, require_control).or_else(|| {
            if options.allow_nie_as_nif {
                nie::parse(value, require_control)
            } else {
                None
            }
        }),
        IdentifierFamily::Nie => nie::parse(value, require_control),
        IdentifierFamily::Cif => cif::parse(value, require_control),
        IdentifierFamily::Other => other::parse(value),
    }
}

/// Source of the pattern `family` is matched against with these options.
pub fn pattern(family: IdentifierFamily, options: &ValidationOptions) -> String {
    let require_control = options.require_control_character;
    match family {
        IdentifierFamily::Nif if options.allow_nie_as_nif => format!(
            "{}|{}",
            nif::pattern(require_control),
            nie::pattern(require_control)
        ),
        IdentifierFamily::Nif => nif::pattern(require_control),
        IdentifierFamily::Nie => nie::pattern(require_control),
        IdentifierFamily::Cif => cif::pattern(require_control),
        IdentifierFamily::Other => other::pattern(),
    }
}

fn control_slot(alphabet: &str, require_control: bool) -> String {
    if require_control {
        format!("[{alphabet}]")
    } else {
        format!("[{alphabet}]?")
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("identifier patterns are built from static tables")
}
