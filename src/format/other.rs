use super::{compile, ParsedIdentifier};
use crate::IdentifierFamily;
use lazy_static::lazy_static;
use regex::Regex;

const MIN_LENGTH: usize = 2;
const MAX_LENGTH: usize = 30;

lazy_static! {
    static ref OTHER: Regex = compile(&pattern());
}

pub fn pattern() -> String {
    format!("^[A-Z0-9]{{{MIN_LENGTH},{MAX_LENGTH}}}$")
}

/// Other documents have no control character: the whole value is the numeral.
pub fn parse(value: &str) -> Option<ParsedIdentifier<'_>> {
    OTHER
        .is_match(value)
        .then(|| ParsedIdentifier::split(IdentifierFamily::Other, value, false, value.len()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_other_documents() {
        let parsed = parse("PASSPORT123").unwrap();
        assert_eq!(parsed.numeral, "PASSPORT123");
        assert_eq!(parsed.control, None);
        assert_eq!(parsed.leading_letter, None);

        assert!(parse("AB").is_some());
        assert!(parse(&"9".repeat(30)).is_some());

        assert!(parse("A").is_none());
        assert!(parse(&"9".repeat(31)).is_none());
        assert!(parse("AB-12").is_none());
        assert!(parse("ab12").is_none());
        assert!(parse("ÑANDÚ").is_none());
    }
}
