use crate::observability::labels::Labels;
use crate::validation::ValidationOutcome;
use crate::IdentifierFamily;
use metrics::counter;

pub const VALIDATION_COUNT: &str = "validation.count";
pub const CLASSIFIER_GUESSES: &str = "classifier.guesses";

const FAMILY: &str = "family";
const OUTCOME: &str = "outcome";
const UNKNOWN_FAMILY: &str = "unknown";

pub fn record_validation(family: IdentifierFamily, outcome: &ValidationOutcome) {
    let family: &'static str = family.into();
    let labels = Labels::new(&[(FAMILY, family)]);
    counter!(
        VALIDATION_COUNT,
        labels.clone_with_labels(&[(OUTCOME, outcome.label())])
    )
    .increment(1);
}

pub fn record_guess(guess: Option<IdentifierFamily>) {
    let family: &'static str = guess.map(<&'static str>::from).unwrap_or(UNKNOWN_FAMILY);
    counter!(CLASSIFIER_GUESSES, Labels::new(&[(FAMILY, family)])).increment(1);
}
