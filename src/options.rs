use serde::{Deserialize, Serialize};

/// How a value is validated. The defaults require the control character and accept lowercase input.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct ValidationOptions {
    /// The value must end with its control character, and that character must be correct.
    pub require_control_character: bool,

    /// When the control character is not required and the value has none, the computed one
    /// is appended to the canonical value.
    pub auto_append_control_character: bool,

    pub case_insensitive: bool,

    /// Only used when validating a NIF: NIE numbers are accepted as well.
    pub allow_nie_as_nif: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            require_control_character: true,
            auto_append_control_character: false,
            case_insensitive: true,
            allow_nie_as_nif: false,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_control_character(&self, require_control_character: bool) -> Self {
        self.mutate_clone(|x| x.require_control_character = require_control_character)
    }

    pub fn auto_append_control_character(&self, auto_append_control_character: bool) -> Self {
        self.mutate_clone(|x| x.auto_append_control_character = auto_append_control_character)
    }

    pub fn case_insensitive(&self, case_insensitive: bool) -> Self {
        self.mutate_clone(|x| x.case_insensitive = case_insensitive)
    }

    pub fn allow_nie_as_nif(&self, allow_nie_as_nif: bool) -> Self {
        self.mutate_clone(|x| x.allow_nie_as_nif = allow_nie_as_nif)
    }

    /// The control character is computed and appended instead of being read from the value.
    pub fn appending() -> Self {
        Self::default()
            .require_control_character(false)
            .auto_append_control_character(true)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = *self;
        modify(&mut clone);
        clone
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn should_have_default() {
        assert_eq!(
            ValidationOptions::new(),
            ValidationOptions {
                require_control_character: true,
                auto_append_control_character: false,
                case_insensitive: true,
                allow_nie_as_nif: false,
            }
        );
    }

    #[test]
    fn should_override_fields() {
        let options = ValidationOptions::new()
            .case_insensitive(false)
            .allow_nie_as_nif(true);
        assert!(!options.case_insensitive);
        assert!(options.allow_nie_as_nif);
        assert!(options.require_control_character);

        let appending = ValidationOptions::appending();
        assert!(!appending.require_control_character);
        assert!(appending.auto_append_control_character);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let options: ValidationOptions =
            serde_json::from_str(r#"{"allow_nie_as_nif": true}"#).unwrap();
        assert_eq!(options, ValidationOptions::new().allow_nie_as_nif(true));

        let options: ValidationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ValidationOptions::default());
    }

    #[test]
    fn serialized_form() {
        assert_tokens(
            &ValidationOptions::appending(),
            &[
                Token::Struct {
                    name: "ValidationOptions",
                    len: 4,
                },
                Token::Str("require_control_character"),
                Token::Bool(false),
                Token::Str("auto_append_control_character"),
                Token::Bool(true),
                Token::Str("case_insensitive"),
                Token::Bool(true),
                Token::Str("allow_nie_as_nif"),
                Token::Bool(false),
                Token::StructEnd,
            ],
        );
    }
}
