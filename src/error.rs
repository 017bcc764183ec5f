use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Dash-prefixed arguments that matched no entry of the option table,
    /// as given and in the order they were seen.
    #[error("Invalid option(s): {}", .0.join(" "))]
    InvalidOptions(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_invalid_option() {
        let err = ParseError::InvalidOptions(vec!["-z".to_owned()]);
        assert_eq!(err.to_string(), "Invalid option(s): -z");
    }

    #[test]
    fn invalid_options_keep_encounter_order() {
        let err = ParseError::InvalidOptions(vec![
            "--nope".to_owned(),
            "-z".to_owned(),
            "---config".to_owned(),
        ]);
        assert_eq!(err.to_string(), "Invalid option(s): --nope -z ---config");
    }
}
