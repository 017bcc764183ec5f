use std::collections::BTreeMap;

use crate::error::ParseError;

/// Everything one pass over the argument vector produced.
///
/// Built once by [`parse`](crate::parse) and never changed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub(super) options: BTreeMap<String, String>,
    pub(super) values: Vec<String>,
    pub(super) invalid: Vec<String>,
}

impl ParseResult {
    /// Number of positional values.
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Positional value at `index`, or `""` past the end.
    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map_or("", String::as_str)
    }

    /// Compare the positional value at `index` with `other`, ignoring ASCII
    /// case. `false` past the end.
    pub fn value_equals(&self, index: usize, other: &str) -> bool {
        self.values
            .get(index)
            .is_some_and(|value| value.eq_ignore_ascii_case(other))
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Value given to the option registered under the long name `name`.
    ///
    /// Returns `""` both when the option was given without a value and when
    /// it was not given at all. Use [`has_option`](Self::has_option) or
    /// [`option_value`](Self::option_value) to tell the two apart.
    pub fn option(&self, name: &str) -> &str {
        self.option_value(name).unwrap_or_default()
    }

    /// Like [`option`](Self::option) but `None` when the option was never
    /// given.
    pub fn option_value(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// Lookup is by the long name exactly as written in the option table,
    /// case included.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Options that were given, ordered by long name.
    pub fn options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn invalid_options(&self) -> &[String] {
        &self.invalid
    }

    pub fn is_success(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn error(&self) -> Option<ParseError> {
        (!self.is_success()).then(|| ParseError::InvalidOptions(self.invalid.clone()))
    }

    /// Human readable description of every unrecognized option, empty when
    /// there were none.
    pub fn error_message(&self) -> String {
        self.error().map(|err| err.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ParseResult {
        ParseResult {
            options: BTreeMap::from([
                ("config".to_owned(), "filename0".to_owned()),
                ("reboot".to_owned(), String::new()),
            ]),
            values: vec!["SubCmd".to_owned(), "filename1".to_owned()],
            invalid: vec![],
        }
    }

    #[test]
    fn value_out_of_range_is_empty() {
        let result = sample();
        assert_eq!(result.value_count(), 2);
        assert_eq!(result.value(1), "filename1");
        assert_eq!(result.value(2), "");
        assert_eq!(result.value(usize::MAX), "");
    }

    #[test]
    fn value_lookup_is_repeatable() {
        let result = sample();
        assert_eq!(result.value(0), result.value(0));
    }

    #[test]
    fn value_equals_ignores_case() {
        let result = sample();
        assert!(result.value_equals(0, "subcmd"));
        assert!(result.value_equals(0, "SUBCMD"));
        assert!(!result.value_equals(0, "sub"));
        assert!(!result.value_equals(5, ""));
    }

    #[test]
    fn absent_and_empty_options_read_the_same() {
        let result = sample();
        assert_eq!(result.option("reboot"), "");
        assert_eq!(result.option("delete"), "");
        assert!(result.has_option("reboot"));
        assert!(!result.has_option("delete"));
        assert_eq!(result.option_value("reboot"), Some(""));
        assert_eq!(result.option_value("delete"), None);
    }

    #[test]
    fn option_lookup_is_case_sensitive() {
        let result = sample();
        assert_eq!(result.option("config"), "filename0");
        assert!(!result.has_option("CONFIG"));
    }

    #[test]
    fn options_iterate_in_name_order() {
        let result = sample();
        assert_eq!(
            result.options().collect::<Vec<_>>(),
            vec![("config", "filename0"), ("reboot", "")]
        );
    }

    #[test]
    fn no_invalid_options_means_success() {
        let result = sample();
        assert!(result.is_success());
        assert_eq!(result.error(), None);
        assert_eq!(result.error_message(), "");
    }

    #[test]
    fn invalid_options_fail_but_keep_partial_results() {
        let result = ParseResult {
            invalid: vec!["-z".to_owned()],
            ..sample()
        };
        assert!(!result.is_success());
        assert_eq!(
            result.error(),
            Some(ParseError::InvalidOptions(vec!["-z".to_owned()]))
        );
        assert_eq!(result.error_message(), "Invalid option(s): -z");
        assert_eq!(result.option("config"), "filename0");
    }
}
