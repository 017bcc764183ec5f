/// One row of the option table: a case-sensitive short switch (`-c`) and
/// the long name (`--config`) the option is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec<'a> {
    pub short: char,
    pub long: &'a str,
}

impl<'a> OptionSpec<'a> {
    pub const fn new(short: char, long: &'a str) -> Self {
        Self { short, long }
    }

    /// Whether a switch with `dashes` leading dashes followed by `name`
    /// selects this option.
    ///
    /// A single dash compares only the first character of `name` against
    /// `short`, so `-cfg` selects the `c` option. Two dashes compare the
    /// whole of `name` against `long` ignoring ASCII case. Any other dash
    /// count never matches.
    pub fn matches(&self, dashes: usize, name: &str) -> bool {
        match dashes {
            1 => name.chars().next() == Some(self.short),
            2 => name.eq_ignore_ascii_case(self.long),
            _ => false,
        }
    }
}

impl<'a> From<(char, &'a str)> for OptionSpec<'a> {
    fn from((short, long): (char, &'a str)) -> Self {
        Self::new(short, long)
    }
}
