//! Classify a command line into options and positional values.
//!
//! The scan is a single left to right pass. After a recognized switch the
//! scanner waits for a value: the next bare argument becomes the option's
//! value, while another switch (or the end of input) gives it an empty one.
//!
//! ```text
//! prog subcmd --config filename0 --reboot -a -d filename1 filename2
//!
//!     option add    = ""
//!     option config = "filename0"
//!     option delete = "filename1"
//!     option reboot = ""
//!     value  subcmd
//!     value  filename2
//! ```

mod result;
mod spec;

use std::ffi::OsString;

use log::{debug, trace};

pub use result::ParseResult;
pub use spec::OptionSpec;

use crate::lexer::ArgToken;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum State<'spec> {
    Idle,
    /// A switch selected this option and no value has been seen yet.
    AwaitingValue(&'spec str),
}

struct Scanner<'spec> {
    specs: &'spec [OptionSpec<'spec>],
    state: State<'spec>,
    result: ParseResult,
}

impl<'spec> Scanner<'spec> {
    fn new(specs: &'spec [OptionSpec<'spec>]) -> Self {
        Self {
            specs,
            state: State::Idle,
            result: ParseResult::default(),
        }
    }

    fn step(&mut self, arg: &str) {
        let token = ArgToken::classify(arg);
        trace!("{token:?} in state {:?}", self.state);
        match (self.state, token) {
            (State::AwaitingValue(option), ArgToken::Bare(value)) => {
                self.set_option(option, value);
                self.state = State::Idle;
            }
            (State::Idle, ArgToken::Bare(value)) => {
                self.result.values.push(value.to_owned());
            }
            (pending, ArgToken::Switch { dashes, name, raw }) => {
                if let State::AwaitingValue(option) = pending {
                    self.set_option(option, "");
                }
                self.state = match self.specs.iter().find(|spec| spec.matches(dashes, name)) {
                    Some(spec) => State::AwaitingValue(spec.long),
                    None => {
                        debug!("unrecognized option {raw:?}");
                        self.result.invalid.push(raw.to_owned());
                        State::Idle
                    }
                };
            }
        }
    }

    fn finish(mut self) -> ParseResult {
        if let State::AwaitingValue(option) = self.state {
            self.set_option(option, "");
        }
        self.result
    }

    fn set_option(&mut self, option: &str, value: &str) {
        trace!("option {option:?} = {value:?}");
        // Last occurrence of a repeated option wins.
        self.result
            .options
            .insert(option.to_owned(), value.to_owned());
    }
}

/// Parse `args` against the option table `specs`.
///
/// `args` must not include the program name. Unrecognized switches never
/// stop the scan; they are collected and reported through
/// [`ParseResult::error`] while everything else is still classified.
pub fn parse<I>(args: I, specs: &[OptionSpec<'_>]) -> ParseResult
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut scanner = Scanner::new(specs);
    for arg in args {
        scanner.step(arg.as_ref());
    }
    scanner.finish()
}

/// Parse a full argument vector as the OS hands it over: the first entry is
/// the program name and is skipped. Arguments that are not valid UTF-8 are
/// converted lossily.
pub fn parse_os_args<I>(args: I, specs: &[OptionSpec<'_>]) -> ParseResult
where
    I: IntoIterator<Item = OsString>,
{
    parse(
        args.into_iter()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned()),
        specs,
    )
}

/// Parse the arguments of the running process.
pub fn parse_env(specs: &[OptionSpec<'_>]) -> ParseResult {
    parse_os_args(std::env::args_os(), specs)
}
