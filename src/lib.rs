//! Minimal command line parsing driven by a table of short and long
//! option names.
//!
//! ```
//! use cmdline::{parse, OptionSpec};
//!
//! const SPECS: &[OptionSpec<'static>] = &[
//!     OptionSpec::new('c', "config"),
//!     OptionSpec::new('v', "verbose"),
//! ];
//!
//! let parsed = parse(["build", "--CONFIG", "release.toml", "-v"], SPECS);
//! assert!(parsed.is_success());
//! assert_eq!(parsed.option("config"), "release.toml");
//! assert!(parsed.has_option("verbose"));
//! assert_eq!(parsed.value(0), "build");
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
mod utils;

pub use error::ParseError;
pub use parser::{parse, parse_env, parse_os_args, OptionSpec, ParseResult};
