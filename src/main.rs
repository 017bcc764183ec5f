mod options;

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use cmdline::lexer::ArgToken;
use cmdline::{parse, OptionSpec};

const SPECS: &[OptionSpec<'static>] = &[
    OptionSpec::new('o', "option"),
    OptionSpec::new('a', "add"),
    OptionSpec::new('d', "delete"),
    OptionSpec::new('r', "reboot"),
    OptionSpec::new('c', "config"),
    OptionSpec::new('?', "help"),
];

const USAGE: &str = "Usage:
    cmdline-demo [--dump-tokens] -- [OPTIONS] <VALUE>...

    The `--` separator is required; everything after it is parsed.

    -o, --option
    -a, --add
    -d, --delete
    -r, --reboot
    -c, --config
    -?, --help - Show usage";

/// Parsing failed, the error went to `err`.
const EXIT_INVALID: u8 = 2;
/// Usage was printed.
const EXIT_USAGE: u8 = 1;

/// Parse `tokens` against the demo table and report the outcome.
/// Returns the process exit status.
fn run(tokens: &[String], out: &mut impl Write, err: &mut impl Write) -> io::Result<u8> {
    let parsed = parse(tokens, SPECS);
    if let Some(parse_err) = parsed.error() {
        writeln!(err, "{parse_err}")?;
        return Ok(EXIT_INVALID);
    }

    if parsed.has_option("help") || parsed.value_count() == 0 {
        writeln!(out, "{USAGE}")?;
        return Ok(EXIT_USAGE);
    }

    for (name, value) in parsed.options() {
        writeln!(out, "Option {name}: {value}")?;
    }
    for (i, value) in parsed.values().iter().enumerate() {
        writeln!(out, "Value {i}: {value}")?;
    }
    Ok(0)
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = options::parse_args();
    if args.dump_tokens {
        for tok in args.tokens.iter().map(|arg| ArgToken::classify(arg)) {
            eprintln!("{tok:?}");
        }
    }

    let status = run(&args.tokens, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(ExitCode::from(status))
}
