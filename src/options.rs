use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ProgramArguments {
    /// Output each argument's classification as it is encountered
    #[arg(short, long, default_value = "false")]
    pub dump_tokens: bool,

    /// Arguments handed to the option parser, given after `--`
    #[arg(last = true)]
    pub tokens: Vec<String>,
}

pub fn parse_args() -> ProgramArguments {
    ProgramArguments::parse()
}
