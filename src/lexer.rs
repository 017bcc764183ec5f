mod token_kinds;

use logos::Logos;

pub use token_kinds::*;

use crate::utils::peeking_take_while::PeekingTakeWhileExt;

/// One argument from the process argument vector, split by its leading
/// dashes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArgToken<'input> {
    /// No leading dash. Either a positional value or the value of the
    /// option right before it.
    Bare(&'input str),
    /// One or more leading dashes.
    Switch {
        /// Number of leading `-` characters
        dashes: usize,
        /// Whatever follows the leading dashes, possibly empty
        name: &'input str,
        /// The argument exactly as it was given
        raw: &'input str,
    },
}

impl<'input> ArgToken<'input> {
    pub fn classify(arg: &'input str) -> Self {
        let kinds = &mut LeadKind::lexer(arg).peekable();
        let dashes = kinds.peeking_take_while(LeadKind::is_dash).count();
        if dashes == 0 {
            Self::Bare(arg)
        } else {
            // `-` is a single byte, so the dash count is also a byte offset.
            Self::Switch {
                dashes,
                name: &arg[dashes..],
                raw: arg,
            }
        }
    }

    pub fn raw(&self) -> &'input str {
        match self {
            Self::Bare(raw) | Self::Switch { raw, .. } => raw,
        }
    }
}
