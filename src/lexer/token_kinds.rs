use logos::Logos;

/// Shape of the characters making up a single command line argument.
///
/// Only the leading run of `Dash` matters for classification. Everything
/// else is lumped into `Text`, so `--dry-run` lexes as
/// `Dash Dash Text Dash Text`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LeadKind {
    #[token("-")]
    Dash,

    #[regex("[^-]+")]
    Text,

    #[error]
    Error,
}

impl LeadKind {
    pub fn is_dash(&self) -> bool {
        matches!(self, Self::Dash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dashes_inside_text_are_separate_kinds() {
        let kinds: Vec<LeadKind> = LeadKind::lexer("--dry-run").collect();
        assert_eq!(
            kinds,
            vec![
                LeadKind::Dash,
                LeadKind::Dash,
                LeadKind::Text,
                LeadKind::Dash,
                LeadKind::Text,
            ]
        );
    }

    #[test]
    fn non_ascii_text_is_a_single_kind() {
        let kinds: Vec<LeadKind> = LeadKind::lexer("fichier été.txt").collect();
        assert_eq!(kinds, vec![LeadKind::Text]);
    }
}
