use std::collections::BTreeSet;
use std::fmt;

/// What exactly went wrong while scanning a Newick string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended before a balanced tree terminated by `;` was seen
    UnexpectedEof,
    /// A `)` with no matching `(`, or structural garbage where `,`/`)` was expected
    UnbalancedParentheses,
    /// The token after `:` is not a valid floating point number
    InvalidBranchLength,
    /// A quoted label was opened but never closed
    UnterminatedQuotedName,
    /// Nothing between `(`/`,` and the next `,`/`)` (no implicit unnamed leaves)
    EmptySubtree,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseErrorKind::UnexpectedEof => "unexpected end of input",
            ParseErrorKind::UnbalancedParentheses => "unbalanced parentheses",
            ParseErrorKind::InvalidBranchLength => "invalid branch length",
            ParseErrorKind::UnterminatedQuotedName => "unterminated quoted name",
            ParseErrorKind::EmptySubtree => "empty subtree",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TreeError {
    /// Syntax error in Newick input; `offset` is the byte position of the fault
    Parse {
        kind: ParseErrorKind,
        offset: usize,
    },
    /// Operation requires a designated root but the tree has none
    NotRooted,
    /// A single name resolved against the tip set had no match
    UnknownTipName(String),
    /// One or more requested tip names were not found; no partial LCA is computed
    MissingTips(BTreeSet<String>),
    /// Tip count too small for the generator
    InvalidTipCount(usize),
    /// Structural misuse (cycle, detached node, empty query set, ...)
    LogicError(String),
}

impl TreeError {
    pub(crate) fn parse(kind: ParseErrorKind, offset: usize) -> Self {
        TreeError::Parse { kind, offset }
    }
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Parse { kind, offset } => {
                write!(f, "Parse error at byte {}: {}", offset, kind)
            }
            TreeError::NotRooted => write!(f, "Tree has no designated root"),
            TreeError::UnknownTipName(name) => {
                write!(f, "No tip named {:?} in this tree", name)
            }
            TreeError::MissingTips(names) => {
                write!(
                    f,
                    "Requested tips not found: {}",
                    names
                        .iter()
                        .map(|n| format!("{:?}", n))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            TreeError::InvalidTipCount(n) => {
                write!(f, "Cannot generate a tree with {} tips (minimum is 2)", n)
            }
            TreeError::LogicError(msg) => write!(f, "Tree logic error: {}", msg),
        }
    }
}

impl std::error::Error for TreeError {}
