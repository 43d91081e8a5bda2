pub(crate) mod newick;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeParseError {
    #[error(
        "Tree on line {line} does not start with \"(\"; found: \"{found}\"."
    )]
    MissingOpenParenthesis { line: usize, found: String },
}
