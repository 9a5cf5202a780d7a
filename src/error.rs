// Error taxonomy for interface extraction
//
// Parsing is the only fallible step: traversal of a successfully parsed tree
// is a pure structural walk and cannot fail.

use thiserror::Error;

/// Failure to turn Swift source text into a usable syntax tree.
///
/// Surfaced to the caller with no partial output; the caller decides whether
/// to display the error, skip the file, or abort a batch.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The Swift grammar could not be loaded into the tree-sitter runtime.
    /// Tree-sitter is version-sensitive; this indicates a grammar/runtime
    /// mismatch, not bad input.
    #[error("failed to load Swift grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// The parser returned no tree at all (cancellation/timeout path).
    #[error("parser produced no syntax tree")]
    NoTree,

    /// The source text contains a syntax error. Position is the first
    /// erroneous or missing node (1-based line, 0-based column).
    #[error("Swift syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
}
