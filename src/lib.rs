//! Swift public-interface extraction
//!
//! Reduces a Swift source file to its public API surface: top-level `class`,
//! `struct`, and `protocol` declarations with only their publicly visible
//! members. The condensed listing is meant to be concatenated by a downstream
//! aggregator into context for an AI assistant, where full implementation
//! bodies would waste tokens.
//!
//! Parsing is done with tree-sitter; the extractor only walks an
//! already-built syntax tree and never performs I/O of its own.
//!
//! # Example
//!
//! ```
//! use swift_interface::InterfaceExtractor;
//!
//! let source = "public class Greeter { public func greet() { } }";
//! let extractor = InterfaceExtractor::new(source);
//! let interface = extractor.extract().unwrap();
//! assert_eq!(interface, "class Greeter {\n    public func greet()\n}");
//! ```

pub mod error;
pub mod extractor;
pub mod language;

// Re-exports for convenience
pub use error::ParseError;
pub use extractor::{DeclKind, InterfaceBlock, InterfaceExtractor};
