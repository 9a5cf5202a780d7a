//! Interface extraction
//!
//! Walks a parsed Swift syntax tree and collects one [`InterfaceBlock`] per
//! `class`, `struct`, and `protocol` declaration, keeping only publicly
//! visible members.
//!
//! The walk dispatches on a closed set of node kinds and threads an explicit
//! accumulator through the recursion instead of mutating extractor fields, so
//! exactly one block is "current" at any point and nested types cannot
//! corrupt the enclosing block: each nested type is collected as its own
//! independent block, ordered by declaration position.

mod block;
mod members;
mod signatures;

pub use block::{DeclKind, InterfaceBlock};

use tree_sitter::Node;

use crate::error::ParseError;
use crate::language;

/// Extractor for the public interface of one Swift source file.
///
/// Holds only the source text; every call builds its state from scratch, so
/// an instance is reusable and repeated extraction of the same input is
/// byte-identical.
pub struct InterfaceExtractor {
    content: String,
}

impl InterfaceExtractor {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Extract the public interface as a single rendered string: blocks in
    /// declaration order, separated by one blank line, surrounding
    /// whitespace trimmed. A file with no target declarations yields the
    /// empty string.
    pub fn extract(&self) -> Result<String, ParseError> {
        let blocks = self.extract_blocks()?;
        let rendered: Vec<String> = blocks.iter().map(|block| block.to_string()).collect();
        Ok(rendered.join("\n\n").trim().to_string())
    }

    /// Extract the public interface as structured blocks, for callers that
    /// aggregate or persist results instead of displaying flat text.
    pub fn extract_blocks(&self) -> Result<Vec<InterfaceBlock>, ParseError> {
        let tree = language::parse_source(&self.content)?;

        let mut blocks = Vec::new();
        self.visit_node(tree.root_node(), &mut blocks, None);

        tracing::debug!(
            "extracted {} interface blocks from {} bytes of Swift source",
            blocks.len(),
            self.content.len()
        );
        Ok(blocks)
    }

    fn visit_node(
        &self,
        node: Node,
        blocks: &mut Vec<InterfaceBlock>,
        mut current: Option<&mut InterfaceBlock>,
    ) {
        match node.kind() {
            // The Swift grammar reuses class_declaration for classes,
            // structs, enums, actors, and extensions; the keyword child
            // disambiguates.
            "class_declaration" => {
                if let Some(kind) = self.class_decl_kind(node) {
                    self.collect_type(node, kind, blocks);
                } else {
                    // Enum/extension/actor: no block of their own. Reset the
                    // member context so their members cannot leak into an
                    // enclosing block; nested target types still surface.
                    let mut cursor = node.walk();
                    for child in node.children(&mut cursor) {
                        self.visit_node(child, blocks, None);
                    }
                }
            }
            "protocol_declaration" => {
                self.collect_type(node, DeclKind::Protocol, blocks);
            }
            "function_declaration" | "protocol_function_declaration" => {
                if let Some(block) = current {
                    if let Some(line) = self.function_line(node, block.is_protocol()) {
                        block.push_member(line);
                    }
                }
                // Function bodies are irrelevant to the interface
            }
            "property_declaration" | "variable_declaration" | "protocol_property_declaration" => {
                if let Some(block) = current {
                    if let Some(line) = self.property_line(node, block.is_protocol()) {
                        block.push_member(line);
                    }
                }
                // Initializer expressions are irrelevant to the interface
            }
            _ => {
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    self.visit_node(child, blocks, current.as_deref_mut());
                }
            }
        }
    }

    /// Open a block for a type declaration, walk its body for members and
    /// nested types, then place the finished block at the position reserved
    /// on entry so sibling and nested blocks stay in declaration order.
    fn collect_type(&self, node: Node, kind: DeclKind, blocks: &mut Vec<InterfaceBlock>) {
        let slot = blocks.len();
        let mut block = InterfaceBlock::new(kind, self.type_name(node));

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit_node(child, blocks, Some(&mut block));
        }

        blocks.insert(slot, block);
    }

    fn class_decl_kind(&self, node: Node) -> Option<DeclKind> {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "struct" => return Some(DeclKind::Struct),
                "class" => return Some(DeclKind::Class),
                "enum" | "extension" | "actor" => return None,
                _ => {}
            }
        }
        Some(DeclKind::Class)
    }

    fn type_name(&self, node: Node) -> String {
        node.child_by_field_name("name")
            .or_else(|| {
                node.children(&mut node.walk())
                    .find(|c| matches!(c.kind(), "type_identifier" | "user_type"))
            })
            .map(|n| self.node_text(&n))
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Source text covered by a node, handling UTF-8 boundaries safely.
    pub(crate) fn node_text(&self, node: &Node) -> String {
        let content_bytes = self.content.as_bytes();
        let (start_byte, end_byte) = (node.start_byte(), node.end_byte());
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> String {
        InterfaceExtractor::new(source).extract().unwrap()
    }

    #[test]
    fn class_keeps_public_members_and_drops_private_ones() {
        let source = "\
public class TestClass {
    public var publicVar: Int
    private var privateVar: Int
    public func publicFunc() -> Int { return 0 }
    private func privateFunc() { }
}";
        let expected = "\
class TestClass {
    public var publicVar: Int
    public func publicFunc() -> Int
}";
        assert_eq!(extract(source), expected);
    }

    #[test]
    fn struct_filters_by_visibility_in_source_order() {
        let source = "\
struct TestStruct {
    private var privateVar: Int
    public var publicVar: Int
    private func privateFunc() {}
    public func publicFunc() -> Int { return 0 }
}";
        let expected = "\
struct TestStruct {
    public var publicVar: Int
    public func publicFunc() -> Int
}";
        assert_eq!(extract(source), expected);
    }

    #[test]
    fn protocol_members_are_included_unconditionally() {
        let source = "\
protocol TestProtocol {
    var publicVar: Int { get }
    func publicFunc() -> Int
}";
        let expected = "\
protocol TestProtocol {
    var publicVar: Int { get }
    func publicFunc() -> Int
}";
        assert_eq!(extract(source), expected);
    }

    #[test]
    fn multiple_declarations_each_get_their_own_block() {
        let source = "\
class TestClass {
    public func classFunc() -> Int { return 0 }
}

struct TestStruct {
    public var structVar: Int
}

protocol TestProtocol {
    func protocolFunc() -> Int
}";
        let expected = "\
class TestClass {
    public func classFunc() -> Int
}

struct TestStruct {
    public var structVar: Int
}

protocol TestProtocol {
    func protocolFunc() -> Int
}";
        assert_eq!(extract(source), expected);
    }

    #[test]
    fn file_without_target_declarations_yields_empty_string() {
        let source = "\
import Foundation

func freeFunction() -> Int { return 1 }

let topLevel = 42
";
        assert_eq!(extract(source), "");
    }

    #[test]
    fn enum_members_do_not_surface() {
        let source = "\
enum Direction {
    case north
    case south
    public func flipped() -> Direction { return self }
}";
        assert_eq!(extract(source), "");
    }

    #[test]
    fn type_with_no_qualifying_members_renders_empty_frame() {
        let source = "\
class Hidden {
    private var secret: Int
}";
        assert_eq!(extract(source), "class Hidden {\n}");
    }

    #[test]
    fn open_counts_as_public() {
        let source = "\
open class Base {
    open func overridable() { }
    internal func helper() { }
}";
        let expected = "\
class Base {
    open func overridable()
}";
        assert_eq!(extract(source), expected);
    }

    #[test]
    fn multiple_modifiers_all_render_before_the_keyword() {
        let source = "\
public class Factory {
    public static var shared: Factory
    public static func make() -> Factory { return Factory() }
}";
        let expected = "\
class Factory {
    public static var shared: Factory
    public static func make() -> Factory
}";
        assert_eq!(extract(source), expected);
    }

    #[test]
    fn multi_binding_property_keeps_every_binding() {
        let source = "\
public class Pair {
    public var a: Int, b: Int
    private var c: Int, d: Int
}";
        let expected = "\
class Pair {
    public var a: Int, b: Int
}";
        assert_eq!(extract(source), expected);
    }

    #[test]
    fn explicit_void_return_is_preserved() {
        let source = "\
public class Worker {
    public func fire() -> Void { }
    public func poke() { }
}";
        let expected = "\
class Worker {
    public func fire() -> Void
    public func poke()
}";
        assert_eq!(extract(source), expected);
    }

    #[test]
    fn nested_type_gets_an_independent_block_after_the_outer_one() {
        let source = "\
public class Outer {
    public var id: Int
    public class Inner {
        public func ping() { }
    }
    public func run() -> Int { return 0 }
}";
        let expected = "\
class Outer {
    public var id: Int
    public func run() -> Int
}

class Inner {
    public func ping()
}";
        assert_eq!(extract(source), expected);
    }

    #[test]
    fn extension_members_do_not_leak_into_output() {
        let source = "\
struct Point {
    public var x: Int
}

extension Point {
    public func moved() -> Point { return self }
}";
        let expected = "\
struct Point {
    public var x: Int
}";
        assert_eq!(extract(source), expected);
    }

    #[test]
    fn extraction_is_idempotent() {
        let source = "\
public class Stable {
    public func value() -> Int { return 7 }
}";
        let extractor = InterfaceExtractor::new(source);
        let first = extractor.extract().unwrap();
        let second = extractor.extract().unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn malformed_source_is_a_parse_error() {
        let extractor = InterfaceExtractor::new("class { public func");
        let err = extractor.extract().unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));
    }

    #[test]
    fn blocks_expose_structured_fields() {
        let source = "\
protocol Greeter {
    func greet(name: String) -> String
}";
        let blocks = InterfaceExtractor::new(source).extract_blocks().unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, DeclKind::Protocol);
        assert_eq!(blocks[0].name, "Greeter");
        assert_eq!(blocks[0].members, vec!["func greet(name: String) -> String"]);
        assert!(blocks[0].is_protocol());
    }
}
