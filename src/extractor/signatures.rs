// Signature fragments read off tree-sitter nodes: modifiers, parameters,
// return types, property types, accessor requirements.

use tree_sitter::Node;

use super::InterfaceExtractor;

impl InterfaceExtractor {
    /// Collect modifier tokens attached to a declaration, in source order.
    ///
    /// The Swift grammar groups them under a `modifiers` node whose children
    /// vary by declaration site (visibility, property, member, mutation
    /// modifiers and attributes). An absent `modifiers` node simply means no
    /// modifiers, never an error.
    pub(super) fn modifiers(&self, node: Node) -> Vec<String> {
        let mut modifiers = Vec::new();

        if let Some(modifiers_list) = node
            .children(&mut node.walk())
            .find(|c| c.kind() == "modifiers")
        {
            for child in modifiers_list.children(&mut modifiers_list.walk()) {
                if matches!(
                    child.kind(),
                    "visibility_modifier"
                        | "mutation_modifier"
                        | "declaration_modifier"
                        | "access_level_modifier"
                        | "property_modifier"
                        | "member_modifier"
                        | "inheritance_modifier"
                        | "public"
                        | "private"
                        | "internal"
                        | "fileprivate"
                        | "open"
                        | "final"
                        | "static"
                        | "override"
                        | "lazy"
                        | "weak"
                        | "unowned"
                        | "required"
                        | "convenience"
                        | "dynamic"
                        | "attribute"
                ) {
                    modifiers.push(self.node_text(&child));
                }
            }
        }

        modifiers
    }

    /// Rendered parameter clause of a function declaration, parentheses
    /// included. `None` when the node carries no parameter syntax at all.
    pub(super) fn parameters(&self, node: Node) -> Option<String> {
        // Parameters are individual nodes between ( and )
        let parameters: Vec<_> = node
            .children(&mut node.walk())
            .filter(|c| c.kind() == "parameter")
            .map(|p| self.node_text(&p))
            .collect();

        if !parameters.is_empty() {
            return Some(format!("({})", parameters.join(", ")));
        }

        // Bare parentheses indicate a function with no parameters
        if node.children(&mut node.walk()).any(|c| c.kind() == "(") {
            Some("()".to_string())
        } else {
            None
        }
    }

    /// Return type of a function declaration, without the arrow.
    pub(super) fn return_type(&self, node: Node) -> Option<String> {
        // The grammar exposes a return_type field on function declarations
        if let Some(return_type) = node.child_by_field_name("return_type") {
            return Some(self.node_text(&return_type));
        }

        // Function-typed returns carry their own node
        if let Some(return_clause) = node
            .children(&mut node.walk())
            .find(|c| c.kind() == "function_type")
        {
            if let Some(type_node) = return_clause
                .children(&mut return_clause.walk())
                .find(|c| c.kind() == "type")
            {
                return Some(self.node_text(&type_node));
            }
        }

        // Simple returns appear as a direct type node after the arrow token
        let children: Vec<_> = node.children(&mut node.walk()).collect();
        if let Some((index, type_node)) = children.iter().enumerate().find(|(_, c)| {
            matches!(
                c.kind(),
                "type" | "type_identifier" | "user_type" | "optional_type" | "tuple_type"
                    | "array_type" | "dictionary_type"
            )
        }) {
            let has_arrow = children
                .iter()
                .take(index)
                .any(|child| self.node_text(child).contains("->"));
            if has_arrow {
                return Some(self.node_text(type_node));
            }
        }

        None
    }

    /// Declared type of a property, read from its first type annotation.
    pub(super) fn property_type(&self, node: Node) -> Option<String> {
        node.children(&mut node.walk())
            .find(|c| c.kind() == "type_annotation")
            .and_then(|annotation| self.annotation_type(annotation))
    }

    /// Type node inside one `type_annotation`, without the colon.
    pub(super) fn annotation_type(&self, annotation: Node) -> Option<String> {
        annotation
            .children(&mut annotation.walk())
            .find(|c| {
                matches!(
                    c.kind(),
                    "type"
                        | "user_type"
                        | "primitive_type"
                        | "optional_type"
                        | "function_type"
                        | "tuple_type"
                        | "dictionary_type"
                        | "array_type"
                )
            })
            .map(|type_node| self.node_text(&type_node))
    }

    /// Getter/setter requirements of a protocol property (e.g. `{ get set }`).
    pub(super) fn accessor_requirements(&self, node: Node) -> Option<String> {
        node.children(&mut node.walk())
            .find(|c| c.kind() == "protocol_property_requirements")
            .map(|req| self.node_text(&req))
    }
}
