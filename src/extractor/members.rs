// Member line rendering: functions and properties inside a type body.

use tree_sitter::Node;

use super::InterfaceExtractor;

/// Inclusion rule for class and struct members. Visibility modifiers may
/// carry a setter scope suffix (`public(set)`), which still counts.
pub(super) fn has_public_or_open(modifiers: &[String]) -> bool {
    modifiers
        .iter()
        .any(|m| matches!(m.split('(').next(), Some("public") | Some("open")))
}

impl InterfaceExtractor {
    /// Render a function declaration as a single interface line, or `None`
    /// when visibility filtering excludes it. Protocol members are included
    /// unconditionally: a protocol has no private members by definition.
    pub(super) fn function_line(&self, node: Node, in_protocol: bool) -> Option<String> {
        let modifiers = self.modifiers(node);
        if !in_protocol && !has_public_or_open(&modifiers) {
            return None;
        }

        let name = node
            .child_by_field_name("name")
            .or_else(|| {
                node.children(&mut node.walk())
                    .find(|c| c.kind() == "simple_identifier")
            })
            .map(|n| self.node_text(&n))
            .unwrap_or_else(|| "unknownFunction".to_string());

        let params = self.parameters(node).unwrap_or_else(|| "()".to_string());

        let mut line = String::new();
        if !modifiers.is_empty() {
            line.push_str(&modifiers.join(" "));
            line.push(' ');
        }
        line.push_str("func ");
        line.push_str(&name);
        line.push_str(&params);

        // A return clause only exists when the author wrote one, so an
        // explicit `-> Void` is kept verbatim.
        if let Some(return_type) = self.return_type(node) {
            line.push_str(" -> ");
            line.push_str(&return_type);
        }

        Some(line)
    }

    /// Render a property declaration as a single interface line, or `None`
    /// when visibility filtering excludes it. The binding keyword is always
    /// rendered as `var`; protocol requirements keep their accessor clause.
    pub(super) fn property_line(&self, node: Node, in_protocol: bool) -> Option<String> {
        let modifiers = self.modifiers(node);
        if !in_protocol && !has_public_or_open(&modifiers) {
            return None;
        }

        let bindings = self.property_bindings(node);
        let mut line = String::new();
        if !modifiers.is_empty() {
            line.push_str(&modifiers.join(" "));
            line.push(' ');
        }
        line.push_str("var ");
        if bindings.is_empty() {
            line.push_str("unknownProperty");
        } else {
            line.push_str(&bindings.join(", "));
        }

        if let Some(accessors) = self.accessor_requirements(node) {
            line.push(' ');
            line.push_str(&accessors);
        }

        Some(line)
    }

    /// All bindings of a property declaration, each rendered as
    /// `name[: Type]`. A declaration may bind several names at once
    /// (`var a: Int, b: Int`); the grammar lays them out as alternating
    /// pattern/type_annotation sibling children, so every pattern opens a
    /// new binding and a type annotation attaches to the most recent one.
    fn property_bindings(&self, node: Node) -> Vec<String> {
        let mut bindings = Vec::new();

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "pattern" => bindings.push(self.binding_name(child)),
                "type_annotation" => {
                    if let (Some(binding), Some(annotated)) =
                        (bindings.last_mut(), self.annotation_type(child))
                    {
                        binding.push_str(": ");
                        binding.push_str(&annotated);
                    }
                }
                _ => {}
            }
        }

        // Some declaration sites expose the bound pattern only as a name
        // field instead of a pattern child
        if bindings.is_empty() {
            if let Some(name_node) = node.child_by_field_name("name") {
                let mut binding = self.binding_name(name_node);
                if let Some(property_type) = self.property_type(node) {
                    binding.push_str(": ");
                    binding.push_str(&property_type);
                }
                bindings.push(binding);
            }
        }

        bindings
    }

    /// Bound identifier of one pattern node; protocol requirements nest it
    /// one level deeper.
    fn binding_name(&self, pattern: Node) -> String {
        if let Some(identifier) = pattern
            .children(&mut pattern.walk())
            .find(|c| c.kind() == "simple_identifier")
        {
            return self.node_text(&identifier);
        }
        self.node_text(&pattern)
    }
}
