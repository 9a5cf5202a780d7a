// Data model for extracted interface listings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a Swift type declaration that contributes an interface block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Class,
    Struct,
    Protocol,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Class => "class",
            DeclKind::Struct => "struct",
            DeclKind::Protocol => "protocol",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered type declaration: the kind/name header plus the member lines
/// that survived visibility filtering, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceBlock {
    /// Declaration kind (class, struct, protocol)
    pub kind: DeclKind,
    /// Type name as it appears in code
    pub name: String,
    /// Rendered member lines (functions and properties)
    pub members: Vec<String>,
}

impl InterfaceBlock {
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Protocol members are implicitly public-facing, so they bypass the
    /// modifier check applied to class and struct members.
    pub fn is_protocol(&self) -> bool {
        self.kind == DeclKind::Protocol
    }

    pub fn push_member(&mut self, line: impl Into<String>) {
        self.members.push(line.into());
    }
}

impl fmt::Display for InterfaceBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} {{", self.kind, self.name)?;
        for member in &self.members {
            writeln!(f, "    {}", member)?;
        }
        write!(f, "}}")
    }
}
