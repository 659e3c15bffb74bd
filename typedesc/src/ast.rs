use std::fmt::{Display, Formatter};

use crate::{descriptors::primitives::PrimitiveKind, identifier::TypeName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Primitive(PrimitiveKind),
    Reference(TypeName),
}

impl Display for ElementType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primitive(kind) => write!(f, "{kind}"),
            Self::Reference(name) => write!(f, "{name}"),
        }
    }
}

/// A source-level type such as `int[][]` or `java.lang.String[]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeLiteral {
    pub element: ElementType,
    pub dimensions: usize,
}

impl TypeLiteral {
    #[must_use]
    pub const fn new(element: ElementType, dimensions: usize) -> Self {
        Self {
            element,
            dimensions,
        }
    }
}

impl Display for TypeLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.element, "[]".repeat(self.dimensions))
    }
}
