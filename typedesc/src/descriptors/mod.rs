pub(crate) mod assignability;
pub mod primitives;
pub mod references;
pub(crate) mod store;

use std::fmt::{Display, Formatter};

use primitives::PrimitiveDescriptor;
pub use store::DescriptorId;

use crate::identifier::TypeName;

/// A class descriptor as seen by generated code.
///
/// Descriptors are immutable once created and are compared by their
/// [`DescriptorId`], never by value.
#[derive(Debug, Clone, Copy)]
pub enum Descriptor {
    Primitive(&'static PrimitiveDescriptor),
    Array(ArrayClassDescriptor),
    Reference(ReferenceDescriptor),
}

impl Descriptor {
    /// Display name, as in `int`, `int[][]` or `java.lang.String[]`.
    #[must_use]
    pub fn name(&self) -> TypeName {
        match self {
            Self::Primitive(primitive) => TypeName::parse(primitive.name()),
            Self::Array(array) => array.name,
            Self::Reference(reference) => reference.name,
        }
    }

    /// Reflective `getName` form: primitives and references keep their
    /// display name, arrays use the bracketed binary form (`[I`, `[[Ljava.lang.String;`).
    #[must_use]
    pub fn binary_name(&self) -> TypeName {
        match self {
            Self::Array(array) => array.binary_name,
            Self::Primitive(_) | Self::Reference(_) => self.name(),
        }
    }

    /// How this descriptor is spelled after the `[` of an enclosing array's
    /// binary name.
    pub(crate) fn array_element_code(&self) -> String {
        match self {
            Self::Primitive(primitive) => primitive.jvm_code().to_string(),
            Self::Array(array) => array.binary_name.raw(),
            Self::Reference(reference) => format!("L{};", reference.name),
        }
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Arrays and references share a uniform slot representation, which is
    /// what makes arrays of them covariant.
    #[must_use]
    pub const fn is_reference_typed(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Reference(_))
    }

    #[must_use]
    pub const fn component(&self) -> Option<DescriptorId> {
        match self {
            Self::Array(array) => Some(array.component),
            Self::Primitive(_) | Self::Reference(_) => None,
        }
    }
}

impl Display for Descriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayClassDescriptor {
    component: DescriptorId,
    name: TypeName,
    binary_name: TypeName,
}

impl ArrayClassDescriptor {
    pub(crate) const fn new(
        component: DescriptorId,
        name: TypeName,
        binary_name: TypeName,
    ) -> Self {
        Self {
            component,
            name,
            binary_name,
        }
    }

    #[must_use]
    pub const fn component(&self) -> DescriptorId {
        self.component
    }

    #[must_use]
    pub const fn name(&self) -> TypeName {
        self.name
    }

    #[must_use]
    pub const fn binary_name(&self) -> TypeName {
        self.binary_name
    }
}

/// A non-array class or interface handed over by the surrounding class
/// system. Only its name is known here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceDescriptor {
    name: TypeName,
}

impl ReferenceDescriptor {
    pub(crate) const fn new(name: TypeName) -> Self {
        Self { name }
    }

    #[must_use]
    pub const fn name(&self) -> TypeName {
        self.name
    }
}
