use std::fmt::{Display, Formatter};

use typedesc_derive::PrimitiveTable;

/// The closed set of primitive element kinds. Declaration order fixes each
/// kind's slot in every descriptor store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PrimitiveTable)]
pub enum PrimitiveKind {
    #[primitive(name = "boolean", code = 'Z', width = 1)]
    Boolean,
    #[primitive(name = "char", code = 'C', width = 2)]
    Char,
    #[primitive(name = "byte", code = 'B', width = 1)]
    Byte,
    #[primitive(name = "short", code = 'S', width = 2)]
    Short,
    #[primitive(name = "int", code = 'I', width = 4)]
    Int,
    #[primitive(name = "long", code = 'J', width = 8)]
    Long,
    #[primitive(name = "float", code = 'F', width = 4)]
    Float,
    #[primitive(name = "double", code = 'D', width = 8)]
    Double,
}

impl PrimitiveKind {
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The value a freshly allocated array slot holds before the first store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Boolean(bool),
    // UTF-16 code unit
    Char(u16),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Null,
}

impl DefaultValue {
    #[must_use]
    pub const fn zero_of(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Boolean => Self::Boolean(false),
            PrimitiveKind::Char => Self::Char(0),
            PrimitiveKind::Byte => Self::Byte(0),
            PrimitiveKind::Short => Self::Short(0),
            PrimitiveKind::Int => Self::Int(0),
            PrimitiveKind::Long => Self::Long(0),
            PrimitiveKind::Float => Self::Float(0.0),
            PrimitiveKind::Double => Self::Double(0.0),
        }
    }
}

impl Display for DefaultValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Char(value) => write!(f, "'\\u{value:04x}'"),
            Self::Byte(value) => write!(f, "{value}"),
            Self::Short(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Long(value) => write!(f, "{value}L"),
            Self::Float(value) => write!(f, "{value:?}f"),
            Self::Double(value) => write!(f, "{value:?}"),
            Self::Null => write!(f, "null"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct PrimitiveDescriptor {
    kind: PrimitiveKind,
    name: &'static str,
    width: u8,
    default_value: DefaultValue,
}

static PRIMITIVES: [PrimitiveDescriptor; 8] = [
    PrimitiveDescriptor::new(PrimitiveKind::Boolean),
    PrimitiveDescriptor::new(PrimitiveKind::Char),
    PrimitiveDescriptor::new(PrimitiveKind::Byte),
    PrimitiveDescriptor::new(PrimitiveKind::Short),
    PrimitiveDescriptor::new(PrimitiveKind::Int),
    PrimitiveDescriptor::new(PrimitiveKind::Long),
    PrimitiveDescriptor::new(PrimitiveKind::Float),
    PrimitiveDescriptor::new(PrimitiveKind::Double),
];

impl PrimitiveDescriptor {
    const fn new(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            name: kind.name(),
            width: kind.width(),
            default_value: DefaultValue::zero_of(kind),
        }
    }

    /// The process-wide descriptor for `kind`. Always the same reference.
    #[must_use]
    pub fn of(kind: PrimitiveKind) -> &'static Self {
        &PRIMITIVES[kind.index()]
    }

    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Storage width in bytes.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    #[must_use]
    pub const fn jvm_code(&self) -> char {
        self.kind.jvm_code()
    }

    #[must_use]
    pub const fn default_value(&self) -> DefaultValue {
        self.default_value
    }
}
