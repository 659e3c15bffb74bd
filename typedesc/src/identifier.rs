use std::fmt::Display;
use std::fmt::Formatter;
use std::sync::LazyLock;

use parking_lot::RwLock;
use string_interner::StringInterner;
use string_interner::backend::StringBackend;
use string_interner::symbol::SymbolU32;

/// An interned type name: a reference class name (`java.lang.String`) or a
/// derived descriptor name (`int[][]`, `[[I`).
///
/// Interning keeps descriptors `Copy` and makes name comparison a symbol
/// comparison.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct TypeName(SymbolU32);

static NAMES: LazyLock<RwLock<StringInterner<StringBackend>>> =
    LazyLock::new(|| RwLock::new(StringInterner::default()));

pub static OBJECT: LazyLock<TypeName> = LazyLock::new(|| TypeName::parse("java.lang.Object"));
pub static CLONEABLE: LazyLock<TypeName> =
    LazyLock::new(|| TypeName::parse("java.lang.Cloneable"));
pub static SERIALIZABLE: LazyLock<TypeName> =
    LazyLock::new(|| TypeName::parse("java.io.Serializable"));

impl TypeName {
    pub fn parse(raw: &str) -> Self {
        if let Some(symbol) = NAMES.read().get(raw) {
            return Self(symbol);
        }

        Self(NAMES.write().get_or_intern(raw))
    }

    #[must_use]
    pub fn raw(self) -> String {
        NAMES
            .read()
            .resolve(self.0)
            .expect("type names are only created by the interner")
            .to_string()
    }
}

impl std::fmt::Debug for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeName({self})")
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw())
    }
}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        NAMES.read().get(other) == Some(self.0)
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}
