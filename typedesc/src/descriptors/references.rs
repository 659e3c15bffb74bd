use std::collections::{HashMap, HashSet};

use crate::identifier::{CLONEABLE, OBJECT, SERIALIZABLE, TypeName};

/// The subtyping relation of the surrounding class system, for non-array
/// reference types.
pub trait ReferenceHierarchy {
    fn is_subclass(&self, sub: TypeName, sup: TypeName) -> bool;

    /// Whether every array type is assignable to `class`.
    fn is_array_supertype(&self, class: TypeName) -> bool {
        class == *OBJECT || class == *CLONEABLE || class == *SERIALIZABLE
    }
}

impl<F: Fn(TypeName, TypeName) -> bool> ReferenceHierarchy for F {
    fn is_subclass(&self, sub: TypeName, sup: TypeName) -> bool {
        self(sub, sup)
    }
}

/// A class hierarchy declared up front, one class at a time.
///
/// Reflexive and transitive; every class is a subclass of `java.lang.Object`.
#[derive(Debug, Clone, Default)]
pub struct ClassHierarchy {
    supertypes: HashMap<TypeName, Vec<TypeName>>,
}

impl ClassHierarchy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(
        &mut self,
        class: TypeName,
        supertypes: impl IntoIterator<Item = TypeName>,
    ) -> &mut Self {
        self.supertypes.entry(class).or_default().extend(supertypes);

        self
    }

    #[must_use]
    pub fn with(mut self, class: &str, supertypes: &[&str]) -> Self {
        self.declare(
            TypeName::parse(class),
            supertypes.iter().map(|x| TypeName::parse(x)),
        );

        self
    }

    pub fn direct_supertypes(&self, class: TypeName) -> impl Iterator<Item = TypeName> + '_ {
        self.supertypes.get(&class).into_iter().flatten().copied()
    }
}

impl ReferenceHierarchy for ClassHierarchy {
    fn is_subclass(&self, sub: TypeName, sup: TypeName) -> bool {
        if sub == sup || sup == *OBJECT {
            return true;
        }

        let mut pending = vec![sub];
        let mut seen = HashSet::new();

        while let Some(class) = pending.pop() {
            if !seen.insert(class) {
                continue;
            }

            for supertype in self.direct_supertypes(class) {
                if supertype == sup {
                    return true;
                }

                pending.push(supertype);
            }
        }

        false
    }
}
