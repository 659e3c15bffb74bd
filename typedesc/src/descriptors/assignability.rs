use super::{Descriptor, DescriptorId, references::ReferenceHierarchy, store::DescriptorStore};

/// Whether a value whose runtime class is `from` may be used where `to` is
/// expected.
///
/// Arrays of primitives are invariant. Arrays of reference-typed components
/// (classes or arrays) follow their components, recursively.
pub(crate) fn is_assignable<H: ReferenceHierarchy + ?Sized>(
    store: &DescriptorStore,
    from: DescriptorId,
    to: DescriptorId,
    hierarchy: &H,
) -> bool {
    if from == to {
        return true;
    }

    match (store.get(from), store.get(to)) {
        (Descriptor::Array(from), Descriptor::Array(to)) => {
            let from_component = store.get(from.component());
            let to_component = store.get(to.component());

            if from_component.is_reference_typed() && to_component.is_reference_typed() {
                is_assignable(store, from.component(), to.component(), hierarchy)
            } else {
                from.component() == to.component()
            }
        }
        (Descriptor::Reference(from), Descriptor::Reference(to)) => {
            hierarchy.is_subclass(from.name(), to.name())
        }
        (Descriptor::Array(_), Descriptor::Reference(to)) => {
            hierarchy.is_array_supertype(to.name())
        }
        (Descriptor::Primitive(_), _)
        | (_, Descriptor::Primitive(_))
        | (Descriptor::Reference(_), Descriptor::Array(_)) => false,
    }
}
