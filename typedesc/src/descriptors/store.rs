use std::{
    collections::HashMap,
    fmt::Display,
    sync::atomic::{AtomicU32, Ordering},
};

use tracing::debug;

use super::{
    ArrayClassDescriptor, Descriptor, ReferenceDescriptor,
    primitives::{PrimitiveDescriptor, PrimitiveKind},
};
use crate::identifier::TypeName;

static STORE_ID: AtomicU32 = AtomicU32::new(0);

/// Identity handle of a descriptor: the store it lives in and its slot.
///
/// Two handles are equal exactly when they denote the same descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DescriptorId(u32, u32);

impl Display for DescriptorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "descriptor({}:{})", self.0, self.1)
    }
}

/// Append-only arena of descriptors. Slots `0..8` hold the primitives in
/// `PrimitiveKind` order.
#[derive(Debug)]
pub(crate) struct DescriptorStore {
    store_id: u32,
    items: Vec<Descriptor>,
    arrays: HashMap<DescriptorId, DescriptorId>,
    references: HashMap<TypeName, DescriptorId>,
}

impl DescriptorStore {
    pub(crate) fn new(capacity_hint: usize) -> Self {
        let mut items = Vec::with_capacity(PrimitiveKind::ALL.len() + capacity_hint);
        items.extend(
            PrimitiveKind::ALL.map(|kind| Descriptor::Primitive(PrimitiveDescriptor::of(kind))),
        );

        Self {
            store_id: STORE_ID.fetch_add(1, Ordering::AcqRel),
            items,
            arrays: HashMap::with_capacity(capacity_hint),
            references: HashMap::new(),
        }
    }

    pub(crate) const fn store_id(&self) -> u32 {
        self.store_id
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn primitive(store_id: u32, kind: PrimitiveKind) -> DescriptorId {
        DescriptorId(store_id, kind.index() as u32)
    }

    fn next_id(&self) -> DescriptorId {
        let index = u32::try_from(self.items.len()).expect("descriptor store overflow");

        DescriptorId(self.store_id, index)
    }

    fn push(&mut self, descriptor: Descriptor) -> DescriptorId {
        let id = self.next_id();
        self.items.push(descriptor);

        id
    }

    pub(crate) fn get(&self, id: DescriptorId) -> Descriptor {
        assert!(
            id.0 == self.store_id,
            "{id} does not belong to store {}",
            self.store_id
        );

        self.items[id.1 as usize]
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn cached_array(&self, component: DescriptorId) -> Option<DescriptorId> {
        self.arrays.get(&component).copied()
    }

    /// Returns the array descriptor for `component`, creating it if this is
    /// the first request. Check and insert happen under the same `&mut`.
    pub(crate) fn array_class_of(&mut self, component: DescriptorId) -> DescriptorId {
        if let Some(id) = self.cached_array(component) {
            return id;
        }

        let component_descriptor = self.get(component);
        let name = TypeName::parse(&format!("{}[]", component_descriptor.name()));
        let binary_name = TypeName::parse(&format!(
            "[{}",
            component_descriptor.array_element_code()
        ));

        let id = self.push(Descriptor::Array(ArrayClassDescriptor::new(
            component,
            name,
            binary_name,
        )));
        self.arrays.insert(component, id);

        debug!(%name, %binary_name, %id, "created array class descriptor");

        id
    }

    pub(crate) fn cached_reference(&self, name: TypeName) -> Option<DescriptorId> {
        self.references.get(&name).copied()
    }

    pub(crate) fn reference(&mut self, name: TypeName) -> DescriptorId {
        if let Some(id) = self.cached_reference(name) {
            return id;
        }

        let id = self.push(Descriptor::Reference(ReferenceDescriptor::new(name)));
        self.references.insert(name, id);

        debug!(%name, %id, "registered reference descriptor");

        id
    }
}
