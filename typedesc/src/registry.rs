use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::{
    ast::{ElementType, TypeLiteral},
    config::RegistryConfig,
    descriptors::{
        Descriptor, DescriptorId, assignability,
        primitives::{DefaultValue, PrimitiveKind},
        references::ReferenceHierarchy,
        store::DescriptorStore,
    },
    errors::DescriptorError,
    identifier::TypeName,
    parser::parse_type_literal,
};

/// Owner of every descriptor a runtime hands out.
///
/// One registry per runtime; the same component always yields the same array
/// descriptor for the lifetime of the registry. Handles from one registry must
/// not be passed to another.
#[derive(Debug)]
pub struct ArrayClassRegistry {
    store_id: u32,
    store: RwLock<DescriptorStore>,
}

impl Default for ArrayClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrayClassRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    #[must_use]
    pub fn with_config(config: &RegistryConfig) -> Self {
        let store = DescriptorStore::new(config.capacity_hint());
        let registry = Self {
            store_id: store.store_id(),
            store: RwLock::new(store),
        };

        if config.preload_primitive_arrays() {
            for kind in PrimitiveKind::ALL {
                registry.primitive_array(kind);
            }
        }

        debug!(
            store = registry.store_id,
            preloaded = config.preload_primitive_arrays(),
            "array class registry ready"
        );

        registry
    }

    #[must_use]
    pub const fn primitive(&self, kind: PrimitiveKind) -> DescriptorId {
        DescriptorStore::primitive(self.store_id, kind)
    }

    /// Shorthand for `array_class_of(primitive(kind))`.
    pub fn primitive_array(&self, kind: PrimitiveKind) -> DescriptorId {
        self.array_class_of(self.primitive(kind))
    }

    /// The descriptor for the non-array class `name`, registered on first use.
    pub fn reference(&self, name: TypeName) -> DescriptorId {
        if let Some(id) = self.store.read().cached_reference(name) {
            return id;
        }

        self.store.write().reference(name)
    }

    pub fn class_named(&self, name: &str) -> DescriptorId {
        self.reference(TypeName::parse(name))
    }

    /// The array class whose elements are `component`.
    ///
    /// Created on the first request and cached; every later request for the
    /// same component returns the same handle, from any thread.
    pub fn array_class_of(&self, component: DescriptorId) -> DescriptorId {
        if let Some(id) = self.store.read().cached_array(component) {
            trace!(%component, %id, "array class cache hit");
            return id;
        }

        self.store.write().array_class_of(component)
    }

    /// Applies [`Self::array_class_of`] `dimensions` times.
    pub fn array_class_with_dimensions(
        &self,
        element: DescriptorId,
        dimensions: usize,
    ) -> DescriptorId {
        (0..dimensions).fold(element, |component, _| self.array_class_of(component))
    }

    pub fn resolve(&self, literal: &TypeLiteral) -> DescriptorId {
        let element = match literal.element {
            ElementType::Primitive(kind) => self.primitive(kind),
            ElementType::Reference(name) => self.reference(name),
        };

        self.array_class_with_dimensions(element, literal.dimensions)
    }

    /// Parses a type literal such as `int[][]` and resolves it.
    pub fn for_name(&self, literal: &str) -> Result<DescriptorId, DescriptorError> {
        let literal = parse_type_literal(literal)?;

        Ok(self.resolve(&literal))
    }

    #[must_use]
    pub fn descriptor(&self, id: DescriptorId) -> Descriptor {
        self.store.read().get(id)
    }

    #[must_use]
    pub fn name(&self, id: DescriptorId) -> TypeName {
        self.descriptor(id).name()
    }

    #[must_use]
    pub fn binary_name(&self, id: DescriptorId) -> TypeName {
        self.descriptor(id).binary_name()
    }

    #[must_use]
    pub fn is_array(&self, id: DescriptorId) -> bool {
        self.descriptor(id).is_array()
    }

    #[must_use]
    pub fn is_primitive(&self, id: DescriptorId) -> bool {
        self.descriptor(id).is_primitive()
    }

    #[must_use]
    pub fn component_type(&self, id: DescriptorId) -> Option<DescriptorId> {
        self.descriptor(id).component()
    }

    /// Number of array levels; 0 for primitives and references.
    #[must_use]
    pub fn dimensions(&self, id: DescriptorId) -> usize {
        let store = self.store.read();
        let mut dimensions = 0;
        let mut current = store.get(id);

        while let Some(component) = current.component() {
            dimensions += 1;
            current = store.get(component);
        }

        dimensions
    }

    /// The descriptor at the bottom of the component chain.
    #[must_use]
    pub fn element_type(&self, id: DescriptorId) -> DescriptorId {
        let store = self.store.read();
        let mut element = id;

        while let Some(component) = store.get(element).component() {
            element = component;
        }

        element
    }

    /// Default of the ultimate scalar component: the bottom primitive's zero,
    /// or `Null` when the chain ends at a reference type.
    #[must_use]
    pub fn default_value(&self, id: DescriptorId) -> DefaultValue {
        match self.descriptor(self.element_type(id)) {
            Descriptor::Primitive(primitive) => primitive.default_value(),
            Descriptor::Array(_) | Descriptor::Reference(_) => DefaultValue::Null,
        }
    }

    /// What each slot of a new array of `id` holds: `Null` unless the
    /// component is a primitive. `None` when `id` is not an array.
    #[must_use]
    pub fn slot_default_value(&self, id: DescriptorId) -> Option<DefaultValue> {
        let component = self.component_type(id)?;

        Some(match self.descriptor(component) {
            Descriptor::Primitive(primitive) => primitive.default_value(),
            Descriptor::Array(_) | Descriptor::Reference(_) => DefaultValue::Null,
        })
    }

    #[must_use]
    pub fn is_assignable(
        &self,
        from: DescriptorId,
        to: DescriptorId,
        hierarchy: &impl ReferenceHierarchy,
    ) -> bool {
        let store = self.store.read();

        assignability::is_assignable(&store, from, to, hierarchy)
    }

    /// Number of descriptors created so far, primitives included.
    #[must_use]
    pub fn descriptor_count(&self) -> usize {
        self.store.read().len()
    }
}
