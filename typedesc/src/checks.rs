use crate::{
    descriptors::{DescriptorId, references::ReferenceHierarchy},
    errors::DescriptorError,
    registry::ArrayClassRegistry,
};

impl ArrayClassRegistry {
    /// Checked cast of a value whose runtime class is `value_type`.
    pub fn checked_cast(
        &self,
        value_type: DescriptorId,
        target: DescriptorId,
        hierarchy: &impl ReferenceHierarchy,
    ) -> Result<DescriptorId, DescriptorError> {
        if self.is_assignable(value_type, target, hierarchy) {
            return Ok(target);
        }

        Err(DescriptorError::ClassCast {
            from: self.binary_name(value_type),
            to: self.binary_name(target),
        })
    }

    /// Store check for `array[i] = value`. Needed because reference arrays
    /// are covariant: an `Object[]` alias may point at a `String[]`.
    pub fn check_store(
        &self,
        array: DescriptorId,
        value_type: DescriptorId,
        hierarchy: &impl ReferenceHierarchy,
    ) -> Result<(), DescriptorError> {
        let Some(component) = self.component_type(array) else {
            return Err(DescriptorError::NotAnArray(self.name(array)));
        };

        if self.is_assignable(value_type, component, hierarchy) {
            Ok(())
        } else {
            Err(DescriptorError::ArrayStore {
                value: self.name(value_type),
                component: self.name(component),
            })
        }
    }
}

/// Validates a requested array length before allocation.
pub fn check_length(length: i32) -> Result<usize, DescriptorError> {
    usize::try_from(length).map_err(|_| DescriptorError::NegativeArraySize(length))
}
