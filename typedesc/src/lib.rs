#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod checks;

pub mod ast;
pub mod config;
pub mod descriptors;
pub mod errors;
pub mod identifier;
pub mod parser;
pub mod registry;

pub use checks::check_length;
pub use config::RegistryConfig;
pub use descriptors::{
    ArrayClassDescriptor, Descriptor, DescriptorId, ReferenceDescriptor,
    primitives::{DefaultValue, PrimitiveDescriptor, PrimitiveKind},
    references::{ClassHierarchy, ReferenceHierarchy},
};
pub use errors::DescriptorError;
pub use identifier::TypeName;
pub use registry::ArrayClassRegistry;
