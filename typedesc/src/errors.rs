use thiserror::Error;

use crate::identifier::TypeName;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("invalid type literal `{literal}`: {message}")]
    InvalidTypeLiteral { literal: String, message: String },
    #[error("class {from} cannot be cast to class {to}")]
    ClassCast { from: TypeName, to: TypeName },
    #[error("cannot store a value of type {value} into an array of {component}")]
    ArrayStore { value: TypeName, component: TypeName },
    #[error("{0} is not an array type")]
    NotAnArray(TypeName),
    #[error("negative array size: {0}")]
    NegativeArraySize(i32),
}
