//! `idx-tensor` - Row-major tensors handed from decoded samples to an
//! external numeric runtime.
//!
//! This crate provides:
//! - A `Tensor` type holding contiguous f32 data
//! - Shape utilities (element count, row-major strides)
//! - A `TensorConsumer` trait for the external inference collaborator
//! - Arg-max selection over a consumer's output

pub mod consumer;
pub mod error;
pub mod predict;
pub mod shape;
pub mod tensor;

// Re-export primary types at the crate root for convenience.
pub use consumer::TensorConsumer;
pub use error::{Result, TensorError};
pub use predict::{argmax, Prediction};
pub use shape::Shape;
pub use tensor::Tensor;
