use std::fmt::Debug;

use crate::error::Result;
use crate::shape::Shape;

/// Trait for the external numeric runtime that accepts decoded samples.
///
/// Model loading and session execution live outside this workspace. An
/// implementation receives the input shape and its row-major data and
/// returns a flat output buffer (for a classifier, one score per class).
pub trait TensorConsumer: Send + Sync + Debug {
    /// Returns the name of this consumer (e.g. a model signature key).
    fn name(&self) -> &str;

    /// Run the consumer on one input.
    ///
    /// - `shape`: dimensions of the input, e.g. `[28, 28]`
    /// - `data`: row-major input of `shape.numel()` elements
    /// - Returns: the consumer's flat output
    fn consume(&self, shape: &Shape, data: &[f32]) -> Result<Vec<f32>>;
}
