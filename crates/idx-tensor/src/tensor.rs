use crate::consumer::TensorConsumer;
use crate::error::{Result, TensorError};
use crate::shape::Shape;

/// A dense tensor of f32 values.
///
/// Data is contiguous and row-major. Computation is not performed here;
/// tensors are handed to a `TensorConsumer` which returns a new buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: Vec<f32>,
    shape: Shape,
}

impl Tensor {
    /// Create a new tensor from f32 data and a shape.
    ///
    /// # Panics
    /// Panics if `data.len() != shape.numel()`.
    pub fn new(data: Vec<f32>, shape: Shape) -> Self {
        assert_eq!(
            data.len(),
            shape.numel(),
            "data length {} does not match shape {:?} (numel={})",
            data.len(),
            shape,
            shape.numel()
        );
        Tensor { data, shape }
    }

    /// Returns a reference to the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the underlying row-major data.
    pub fn data_f32(&self) -> &[f32] {
        &self.data
    }

    /// Element at a multi-dimensional index, `None` when out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<f32> {
        self.shape.offset(index).map(|i| self.data[i])
    }

    /// Hand this tensor to an external consumer and wrap its output.
    ///
    /// The result is one-dimensional: `[output.len()]`. An empty output is
    /// reported as an error since no downstream selection can use it.
    pub fn feed(&self, consumer: &dyn TensorConsumer) -> Result<Tensor> {
        let output = consumer.consume(&self.shape, &self.data)?;
        if output.is_empty() {
            return Err(TensorError::EmptyOutput {
                consumer: consumer.name().to_string(),
            });
        }
        let len = output.len();
        Ok(Tensor::new(output, Shape::new(vec![len])))
    }
}
