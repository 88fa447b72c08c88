use std::io::{self, Write};
use std::iter::FusedIterator;
use std::slice::ChunksExact;

use idx_tensor::{argmax, Prediction, Shape, Tensor, TensorConsumer, TensorError};

use crate::sample::ImageSample;

/// Glyph for a pixel with any ink.
const INK: &str = "X ";
/// Glyph for a zero pixel.
const BLANK: &str = "  ";

/// Flatten a sample into a row-major buffer of `side_length²` values.
///
/// This is the exact layout an inference runtime expects for a
/// `[side_length, side_length]` input.
pub fn to_flat_buffer(sample: &ImageSample) -> Vec<f32> {
    sample.as_slice().to_vec()
}

/// Wrap a sample as a 2-D `[side_length, side_length]` tensor.
pub fn to_tensor(sample: &ImageSample) -> Tensor {
    let side = sample.side_length();
    Tensor::new(to_flat_buffer(sample), Shape::matrix(side, side))
}

/// Lazily rendered text lines of a sample, one per row.
///
/// Produced by [`render_ascii`]; yields exactly `side_length` lines.
#[derive(Debug, Clone)]
pub struct AsciiRows<'a> {
    rows: ChunksExact<'a, f32>,
}

impl Iterator for AsciiRows<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.rows.next().map(|row| {
            row.iter()
                .map(|&p| if p > 0.0 { INK } else { BLANK })
                .collect()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for AsciiRows<'_> {}

impl FusedIterator for AsciiRows<'_> {}

/// Render a sample as text for debugging: `"X "` for each inked pixel,
/// `"  "` for each empty one.
pub fn render_ascii(sample: &ImageSample) -> AsciiRows<'_> {
    AsciiRows {
        rows: sample.rows(),
    }
}

/// Write the ASCII rendering of a sample to `out`, one line per row.
pub fn write_ascii<W: Write>(sample: &ImageSample, out: &mut W) -> io::Result<()> {
    for line in render_ascii(sample) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Run a sample through an external consumer and pick the best-scoring class.
pub fn classify(
    sample: &ImageSample,
    consumer: &dyn TensorConsumer,
) -> idx_tensor::Result<Prediction> {
    let output = to_tensor(sample).feed(consumer)?;
    argmax(output.data_f32()).ok_or_else(|| TensorError::Consumer {
        consumer: consumer.name().to_string(),
        message: "output holds only NaN scores".to_string(),
    })
}
