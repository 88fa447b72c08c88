use std::slice::ChunksExact;

/// One decoded picture: a square grid of pixel intensities in row-major order.
///
/// Values are the raw bytes widened to f32, so every pixel lies in
/// `0.0..=255.0`. A sample cannot be modified after decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSample {
    side_length: usize,
    pixels: Vec<f32>,
}

impl ImageSample {
    /// Build a sample from `side_length * side_length` row-major bytes.
    ///
    /// # Panics
    /// Panics if `bytes.len() != side_length * side_length`.
    pub fn from_bytes(side_length: usize, bytes: &[u8]) -> Self {
        assert_eq!(
            bytes.len(),
            side_length * side_length,
            "sample of side {} needs {} bytes, got {}",
            side_length,
            side_length * side_length,
            bytes.len()
        );
        ImageSample {
            side_length,
            pixels: bytes.iter().map(|&b| f32::from(b)).collect(),
        }
    }

    /// Number of rows, equal to the number of columns.
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Pixel at `(row, col)`, or `None` outside the grid.
    pub fn pixel(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.side_length || col >= self.side_length {
            return None;
        }
        Some(self.pixels[row * self.side_length + col])
    }

    /// All pixels, row after row.
    pub fn as_slice(&self) -> &[f32] {
        &self.pixels
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows(&self) -> ChunksExact<'_, f32> {
        // chunks_exact rejects a zero chunk size; an empty grid yields no rows either way.
        self.pixels.chunks_exact(self.side_length.max(1))
    }
}
