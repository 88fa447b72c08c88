/// Side length of an MNIST digit image (28 x 28 pixels).
pub const MNIST_SIDE_LENGTH: usize = 28;

/// Decoder settings supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Required number of rows and columns per sample. The header's
    /// dimensions are checked against this value, never adopted from it.
    /// Must be non-zero.
    pub side_length: usize,
}

impl DecoderConfig {
    pub fn new(side_length: usize) -> Self {
        DecoderConfig { side_length }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig::new(MNIST_SIDE_LENGTH)
    }
}
