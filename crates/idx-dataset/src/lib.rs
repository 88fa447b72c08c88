pub mod config;
pub mod convert;
pub mod error;
pub mod idx;
pub mod sample;

pub use config::{DecoderConfig, MNIST_SIDE_LENGTH};
pub use convert::{classify, render_ascii, to_flat_buffer, to_tensor, write_ascii, AsciiRows};
pub use error::{DecodeError, Result};
pub use idx::{decode, decode_bytes, decode_path, IdxHeader, IdxImageReader, IDX_IMAGE_MAGIC};
pub use sample::ImageSample;
