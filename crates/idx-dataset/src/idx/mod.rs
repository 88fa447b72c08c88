pub mod header;
pub mod reader;

pub use header::{be_u32, IdxHeader, IDX_HEADER_LEN, IDX_IMAGE_MAGIC};
pub use reader::{decode, decode_bytes, decode_path, IdxImageReader};
