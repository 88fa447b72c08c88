use thiserror::Error;

#[derive(Error, Debug)]
pub enum TensorError {
    #[error("consumer '{consumer}' produced an empty output")]
    EmptyOutput { consumer: String },
    #[error("consumer '{consumer}' failed: {message}")]
    Consumer { consumer: String, message: String },
}

pub type Result<T> = std::result::Result<T, TensorError>;
