use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid MAC address: {0}")]
    InvalidMac(String),
}
