// shared/src/lib.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cart accessed outside provider scope")]
    OutsideProvider,
    #[error("storage: {0}")]
    Storage(String),
    #[error("serialization: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
