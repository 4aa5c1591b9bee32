use tracing::warn;

pub struct Config {
    pub data_dir: String,
}

impl Config {
    const DEFAULT_DATA_DIR: &str = "./data";

    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("CART_DATA_DIR").unwrap_or_else(|_| {
                warn!(
                    "CART_DATA_DIR not set, using default data directory '{}'",
                    Self::DEFAULT_DATA_DIR
                );
                Self::DEFAULT_DATA_DIR.to_string()
            }),
        }
    }
}
