use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub rate_limit_per_second: Option<u64>,
    pub body_limit_bytes: Option<usize>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Envy {
    pub const DEFAULT_PORT: u16 = 3000;
    pub const DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 5;
    // base64 photo payloads run about a third larger than the 1 MiB file cap
    pub const DEFAULT_BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(Self::DEFAULT_PORT)
    }

    pub fn rate_limit_per_second(&self) -> u64 {
        self.rate_limit_per_second
            .filter(|limit| *limit > 0)
            .unwrap_or(Self::DEFAULT_RATE_LIMIT_PER_SECOND)
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_bytes.unwrap_or(Self::DEFAULT_BODY_LIMIT_BYTES)
    }
}
