pub mod entities;
pub mod services;

pub const DEFAULT_USDA_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
pub const DEFAULT_USDA_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_USDA_TIMEOUT_SECS: u64 = 5;

#[derive(Clone, Debug)]
pub struct HeuksalConfig {
    pub usda: UsdaConfig,
}

#[derive(Clone, Debug)]
pub struct UsdaConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for UsdaConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_USDA_API_KEY.to_string(),
            base_url: DEFAULT_USDA_BASE_URL.to_string(),
            timeout_secs: DEFAULT_USDA_TIMEOUT_SECS,
        }
    }
}

/// Ruby-style capitalization: first character upper-cased, the rest lower-cased.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
