use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `INFLUENCER_PULSE__` and overridable from the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory holding the four CSV tables, relative to the working dir.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Knobs for the synthetic dataset generator.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_num_influencers")]
    pub num_influencers: usize,
    #[serde(default = "default_min_posts")]
    pub min_posts_per_influencer: usize,
    #[serde(default = "default_max_posts")]
    pub max_posts_per_influencer: usize,
    /// Posts are timestamped within the last `window_days` days.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
    /// Fixed RNG seed for reproducible datasets. Random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

// Default functions
fn default_data_dir() -> String {
    "data".to_string()
}
fn default_num_influencers() -> usize {
    50
}
fn default_min_posts() -> usize {
    3
}
fn default_max_posts() -> usize {
    8
}
fn default_window_days() -> i64 {
    180
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_influencers: default_num_influencers(),
            min_posts_per_influencer: default_min_posts(),
            max_posts_per_influencer: default_max_posts(),
            window_days: default_window_days(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("INFLUENCER_PULSE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
