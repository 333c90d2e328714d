pub mod app_config;
pub mod config;
pub mod dataset;
pub mod filters;
pub mod resort;

use thiserror::Error;

pub use app_config::{ApiConfig, AppConfig, EndpointPaths, Environment};
pub use config::{load_app_config, load_app_config_from_env, load_offline_app_config};
pub use dataset::load_dataset;
pub use filters::{distinct_states, filter_resorts, SearchFilters};
pub use resort::{
    Coordinates, Elevation, LiftTicketPrice, Lifts, Location, ResortRecord, SeasonDates,
    Snowmaking, Trails,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read dataset file {path}: {source}")]
    DatasetFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset file: {0}")]
    DatasetFileParse(#[from] serde_yaml::Error),
}
