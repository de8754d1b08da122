pub mod app_config;
pub mod config;
pub mod details;
pub mod facets;
pub mod filter;
pub mod normalize;
pub mod record;
pub mod sort;
pub mod source;
pub mod view;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use details::{additional_details, DetailField};
pub use facets::{build_facet_index, Facet, FacetIndex, FacetOption, RATING_LADDER, SENTINEL};
pub use filter::{apply_filters, matches, FilterState};
pub use normalize::{normalize_row, normalize_rows, RawRow};
pub use record::{GeoPoint, Record};
pub use sort::{apply_sort, SortKey};
pub use source::load_records;
pub use view::{browse, BrowseResult};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("row \"{title}\" has no id")]
    MissingId { title: String },

    #[error("unknown facet: {0}")]
    UnknownFacet(String),

    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read records file {path}: {source}")]
    RecordsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse records file: {0}")]
    RecordsFileParse(#[source] serde_yaml::Error),
}
