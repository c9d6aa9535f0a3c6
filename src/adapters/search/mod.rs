//! Travel catalog search adapters.

mod elasticsearch;
mod static_catalog;

pub use elasticsearch::{ElasticsearchConfig, ElasticsearchSearch};
pub use static_catalog::StaticCatalogSearch;
