pub mod catalog_editor;
pub mod catalog_queries;
pub mod catalog_stats;

pub use catalog_editor::CatalogEditor;
pub use catalog_queries::CatalogQueries;
pub use catalog_stats::CatalogStats;
