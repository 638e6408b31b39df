pub mod catalog_search;
pub mod http_client;
pub mod leaflet;
pub mod platform;

pub use catalog_search::CatalogSearch;
pub use http_client::HttpSearchClient;
pub use leaflet::LeafletSurfaceFactory;
pub use platform::create_sleep;
