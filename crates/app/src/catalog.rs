use thiserror::Error;

use tracker_core::model::{Catalog, CatalogError, Problem};

/// The shipped problem set, authored as JSON and embedded at build time so
/// the domain crates stay free of file I/O.
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("catalog data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parse the embedded catalog.
///
/// # Errors
///
/// Returns `CatalogLoadError` if the embedded JSON is malformed or contains
/// duplicate ids. Both indicate a packaging mistake and are fatal at startup.
pub fn builtin() -> Result<Catalog, CatalogLoadError> {
    let problems: Vec<Problem> = serde_json::from_str(CATALOG_JSON)?;
    Ok(Catalog::new(problems)?)
}
