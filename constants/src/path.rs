/// Catalog JSON, relative to the asset root.
pub const CATALOG_PATH: &str = "scene.catalog.json";

/// Extension registered with the JSON asset loader for catalogs.
pub const CATALOG_EXTENSION: &str = "catalog.json";
