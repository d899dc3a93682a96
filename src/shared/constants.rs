/// Products per page on the paginated catalog
pub const CATALOG_PAGE_SIZE: usize = 10;

/// Range window applied when a product fetch has an offset but no limit
pub const DEFAULT_PRODUCT_WINDOW: i64 = 10;

/// Products shown on the homepage teaser
pub const HOME_PRODUCT_LIMIT: i64 = 10;

/// Related products shown on a product detail page
pub const RELATED_PRODUCTS_LIMIT: usize = 3;

/// Category label used when a product has no category row
pub const FALLBACK_CATEGORY_NAME: &str = "Handcrafted";

// =============================================================================
// UPLOADS
// =============================================================================

/// Maximum accepted image size in bytes (5MB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// Maximum number of gallery images accepted in one upload request
pub const MAX_GALLERY_UPLOADS: usize = 6;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Back-office role allowed to manage the catalog
pub const ROLE_ADMIN: &str = "admin";
