//! Domain-level constants.

// =============================================================================
// Ranking
// =============================================================================

/// Number of orders returned by the top-orders ranking when no size is given
pub const DEFAULT_TOP_ORDERS: u64 = 4;

/// Smallest accepted size for a top-orders ranking
pub const MIN_TOP_ORDERS: i64 = 1;

// =============================================================================
// Client lookups
// =============================================================================

/// Surname matched by the existence check when the caller does not supply one
pub const DEFAULT_EXISTS_SURNAME: &str = "Prenom1";

// =============================================================================
// Validation
// =============================================================================

/// Maximum length of any stored text column
pub const MAX_TEXT_LENGTH: u32 = 255;
