/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// NOTIFICATION CONSTANTS
// =============================================================================

/// Site name used in notification bodies
pub const SITE_NAME: &str = "RailSathi";

/// Placeholder shown in notifications when a passenger filed no PNR
pub const PNR_NOT_PROVIDED: &str = "PNR not provided by passenger";
