//! Domain-level constants.
//!
//! These constants define the bounds enforced by the value objects.
//! Lengths are counted in characters, not bytes.

// =============================================================================
// Address
// =============================================================================

/// Minimum street length
pub const MIN_STREET_LENGTH: usize = 3;

/// Maximum street length
pub const MAX_STREET_LENGTH: usize = 100;

/// Minimum district length
pub const MIN_DISTRICT_LENGTH: usize = 3;

/// Maximum district length
pub const MAX_DISTRICT_LENGTH: usize = 60;

pub const MIN_CITY_LENGTH: usize = 3;
pub const MAX_CITY_LENGTH: usize = 60;

pub const MIN_STATE_LENGTH: usize = 2;
pub const MAX_STATE_LENGTH: usize = 40;

/// Maximum complement length (a complement may be empty)
pub const MAX_COMPLEMENT_LENGTH: usize = 100;

pub const MIN_ADDRESS_NUMBER_LENGTH: usize = 1;
pub const MAX_ADDRESS_NUMBER_LENGTH: usize = 10;

/// Exact zipcode length, digits only
pub const ZIPCODE_LENGTH: usize = 8;

// =============================================================================
// User
// =============================================================================

/// Minimum user name length
pub const MIN_USER_NAME_LENGTH: usize = 3;

/// Maximum user name length
pub const MAX_USER_NAME_LENGTH: usize = 30;
