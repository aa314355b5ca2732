//! Exit status for lszorro

/// Exit code for success
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for every fatal error (bad filter, unreadable bus or database)
pub const EXIT_GENERAL_ERROR: u8 = 1;
