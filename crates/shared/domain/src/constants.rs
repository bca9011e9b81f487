//! Domain-level constants.

// =============================================================================
// Seed data
// =============================================================================

/// Identifiers of the rows inserted by the seed migration
pub const SEED_PERSON_IDS: [i32; 3] = [10001, 10002, 10003];

/// Number of seeded rows
pub const SEED_PERSON_COUNT: usize = SEED_PERSON_IDS.len();

// =============================================================================
// Named queries
// =============================================================================

/// Lists every person row
pub const FIND_ALL_PERSONS: &str = "find_all_persons";
