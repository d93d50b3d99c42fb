/// Natal system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of classification archetypes. Fixed, never extended at runtime.
pub const ARCHETYPE_COUNT: usize = 3;

/// Maximum weight an option can assign to an archetype.
/// Also the per-question ceiling used as the normalization divisor.
pub const MAX_WEIGHT: u8 = 100;
