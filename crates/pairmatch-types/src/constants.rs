//! System-wide constants for the PairMatch matching core.

/// Number of price levels per side returned when the caller gives no depth.
pub const DEFAULT_DEPTH: usize = 10;

/// Upper bound on requested depth levels per side.
pub const MAX_DEPTH: usize = 500;

/// Initial capacity reserved for each side's priority queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "PairMatch";
