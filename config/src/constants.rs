//! # Configuration Constants
//!
//! Centralized constants for the alg pipeline.
//!
//! ## Categories
//!
//! - **Notation**: Characters with fixed meaning in alg text
//! - **Layers**: Default layer numbers for moves written without a prefix
//! - **Metrics**: Names of the supported move-count metrics
//! - **Limits**: Stack growth parameters for deep recursion

// =============================================================================
// NOTATION CONSTANTS
// =============================================================================

/// Number of quarter turns in a full revolution of a layer.
///
/// Amounts are folded modulo this value by the simplifier.
///
/// # Example
///
/// ```rust
/// use config::constants::QUARTER_TURNS_PER_REVOLUTION;
///
/// assert_eq!(6 % QUARTER_TURNS_PER_REVOLUTION, 2);
/// ```
pub const QUARTER_TURNS_PER_REVOLUTION: i32 = 4;

/// Symbol written for a pause tick.
///
/// # Example
///
/// ```rust
/// use config::constants::PAUSE_SYMBOL;
///
/// assert_eq!("...".matches(PAUSE_SYMBOL).count(), 3);
/// ```
pub const PAUSE_SYMBOL: &str = ".";

/// Mark appended to a suffix when the amount is negative.
///
/// # Example
///
/// ```rust
/// use config::constants::INVERSE_MARK;
///
/// assert!("R2'".ends_with(INVERSE_MARK));
/// ```
pub const INVERSE_MARK: char = '\'';

/// Character that opens a timestamp token such as `@12.5s`.
pub const TIMESTAMP_PREFIX: char = '@';

/// Character that closes a timestamp token.
pub const TIMESTAMP_SUFFIX: char = 's';

/// Separator between the start and end layer of a wide-move range prefix.
pub const LAYER_RANGE_SEPARATOR: char = '-';

// =============================================================================
// LAYER CONSTANTS
// =============================================================================

/// Layer turned by a single-layer move written without a prefix.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SINGLE_LAYER;
///
/// let explicit: Option<u32> = None;
/// assert_eq!(explicit.unwrap_or(DEFAULT_SINGLE_LAYER), 1);
/// ```
pub const DEFAULT_SINGLE_LAYER: u32 = 1;

/// Innermost layer turned by a wide move written without a prefix.
///
/// `Rw` and `r` turn layers 1 through 2.
pub const DEFAULT_WIDE_END_LAYER: u32 = 2;

/// First layer turned by a slice move (`M`, `N`, `E`, `S`).
///
/// Slices always run from this layer to `dimension - 1`.
pub const SLICE_START_LAYER: u32 = 2;

// =============================================================================
// METRIC CONSTANTS
// =============================================================================

/// Names of the supported move-count metrics, in the order they are listed
/// to callers when validation fails.
///
/// # Example
///
/// ```rust
/// use config::constants::METRIC_NAMES;
///
/// assert!(METRIC_NAMES.contains(&"obtm"));
/// assert_eq!(METRIC_NAMES.join(", "), "obtm, btm, obqtm, etm");
/// ```
pub const METRIC_NAMES: [&str; 4] = ["obtm", "btm", "obqtm", "etm"];

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Remaining stack below which recursion grows a new stack segment.
///
/// Used with the `stacker` crate so that deeply nested commutators and groups
/// do not overflow the thread stack.
///
/// # Example
///
/// ```rust
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
///
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Size of each stack segment allocated when recursion runs low on stack.
pub const STACKER_STACK_SIZE_BYTES: usize = 1024 * 1024;
