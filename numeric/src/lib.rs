//! Pure numeric routines exported through the numbridge host bridge.
//!
//! Every function here is total: overflow wraps, empty inputs produce
//! non-finite statistics, and nothing panics on out-of-range arguments.

pub mod primes;
pub mod sequence;
pub mod stats;

pub use primes::{is_prime, primes_up_to};
pub use sequence::{factorial, fibonacci};
pub use stats::{sum_truncated, summarize, Summary};
