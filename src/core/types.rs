/*!
 * Core Types
 * Common types used across the simulator
 */

/// Simulation clock value (one tick = one unit of CPU work)
pub type Tick = u64;

/// Multi-level queue identifier (lower is served first)
pub type QueueId = u32;

/// Process priority (higher is served first within a policy)
pub type Priority = i32;

/// Common result type for simulator operations
pub type SimulatorResult<T> = Result<T, super::errors::SimulatorError>;

/// Round a metric average to one decimal place
///
/// Rounds the exact binary value with ties to even, so `2.25` becomes `2.2`
/// and `0.35` (stored just below) becomes `0.3`.
#[must_use]
pub fn round_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
