/*!
 * Monitoring
 * Structured logging setup
 */

mod tracer;

pub use tracer::{init_test_tracing, init_tracing, ENV_TRACE_JSON};
