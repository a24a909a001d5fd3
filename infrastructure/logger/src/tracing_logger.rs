use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Adapter routing the domain `Logger` port onto the `tracing` crate.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "cart-backend", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "cart-backend", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "cart-backend", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "cart-backend", "{}", message);
    }
}
