use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "cardshop", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "cardshop", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "cardshop", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "cardshop", "{}", message);
    }
}
