//! Scheduler port — deferred execution on the page's event loop.

use std::time::Duration;

/// Runs a task once after a delay, on the same single-threaded event loop
/// as every other handler.
pub trait Scheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>);
}
