//! Execution backend seam.
//!
//! Running an assignment (a language-model call inside the host's session
//! layer) is not the core's job. The core only names the capability it
//! depends on: given an assignment and the task text, eventually produce a
//! terminal outcome the tracker can consume. Hosts own retries, timeouts,
//! and cancellation.

use async_trait::async_trait;

use crate::error::Result;
use crate::selector::Assignment;
use crate::tracker::TaskOutcome;

/// Opaque execution backend supplied by the host. The core never invokes it.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, assignment: &Assignment, task_text: &str) -> Result<TaskOutcome>;
}
