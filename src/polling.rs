//! Waiting on asynchronous API operations.
//!
//! Creating a droplet, resizing a volume and similar calls return before the
//! work is done. These helpers poll until the resource settles.

use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::time::Instant;

use crate::client::DigitalOceanClient;
use crate::errors::DoError;
use crate::models::Action;

/// How often to poll and for how long.
#[derive(Debug, Clone, Copy)]
pub struct PollOptions {
    pub interval: Duration,
    pub max_wait: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            max_wait: Duration::from_secs(300),
        }
    }
}

/// Call `check` until it returns `Some`, sleeping `interval` between calls.
///
/// Errors from `check` are returned immediately. Returns
/// [`DoError::Timeout`] once `max_wait` has elapsed without a value.
pub async fn poll_until<T, F, Fut>(
    options: PollOptions,
    what: &str,
    mut check: F,
) -> Result<T, DoError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, DoError>>,
{
    // None: the budget is too large to represent, wait indefinitely
    let deadline = Instant::now().checked_add(options.max_wait);
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        if let Some(value) = check().await? {
            debug!("polling.done what={} attempts={}", what, attempts);
            return Ok(value);
        }
        let next_attempt = Instant::now().checked_add(options.interval);
        let expired = match (deadline, next_attempt) {
            (Some(deadline), Some(next)) => next > deadline,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if expired {
            debug!("polling.timeout what={} attempts={}", what, attempts);
            return Err(DoError::Timeout(format!(
                "{what} not ready after {:?}",
                options.max_wait
            )));
        }
        tokio::time::sleep(options.interval).await;
    }
}

/// Poll `/v2/actions/{action_id}` until the action completes.
///
/// An action that ends `errored` is reported as [`DoError::Other`].
pub async fn wait_for_action(
    client: &DigitalOceanClient,
    action_id: u64,
    options: PollOptions,
) -> Result<Action, DoError> {
    let node = client.v2().actions().by_action_id(action_id);
    let what = format!("action {action_id}");
    poll_until(options, &what, || {
        let node = node.clone();
        async move {
            let action = node.get().await?.action;
            if action.is_errored() {
                return Err(DoError::Other(format!(
                    "action {} ({}) errored",
                    action.id,
                    action.type_.as_deref().unwrap_or("unknown")
                )));
            }
            Ok(action.is_completed().then_some(action))
        }
    })
    .await
}
