//! Homework status poller
//!
//! Drives the poll → validate → parse → notify → sleep cycle.
//! Every per-cycle failure is turned into a fault notification; nothing
//! after startup stops the loop except a shutdown signal.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, error, info, instrument, warn};

use crate::domain::homework::{check_response, parse_status, reported_date, HomeworkApiClient};
use crate::monitoring::ChatClient;
use crate::state::PollState;
use crate::utils::BotError;

/// Prefix of every fault notification
pub const FAULT_PREFIX: &str = "Failure in program operation";

/// Result of a cycle that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The first homework produced a status message
    Update(String),
    /// The API reported no homeworks since the last check
    NoUpdates,
}

/// Build the fault notification text for a cycle error
pub fn fault_message(error: &BotError) -> String {
    format!("{}: {}", FAULT_PREFIX, error)
}

/// Status poller that owns the API and chat clients
pub struct StatusPoller {
    api: HomeworkApiClient,
    chat: ChatClient,
    /// Pause between cycles
    interval: Duration,
}

impl StatusPoller {
    /// Create a new poller
    pub fn new(api: HomeworkApiClient, chat: ChatClient, interval: Duration) -> Self {
        Self {
            api,
            chat,
            interval,
        }
    }

    /// Run one cycle and hand the state back
    #[instrument(skip(self, state), fields(from_date = state.last_seen_timestamp))]
    pub async fn tick(&self, mut state: PollState) -> PollState {
        let delivered = match self.check_updates(&mut state).await {
            Ok(CycleOutcome::Update(message)) => self.relay(&mut state, message).await,
            Ok(CycleOutcome::NoUpdates) => {
                debug!("No new homework statuses");
                false
            }
            Err(e) => {
                let message = fault_message(&e);
                error!(kind = e.kind(), error = %e, "Cycle failed");
                self.relay(&mut state, message).await
            }
        };

        debug!(
            delivered,
            next_from_date = state.last_seen_timestamp,
            "Cycle finished"
        );
        state
    }

    /// Poll, validate and parse; advances the timestamp once the response is valid
    async fn check_updates(&self, state: &mut PollState) -> Result<CycleOutcome, BotError> {
        let response = self
            .api
            .fetch_statuses(Some(state.last_seen_timestamp))
            .await?;

        let homeworks = check_response(&response)?;
        if let Some(current_date) = reported_date(&response) {
            state.advance_to(current_date);
        }

        let Some(homework) = homeworks.first() else {
            return Ok(CycleOutcome::NoUpdates);
        };

        parse_status(homework).map(CycleOutcome::Update)
    }

    /// Deliver a message unless it repeats the last delivered one
    ///
    /// Returns whether the message was delivered. The de-duplication state
    /// only changes on success, so a failed message is tried again the next
    /// time it comes up.
    pub async fn relay(&self, state: &mut PollState, message: String) -> bool {
        if state.is_duplicate(&message) {
            debug!(message = %message, "Message identical to last delivered one, skipping");
            return false;
        }

        match self.chat.send_message(&message).await {
            Ok(()) => {
                info!(message = %message, "Notification delivered");
                state.record_sent(message);
                true
            }
            Err(e) => {
                warn!(error = %e, message = %message, "Notification not delivered");
                false
            }
        }
    }

    /// Run the polling loop until `shutdown` resolves
    ///
    /// Each cycle runs to completion; the shutdown future is only raced
    /// against the sleep between cycles.
    #[instrument(skip(self, state, shutdown), level = "info")]
    pub async fn run_loop<F>(&self, mut state: PollState, shutdown: F) -> PollState
    where
        F: Future<Output = ()>,
    {
        info!(
            interval_secs = self.interval.as_secs(),
            from_date = state.last_seen_timestamp,
            "Starting homework status poller"
        );

        tokio::pin!(shutdown);

        loop {
            state = self.tick(state).await;

            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping poller");
                    return state;
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
    }

    /// Run a fixed number of cycles without sleeping
    ///
    /// Useful for testing
    pub async fn run_iterations(&self, mut state: PollState, iterations: usize) -> PollState {
        for _ in 0..iterations {
            state = self.tick(state).await;
        }
        state
    }
}
