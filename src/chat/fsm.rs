use crate::{Error, Result};
use tracing::{debug, warn};

// Exchange states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    Idle,
    AwaitingResponse,
    Rendered,
}

// Exchange events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeEvent {
    Submit,
    ResultReceived,
}

/// Lifecycle of a single user question and its answer.
#[derive(Debug)]
pub struct ExchangeStateMachine {
    state: ExchangeState,
}

impl Default for ExchangeStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeStateMachine {
    pub fn new() -> Self {
        Self {
            state: ExchangeState::Idle,
        }
    }

    pub fn current_state(&self) -> ExchangeState {
        self.state
    }

    pub fn transition(&mut self, event: ExchangeEvent) -> Result<()> {
        let new_state = match (self.state, event) {
            (ExchangeState::Idle, ExchangeEvent::Submit) => ExchangeState::AwaitingResponse,
            (ExchangeState::AwaitingResponse, ExchangeEvent::ResultReceived) => {
                ExchangeState::Rendered
            }
            (state, event) => {
                warn!("Invalid exchange transition from {:?} with event {:?}", state, event);
                return Err(Error::fsm(format!(
                    "Invalid transition from {:?} with event {:?}",
                    state, event
                )));
            }
        };

        debug!(
            "Exchange state transition: {:?} -> {:?} (event: {:?})",
            self.state, new_state, event
        );
        self.state = new_state;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        self.state == ExchangeState::Rendered
    }
}
