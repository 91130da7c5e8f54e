mod exchange;
pub mod fsm;

pub use exchange::ChatService;
pub use fsm::{ExchangeEvent, ExchangeState, ExchangeStateMachine};
