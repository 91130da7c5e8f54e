mod store;
mod transcript;
mod types;

pub use store::{SessionHandle, SessionStore};
pub use transcript::SessionTranscript;
pub use types::{ChatTurn, Role};
