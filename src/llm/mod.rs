mod client;
mod prompt;
mod types;

pub use client::*;
pub use prompt::{REFUSAL_SENTENCE, render_prompt};
pub use types::*;
