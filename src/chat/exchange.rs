use super::fsm::{ExchangeEvent, ExchangeStateMachine};
use crate::{
    Error, Result,
    history::{ChatTurn, SessionHandle, SessionTranscript},
    llm::{InferenceResult, LlmClient},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Drives user exchanges against a shared inference client.
#[derive(Clone)]
pub struct ChatService {
    llm_client: Arc<dyn LlmClient>,
}

impl ChatService {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    pub fn model_name(&self) -> String {
        self.llm_client.model_name()
    }

    /// Runs one exchange on a session in its own task.
    ///
    /// Dropping the returned future does not stop the exchange: the backend
    /// call still completes and the assistant turn is still recorded.
    pub async fn submit(&self, session: SessionHandle, input: String) -> Result<ChatTurn> {
        let service = self.clone();
        let task = tokio::spawn(async move {
            let mut transcript = session.lock().await;
            service.exchange(&mut transcript, &input).await
        });

        task.await
            .map_err(|e| Error::internal(format!("Exchange task failed: {e}")))?
    }

    /// Records the question, asks the model, and records the rendered answer.
    ///
    /// Inference failures become an assistant turn carrying the error message;
    /// the transcript always gains exactly two turns. Dropping this future
    /// mid-call leaves the user turn unanswered, so cancellable callers go
    /// through [`ChatService::submit`].
    pub async fn exchange(
        &self,
        transcript: &mut SessionTranscript,
        input: &str,
    ) -> Result<ChatTurn> {
        let mut fsm = ExchangeStateMachine::new();

        fsm.transition(ExchangeEvent::Submit)?;
        transcript.append(ChatTurn::user(input));

        let result = self.llm_client.get_response(input).await;
        fsm.transition(ExchangeEvent::ResultReceived)?;

        match &result {
            InferenceResult::Text(_) => info!("Exchange completed with generated text"),
            InferenceResult::Refused(_) => info!("Exchange completed with refusal"),
            InferenceResult::Error { kind, detail } => {
                warn!("Exchange completed with {:?}: {}", kind, detail)
            }
        }

        let reply = ChatTurn::assistant(result.render());
        transcript.append(reply.clone());
        Ok(reply)
    }
}
