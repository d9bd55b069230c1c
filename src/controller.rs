//! Submission lifecycle of the form.
//!
//! [`FormController`] owns the [`FormState`] and the service. A submission is
//! split into `begin_submit` (reducer marks the form busy and a request is
//! built) and `settle` (outcome reduced, busy flag cleared). The call in
//! between runs either inline ([`FormController::submit`]) or on a tokio task
//! ([`spawn_generation`]). Both wrap it in a scope guard, so the settle step
//! is delivered on every exit path, including panics and dropped futures.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::generation::{GenerationRequest, GenerationResult, GenerationService, SubmitOutcome};
use crate::ui::events::AppEvent;
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct FormController<S> {
    state: FormState,
    service: Arc<S>,
}

impl<S: GenerationService> FormController<S> {
    pub fn new(state: FormState, service: Arc<S>) -> Self {
        Self { state, service }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn service(&self) -> Arc<S> {
        Arc::clone(&self.service)
    }

    pub fn dispatch(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, state, FormReducer, intent);
    }

    /// Mark the form busy and build the request.
    ///
    /// Returns `None` while a previous submission is still in flight; the
    /// submit trigger is disabled then and no request is built.
    pub fn begin_submit(&mut self) -> Option<GenerationRequest> {
        if !self.state.can_submit() {
            tracing::debug!("Submit ignored: a generation is already in flight");
            return None;
        }
        self.dispatch(FormIntent::Submit);
        Some(self.state.to_request())
    }

    /// Reduce a settled outcome into the result text and clear the busy flag.
    pub fn settle(&mut self, outcome: SubmitOutcome) {
        self.dispatch(FormIntent::Settled(outcome));
    }

    /// Run one full submission inline.
    ///
    /// Returns the outcome, or `None` if the submission was refused because
    /// one is already in flight. If the returned future is dropped before
    /// the service settles, the form still returns to idle with an
    /// interruption message.
    pub async fn submit(&mut self) -> Option<SubmitOutcome> {
        let request = self.begin_submit()?;
        let service = Arc::clone(&self.service);

        let mut pending = scopeguard::guard((self, None::<SubmitOutcome>), |(controller, outcome)| {
            controller.settle(outcome.unwrap_or_else(SubmitOutcome::interrupted));
        });
        let outcome = run_generation(service.as_ref(), request).await;
        pending.1 = Some(outcome.clone());
        Some(outcome)
    }
}

/// Call the service once and fold every result into a [`SubmitOutcome`].
pub async fn run_generation<S: GenerationService>(
    service: &S,
    request: GenerationRequest,
) -> SubmitOutcome {
    tracing::debug!(
        prompt = %request.prompt,
        num_tokens = request.num_tokens,
        temperature = request.temperature,
        "Sending generation request"
    );

    match service.generate(request).await {
        Ok(result) => {
            match &result {
                GenerationResult::Success { text } => {
                    tracing::debug!(chars = text.chars().count(), "Received generation response");
                }
                GenerationResult::Failure { message } => {
                    tracing::error!(error = %message, "Generation service reported an error");
                }
                GenerationResult::Unrecognized => {
                    tracing::error!("Generation service returned an unexpected response structure");
                }
            }
            SubmitOutcome::Completed(result)
        }
        Err(err) => {
            tracing::error!(error = %err, debug = ?err, "Generation call failed");
            SubmitOutcome::Failed(err.to_string())
        }
    }
}

/// Run the service call on `runtime` and report back through `events`.
///
/// Exactly one `AppEvent::Generation` is sent per spawned call, even if the
/// service panics or the runtime drops the task.
pub fn spawn_generation<S: GenerationService>(
    runtime: &Handle,
    service: Arc<S>,
    request: GenerationRequest,
    events: Sender<AppEvent>,
) -> JoinHandle<()> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generation", %request_id);

    runtime.spawn(
        async move {
            let mut settled = scopeguard::guard(None::<SubmitOutcome>, move |outcome| {
                let outcome = outcome.unwrap_or_else(SubmitOutcome::interrupted);
                if events.send(AppEvent::Generation(outcome)).is_err() {
                    tracing::debug!("Generation outcome dropped: UI loop is gone");
                }
            });
            *settled = Some(run_generation(service.as_ref(), request).await);
        }
        .instrument(span),
    )
}
