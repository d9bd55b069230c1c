use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::controller::{spawn_generation, FormController};
use crate::generation::{GenerationService, SubmitOutcome};
use crate::ui::events::AppEvent;
use crate::ui::form::{FormIntent, FormState};

pub struct App<S> {
    should_quit: bool,
    form: FormController<S>,
    endpoint: String,
    runtime: Handle,
    events: Sender<AppEvent>,
}

impl<S: GenerationService> App<S> {
    pub fn new(
        state: FormState,
        service: Arc<S>,
        endpoint: String,
        runtime: Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            form: FormController::new(state, service),
            endpoint,
            runtime,
            events,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form_state(&self) -> &FormState {
        self.form.state()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn dispatch(&mut self, intent: FormIntent) {
        self.form.dispatch(intent);
    }

    pub fn on_tick(&mut self) {
        if self.form.state().is_submitting {
            self.form.dispatch(FormIntent::AnimationTick);
        }
    }

    pub fn on_paste(&mut self, text: String) {
        self.form.dispatch(FormIntent::Paste(text));
    }

    /// Start a submission unless one is already in flight.
    pub fn submit(&mut self) {
        let Some(request) = self.form.begin_submit() else {
            return;
        };
        spawn_generation(
            &self.runtime,
            self.form.service(),
            request,
            self.events.clone(),
        );
    }

    pub fn on_generation(&mut self, outcome: SubmitOutcome) {
        self.form.settle(outcome);
    }
}
