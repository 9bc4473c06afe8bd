//! Recording mock ports for control tests.

use super::ControlPorts;
use crate::ports::confirmation::{ConfirmationError, ConfirmationPort, ConfirmationRequest};
use crate::ports::hybrid_mode_feature::HybridModeFeature;
use crate::ports::presenter::ModePresenter;
use crate::ports::restart::{RestartError, RestartPort};
use crate::ports::transition_logger::{TransitionEvent, TransitionLogger};
use async_trait::async_trait;
use hybridctl_domain::{FeatureError, HybridModeState};
use std::sync::{Arc, Mutex};

// ==================== Call Recording ====================

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Read,
    Write(HybridModeState),
    Confirm { title: String, message: String },
    Restart,
    Show(HybridModeState),
    Warn { title: String, message: String },
}

#[derive(Clone, Default)]
pub(crate) struct Recorder(Arc<Mutex<Vec<Call>>>);

impl Recorder {
    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    /// Drain recorded calls.
    pub(crate) fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }

    fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.0.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    pub(crate) fn confirm_count(&self) -> usize {
        self.count(|c| matches!(c, Call::Confirm { .. }))
    }

    pub(crate) fn restart_count(&self) -> usize {
        self.count(|c| matches!(c, Call::Restart))
    }

    /// Refreshes end in exactly one `Show` each.
    pub(crate) fn show_count(&self) -> usize {
        self.count(|c| matches!(c, Call::Show(_)))
    }

    pub(crate) fn warn_count(&self) -> usize {
        self.count(|c| matches!(c, Call::Warn { .. }))
    }

    pub(crate) fn confirm_messages(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter_map(|c| match c {
                Call::Confirm { message, .. } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

// ==================== Test Mocks ====================

struct MockFeature {
    recorder: Recorder,
    state: Mutex<HybridModeState>,
    write_error: Option<FeatureError>,
}

#[async_trait]
impl HybridModeFeature for MockFeature {
    async fn read_state(&self) -> Result<HybridModeState, FeatureError> {
        self.recorder.push(Call::Read);
        Ok(*self.state.lock().unwrap())
    }

    async fn write_state(&self, state: HybridModeState) -> Result<(), FeatureError> {
        self.recorder.push(Call::Write(state));
        if let Some(err) = &self.write_error {
            return Err(err.clone());
        }
        *self.state.lock().unwrap() = state;
        Ok(())
    }
}

struct MockConfirmation {
    recorder: Recorder,
    answer: bool,
}

#[async_trait]
impl ConfirmationPort for MockConfirmation {
    async fn confirm(&self, request: &ConfirmationRequest) -> Result<bool, ConfirmationError> {
        self.recorder.push(Call::Confirm {
            title: request.title.clone(),
            message: request.message.clone(),
        });
        Ok(self.answer)
    }
}

struct MockRestart {
    recorder: Recorder,
}

#[async_trait]
impl RestartPort for MockRestart {
    async fn restart(&self) -> Result<(), RestartError> {
        self.recorder.push(Call::Restart);
        Ok(())
    }
}

struct MockPresenter {
    recorder: Recorder,
}

impl ModePresenter for MockPresenter {
    fn display_name(&self, state: HybridModeState) -> String {
        mock_display_name(state).to_string()
    }

    fn show_state(&self, state: HybridModeState) {
        self.recorder.push(Call::Show(state));
    }

    fn notify_warning(&self, title: &str, message: &str) {
        self.recorder.push(Call::Warn {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

fn mock_display_name(state: HybridModeState) -> &'static str {
    match state {
        HybridModeState::Off => "Off",
        HybridModeState::On => "On",
        HybridModeState::Auto => "Auto",
        HybridModeState::FullPowerOnly => "Full power only",
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockJournal(Arc<Mutex<Vec<&'static str>>>);

impl MockJournal {
    pub(crate) fn event_types(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

impl TransitionLogger for MockJournal {
    fn log(&self, event: TransitionEvent) {
        self.0.lock().unwrap().push(event.event_type);
    }
}

// ==================== Harness ====================

/// One machine: a feature starting at `initial`, a user answering `answer`.
pub(crate) struct Harness {
    pub(crate) recorder: Recorder,
    pub(crate) journal: MockJournal,
    feature: Arc<MockFeature>,
    answer: bool,
}

impl Harness {
    pub(crate) fn new(initial: HybridModeState, answer: bool) -> Self {
        Self::build(initial, answer, None)
    }

    /// Every write fails with `error`.
    pub(crate) fn failing(initial: HybridModeState, error: FeatureError) -> Self {
        Self::build(initial, true, Some(error))
    }

    fn build(initial: HybridModeState, answer: bool, write_error: Option<FeatureError>) -> Self {
        let recorder = Recorder::default();
        Self {
            feature: Arc::new(MockFeature {
                recorder: recorder.clone(),
                state: Mutex::new(initial),
                write_error,
            }),
            recorder,
            journal: MockJournal::default(),
            answer,
        }
    }

    pub(crate) fn ports(&self) -> ControlPorts {
        ControlPorts::new(
            self.feature.clone(),
            Arc::new(MockConfirmation {
                recorder: self.recorder.clone(),
                answer: self.answer,
            }),
            Arc::new(MockRestart {
                recorder: self.recorder.clone(),
            }),
            Arc::new(MockPresenter {
                recorder: self.recorder.clone(),
            }),
        )
        .with_transition_logger(Arc::new(self.journal.clone()))
    }

    pub(crate) fn display_name(&self, state: HybridModeState) -> String {
        mock_display_name(state).to_string()
    }
}
