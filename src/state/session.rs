//! Per-widget conversation bookkeeping and the request state machine.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Where the widget is in handling a submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestPhase {
    #[default]
    Idle,
    AwaitingResponse,
    Rendering,
}

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    conversation_count: u32,
    pending_question: Option<String>,
    phase: RequestPhase,
}

impl SessionState {
    /// Number of user messages sent since the page loaded.
    pub fn conversation_count(&self) -> u32 {
        self.conversation_count
    }

    pub fn pending_question(&self) -> Option<&str> {
        self.pending_question.as_deref()
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == RequestPhase::Idle
    }

    /// Move `Idle -> AwaitingResponse`, remembering `question`. Returns
    /// `false` and changes nothing when a request is already running.
    pub fn begin_request(&mut self, question: &str) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.pending_question = Some(question.to_owned());
        self.phase = RequestPhase::AwaitingResponse;
        true
    }

    pub fn begin_rendering(&mut self) {
        if self.phase == RequestPhase::AwaitingResponse {
            self.phase = RequestPhase::Rendering;
        }
    }

    pub fn finish_request(&mut self) {
        self.phase = RequestPhase::Idle;
    }

    pub fn record_user_message(&mut self) {
        self.conversation_count = self.conversation_count.saturating_add(1);
    }
}
