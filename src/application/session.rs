// ============================================================
// Layer 2 — Answer Session Controller
// ============================================================
// Orchestrates one question-answering session:
//
//   idle ──load begins──► loading ──success──► ready
//                            │
//                            └──failure──► failed (permanently)
//
// From ready, each submission runs the same gate:
//   1. context empty?      → fixed validation message
//   2. question empty?     → fixed validation message
//   3. service installed?  → fixed "not ready" message
//   4. otherwise           → processing indicator, timed query,
//                            rendered results or error
//
// The controller owns the input snapshots and the one optional
// service handle. It never touches the terminal or filesystem —
// all output goes through the injected SessionView, and the
// service arrives through the AnsweringService trait. That is
// what lets the whole flow run under test with doubles.
//
// Rapid repeated submissions: each submission gets a token from
// a monotonically increasing counter, and a completion whose
// token is no longer the newest is discarded. Older renditions
// of this tool let whichever query finished last overwrite the
// output; the token makes the newest submission win instead.
//
// Reference: Rust Book §10 (Traits), §17 (State pattern)

use std::time::Instant;

use anyhow::Result;

use crate::application::render::{render_answers, RenderOptions};
use crate::domain::answer::Answer;
use crate::domain::rejection::SubmitRejection;
use crate::domain::traits::{AnsweringService, SessionView};

/// Shown while the service handle is being loaded
pub const LOADING_MESSAGE: &str = "Loading the answering service...";

/// Shown once the service handle is installed
pub const READY_MESSAGE: &str =
    "Answering service loaded.\nEnter a context passage and ask a question.";

/// Shown while a query is in flight
pub const PROCESSING_MESSAGE: &str = "Processing your question...";

/// Shown when the context changes after a result was displayed
pub const CONTEXT_CHANGED_NOTICE: &str = "The context has changed. Ask your question again.";

/// Shown when the question changes after a result was displayed
pub const QUESTION_CHANGED_NOTICE: &str = "The question has changed. Submit it again.";

/// What the output region currently displays. Only used to
/// decide whether an input edit should post the advisory
/// "inputs changed" notice — this is cosmetic state, not a
/// correctness invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Display {
    /// Nothing rendered yet
    Blank,
    /// The service-loading indicator
    Loading,
    /// The initial ready message
    Ready,
    /// The service failed to load
    LoadFailed,
    /// A query is in flight
    Processing,
    /// A submission outcome: results, no-answer block,
    /// validation message, or query error
    Outcome,
    /// The advisory inputs-changed notice
    Notice,
}

/// A submission that passed the validation gate and is waiting
/// for its service call to complete. Carries snapshots of the
/// inputs as they were at submission time, so later edits to
/// the session cannot leak into an in-flight query.
#[derive(Debug)]
pub struct PendingRequest {
    token:    u64,
    question: String,
    context:  String,
    started:  Instant,
}

impl PendingRequest {
    /// The question snapshot this request was built from
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The context snapshot this request was built from
    pub fn context(&self) -> &str {
        &self.context
    }
}

/// The session controller. One per interactive session.
pub struct Session {
    /// Current context text, mutated on every input change
    context: String,

    /// Current question text, mutated on every input change
    question: String,

    /// The service handle — None until a load succeeds,
    /// and forever None if the load fails
    service: Option<Box<dyn AnsweringService>>,

    /// Display policy for rendered answers
    options: RenderOptions,

    /// Token of the newest begun submission; 0 means none yet
    current_token: u64,

    /// What the output region currently shows
    display: Display,
}

impl Session {
    /// Create a fresh session with nothing loaded and empty inputs
    pub fn new(options: RenderOptions) -> Self {
        Self {
            context:       String::new(),
            question:      String::new(),
            service:       None,
            options,
            current_token: 0,
            display:       Display::Blank,
        }
    }

    /// True once a service handle has been installed
    pub fn is_ready(&self) -> bool {
        self.service.is_some()
    }

    // ── Service lifecycle ────────────────────────────────────────────────────

    /// Show the loading indicator. Call this just before asking
    /// the loader for a handle.
    pub fn begin_service_load(&mut self, view: &mut dyn SessionView) {
        tracing::info!("Loading answering service");
        self.display = Display::Loading;
        view.show(LOADING_MESSAGE);
    }

    /// Install a successfully loaded service handle and show the
    /// ready message. `modelReady` transitions false→true exactly
    /// once, here.
    pub fn install_service(
        &mut self,
        service: Box<dyn AnsweringService>,
        view:    &mut dyn SessionView,
    ) {
        tracing::info!("Answering service loaded");
        self.service = Some(service);
        self.display = Display::Ready;
        view.show(READY_MESSAGE);
    }

    /// Record a failed service load. The handle stays unset, so
    /// every later submission hits the not-ready rejection —
    /// there is no retry and no crash path.
    pub fn fail_service_load(&mut self, error: &anyhow::Error, view: &mut dyn SessionView) {
        let message = format!("Failed to load the answering service: {error}");
        tracing::error!("{message}");
        self.display = Display::LoadFailed;
        view.show(&message);
    }

    // ── Input changes ────────────────────────────────────────────────────────

    /// Update the context snapshot. If the output region shows a
    /// prior result, replace it with the advisory notice — the
    /// service is never invoked here.
    pub fn set_context(&mut self, text: &str, view: &mut dyn SessionView) {
        self.context = text.to_string();
        self.post_changed_notice(CONTEXT_CHANGED_NOTICE, view);
    }

    /// Update the question snapshot; same notice rule as context.
    pub fn set_question(&mut self, text: &str, view: &mut dyn SessionView) {
        self.question = text.to_string();
        self.post_changed_notice(QUESTION_CHANGED_NOTICE, view);
    }

    fn post_changed_notice(&mut self, notice: &str, view: &mut dyn SessionView) {
        // Only a displayed outcome (or an earlier notice) is
        // replaced; the loading/ready messages stay put.
        if matches!(self.display, Display::Outcome | Display::Notice) {
            self.display = Display::Notice;
            view.show(notice);
        }
    }

    // ── Submission ───────────────────────────────────────────────────────────

    /// Run the validation gate and, if it passes, show the
    /// processing indicator and hand back a PendingRequest
    /// stamped with a fresh token. On rejection, the fixed
    /// message is rendered and the service is never touched.
    pub fn begin_submission(
        &mut self,
        view: &mut dyn SessionView,
    ) -> Result<PendingRequest, SubmitRejection> {
        let context  = self.context.trim();
        let question = self.question.trim();

        let rejection = if context.is_empty() {
            Some(SubmitRejection::EmptyContext)
        } else if question.is_empty() {
            Some(SubmitRejection::EmptyQuestion)
        } else if self.service.is_none() {
            Some(SubmitRejection::ServiceNotReady)
        } else {
            None
        };

        if let Some(rejection) = rejection {
            tracing::warn!("Submission rejected: {rejection}");
            self.display = Display::Outcome;
            view.show(&rejection.to_string());
            return Err(rejection);
        }

        self.current_token += 1;
        tracing::debug!("Submission {} begun", self.current_token);
        self.display = Display::Processing;
        view.show(PROCESSING_MESSAGE);

        Ok(PendingRequest {
            token:    self.current_token,
            question: question.to_string(),
            context:  context.to_string(),
            started:  Instant::now(),
        })
    }

    /// Invoke the service for a pending request. Split out from
    /// begin/complete so a driver can interleave submissions —
    /// and so tests can feed completions in any order.
    pub fn run_query(&self, pending: &PendingRequest) -> Result<Vec<Answer>> {
        let service = self
            .service
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("answering service not loaded"))?;
        service.find_answers(&pending.question, &pending.context)
    }

    /// Apply a completed query to the view. A completion whose
    /// token is no longer the newest is dropped silently — the
    /// newest submission owns the output region.
    pub fn complete_submission(
        &mut self,
        pending: PendingRequest,
        result:  Result<Vec<Answer>>,
        view:    &mut dyn SessionView,
    ) {
        if pending.token != self.current_token {
            tracing::debug!(
                "Discarding stale completion {} (newest is {})",
                pending.token,
                self.current_token,
            );
            return;
        }

        let elapsed = pending.started.elapsed().as_secs_f64();
        self.display = Display::Outcome;

        match result {
            Ok(answers) => {
                view.diagnostic(&format!(
                    "question: {:?} | {} answer(s) in {:.2}s",
                    pending.question,
                    answers.len(),
                    elapsed,
                ));
                view.show(&render_answers(&pending.question, &answers, elapsed, &self.options));
            }
            Err(error) => {
                let message = format!("Error while processing the question: {error}");
                tracing::error!("{message}");
                view.diagnostic(&format!("query failed after {elapsed:.2}s: {error:#}"));
                view.show(&message);
            }
        }
    }

    /// The whole flow in one call: validate, query, render.
    /// This is what the interactive driver uses; the split
    /// methods exist for drivers (and tests) that need to
    /// interleave.
    pub fn submit(&mut self, view: &mut dyn SessionView) {
        let pending = match self.begin_submission(view) {
            Ok(pending) => pending,
            // Rejection already rendered by begin_submission
            Err(_) => return,
        };
        let result = self.run_query(&pending);
        self.complete_submission(pending, result, view);
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// View double that records every block and diagnostic
    #[derive(Default)]
    struct RecordingView {
        blocks:      Vec<String>,
        diagnostics: Vec<String>,
    }

    impl RecordingView {
        fn last(&self) -> &str {
            self.blocks.last().map(String::as_str).unwrap_or("")
        }
    }

    impl SessionView for RecordingView {
        fn show(&mut self, block: &str) {
            self.blocks.push(block.to_string());
        }
        fn diagnostic(&mut self, line: &str) {
            self.diagnostics.push(line.to_string());
        }
    }

    /// Service double that returns a fixed answer list and
    /// counts how often it was invoked
    struct ScriptedService {
        answers: Vec<Answer>,
        calls:   Rc<Cell<usize>>,
    }

    impl ScriptedService {
        fn boxed(answers: Vec<Answer>) -> (Box<dyn AnsweringService>, Rc<Cell<usize>>) {
            let calls = Rc::new(Cell::new(0));
            let svc = ScriptedService { answers, calls: Rc::clone(&calls) };
            (Box::new(svc), calls)
        }
    }

    impl AnsweringService for ScriptedService {
        fn find_answers(&self, _question: &str, _context: &str) -> Result<Vec<Answer>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.answers.clone())
        }
    }

    /// Service double that always fails
    struct FailingService;

    impl AnsweringService for FailingService {
        fn find_answers(&self, _question: &str, _context: &str) -> Result<Vec<Answer>> {
            anyhow::bail!("weights went missing")
        }
    }

    fn ready_session(answers: Vec<Answer>) -> (Session, RecordingView, Rc<Cell<usize>>) {
        let mut session = Session::new(RenderOptions::default());
        let mut view = RecordingView::default();
        let (service, calls) = ScriptedService::boxed(answers);
        session.install_service(service, &mut view);
        (session, view, calls)
    }

    #[test]
    fn test_empty_context_is_rejected_without_invoking_service() {
        let (mut session, mut view, calls) = ready_session(vec![]);
        session.set_question("anything?", &mut view);

        let result = session.begin_submission(&mut view);
        assert_eq!(result.unwrap_err(), SubmitRejection::EmptyContext);
        assert_eq!(view.last(), SubmitRejection::EmptyContext.to_string());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_empty_question_is_rejected_without_invoking_service() {
        let (mut session, mut view, calls) = ready_session(vec![]);
        session.set_context("Paris is the capital of France.", &mut view);
        // Whitespace-only counts as empty
        session.set_question("   ", &mut view);

        let result = session.begin_submission(&mut view);
        assert_eq!(result.unwrap_err(), SubmitRejection::EmptyQuestion);
        assert_eq!(view.last(), SubmitRejection::EmptyQuestion.to_string());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_submission_before_load_hits_not_ready() {
        let mut session = Session::new(RenderOptions::default());
        let mut view = RecordingView::default();
        session.set_context("some context", &mut view);
        session.set_question("some question", &mut view);

        let result = session.begin_submission(&mut view);
        assert_eq!(result.unwrap_err(), SubmitRejection::ServiceNotReady);
        assert!(view.last().contains("not finished loading"));
    }

    #[test]
    fn test_failed_load_leaves_session_permanently_not_ready() {
        let mut session = Session::new(RenderOptions::default());
        let mut view = RecordingView::default();

        session.begin_service_load(&mut view);
        assert_eq!(view.last(), LOADING_MESSAGE);

        let error = anyhow::anyhow!("download interrupted");
        session.fail_service_load(&error, &mut view);
        assert!(view.last().contains("Failed to load the answering service"));
        assert!(view.last().contains("download interrupted"));
        assert!(!session.is_ready());

        session.set_context("ctx", &mut view);
        session.set_question("q", &mut view);
        let result = session.begin_submission(&mut view);
        assert_eq!(result.unwrap_err(), SubmitRejection::ServiceNotReady);
    }

    #[test]
    fn test_empty_result_renders_no_answer_block() {
        let (mut session, mut view, calls) = ready_session(vec![]);
        session.set_context("The sky is blue.", &mut view);
        session.set_question("What colour is grass?", &mut view);

        session.submit(&mut view);
        assert_eq!(calls.get(), 1);
        assert!(view.last().contains("No answer found"));
        assert!(view.last().contains("Processed in"));
        assert!(!view.last().contains("Answer 1:"));
    }

    #[test]
    fn test_answers_are_rendered_with_confidence() {
        let (mut session, mut view, _) = ready_session(vec![Answer::new("Paris", 0.97)]);
        session.set_context("Paris is the capital of France.", &mut view);
        session.set_question("What is the capital of France?", &mut view);

        session.submit(&mut view);
        assert!(view.last().contains("Paris"));
        assert!(view.last().contains("97.00%"));
    }

    #[test]
    fn test_query_failure_becomes_error_message() {
        let mut session = Session::new(RenderOptions::default());
        let mut view = RecordingView::default();
        session.install_service(Box::new(FailingService), &mut view);
        session.set_context("ctx", &mut view);
        session.set_question("q", &mut view);

        session.submit(&mut view);
        assert!(view.last().contains("Error while processing the question"));
        assert!(view.last().contains("weights went missing"));
    }

    #[test]
    fn test_input_change_after_answer_posts_notice_without_query() {
        let (mut session, mut view, calls) = ready_session(vec![Answer::new("Paris", 0.9)]);
        session.set_context("Paris is the capital of France.", &mut view);
        session.set_question("What is the capital?", &mut view);
        session.submit(&mut view);
        assert_eq!(calls.get(), 1);

        session.set_context("Lyon is a city in France.", &mut view);
        assert_eq!(view.last(), CONTEXT_CHANGED_NOTICE);

        session.set_question("Which city?", &mut view);
        assert_eq!(view.last(), QUESTION_CHANGED_NOTICE);

        // Notices never touch the service
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_input_change_before_any_answer_posts_nothing() {
        let (mut session, mut view, _) = ready_session(vec![]);
        let shown_before = view.blocks.len();

        // Only the ready message is on screen — editing inputs
        // must not replace it
        session.set_context("fresh context", &mut view);
        session.set_question("fresh question", &mut view);
        assert_eq!(view.blocks.len(), shown_before);
        assert_eq!(view.last(), READY_MESSAGE);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let (mut session, mut view, _) = ready_session(vec![]);
        session.set_context("ctx", &mut view);
        session.set_question("first question", &mut view);

        let first = session.begin_submission(&mut view).unwrap();

        session.set_question("second question", &mut view);
        let second = session.begin_submission(&mut view).unwrap();

        // The older completion arrives last-but-one and is dropped
        session.complete_submission(first, Ok(vec![Answer::new("stale", 0.5)]), &mut view);
        assert_eq!(view.last(), PROCESSING_MESSAGE);

        // The newest completion wins the output region
        session.complete_submission(second, Ok(vec![Answer::new("fresh", 0.9)]), &mut view);
        assert!(view.last().contains("fresh"));
        assert!(!view.last().contains("stale"));
    }

    #[test]
    fn test_pending_request_snapshots_inputs() {
        let (mut session, mut view, _) = ready_session(vec![]);
        session.set_context("  original context  ", &mut view);
        session.set_question("original question", &mut view);

        let pending = session.begin_submission(&mut view).unwrap();
        // Later edits must not leak into the in-flight request
        session.set_context("edited context", &mut view);
        assert_eq!(pending.context(), "original context");
        assert_eq!(pending.question(), "original question");
    }
}
