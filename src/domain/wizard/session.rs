//! Owned wizard session state and its navigation/submission operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::page::SLUG_MIN_LEN;
use crate::domain::entities::{PageSummary, Theme};
use crate::domain::wizard::gateway::CreationGateway;
use crate::domain::wizard::steps::{STEPS, validate_step};
use crate::error::AppError;

/// Fallback message when the collaborator gives no usable error text.
const GENERIC_SUBMIT_ERROR: &str = "An error occurred while creating your flashpage";

/// Form data collected across all wizard steps.
///
/// Owned exclusively by one [`WizardSession`] for the duration of a creation
/// attempt; reset to defaults on completion or explicit reset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardFormData {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub gif_url: String,
    pub theme: Theme,
    pub is_dark_mode: bool,
}

/// One user's wizard session: current step, form data, and submission state.
///
/// Scoped to a single user interaction; not designed for concurrent mutation
/// from multiple callers. The step index only moves forward when the current
/// step validates; it may always move backward or to any visited step.
pub struct WizardSession {
    current_step: usize,
    form: WizardFormData,
    is_submitting: bool,
    last_error: Option<String>,
    gateway: Arc<dyn CreationGateway>,
}

impl WizardSession {
    /// Creates a session at step 0 with default form values.
    pub fn new(gateway: Arc<dyn CreationGateway>) -> Self {
        Self {
            current_step: 0,
            form: WizardFormData::default(),
            is_submitting: false,
            last_error: None,
            gateway,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn form(&self) -> &WizardFormData {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut WizardFormData {
        &mut self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the current step's data would allow advancing.
    pub fn can_proceed(&self) -> bool {
        validate_step(self.current_step, &self.form)
    }

    /// Moves to the next step if the current step validates.
    ///
    /// Validation failures are silent no-ops; callers surface them through
    /// disabled controls, not errors. Returns whether the index moved.
    pub fn advance(&mut self) -> bool {
        if self.can_proceed() && self.current_step < STEPS.len() - 1 {
            self.current_step += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous step, clearing any stored submission error.
    ///
    /// The error is scoped to the current attempt, not historical. Returns
    /// whether the index moved.
    pub fn retreat(&mut self) -> bool {
        if self.current_step > 0 {
            self.current_step -= 1;
            self.last_error = None;
            true
        } else {
            false
        }
    }

    /// Jumps to an already-visited step (never ahead of validated progress),
    /// clearing any stored submission error on success.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index <= self.current_step {
            self.current_step = index;
            self.last_error = None;
            true
        } else {
            false
        }
    }

    /// Asks the collaborator whether `slug` is still available.
    ///
    /// Slugs shorter than the minimum length are reported unavailable without
    /// any call. Transport or lookup failures collapse to `false`; a
    /// conservative answer beats an optimistic one that fails at submit time.
    pub async fn check_slug_availability(&self, slug: &str) -> bool {
        if slug.chars().count() < SLUG_MIN_LEN {
            return false;
        }

        self.gateway.check_slug(slug).await.unwrap_or(false)
    }

    /// Submits the form, issuing exactly one create request.
    ///
    /// On success returns the created record's public summary. On failure
    /// stores a user-facing message (the collaborator's, when it has one)
    /// and re-raises. The submitting flag is cleared on every path; there is
    /// no automatic retry; a retry is a fresh user-initiated call.
    ///
    /// # Errors
    ///
    /// Propagates the gateway error unchanged.
    pub async fn submit(&mut self) -> Result<PageSummary, AppError> {
        self.is_submitting = true;
        self.last_error = None;

        let result = self.gateway.create(&self.form).await;
        self.is_submitting = false;

        result.map_err(|err| {
            let message = err.message();
            self.last_error = Some(if message.is_empty() {
                GENERIC_SUBMIT_ERROR.to_string()
            } else {
                message.to_string()
            });
            err
        })
    }

    /// Returns the whole session to its initial state.
    pub fn reset(&mut self) {
        self.current_step = 0;
        self.form = WizardFormData::default();
        self.is_submitting = false;
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wizard::gateway::MockCreationGateway;
    use chrono::Utc;
    use serde_json::json;

    fn session_with(gateway: MockCreationGateway) -> WizardSession {
        WizardSession::new(Arc::new(gateway))
    }

    fn fill_basic(session: &mut WizardSession) {
        session.form_mut().slug = "abc-123".to_string();
        session.form_mut().title = "My page".to_string();
    }

    fn fill_content(session: &mut WizardSession) {
        session.form_mut().content = "Hello there".to_string();
        session.form_mut().gif_url = "https://media.example.com/a.gif".to_string();
    }

    fn summary(slug: &str) -> PageSummary {
        PageSummary {
            slug: slug.to_string(),
            title: "My page".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_session_initial_state() {
        let session = session_with(MockCreationGateway::new());
        assert_eq!(session.current_step(), 0);
        assert_eq!(session.form(), &WizardFormData::default());
        assert!(!session.is_submitting());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_advance_blocked_on_invalid_data() {
        let mut session = session_with(MockCreationGateway::new());
        assert!(!session.advance());
        assert_eq!(session.current_step(), 0);
    }

    #[test]
    fn test_advance_moves_with_valid_data() {
        let mut session = session_with(MockCreationGateway::new());
        fill_basic(&mut session);
        assert!(session.advance());
        assert_eq!(session.current_step(), 1);
    }

    #[test]
    fn test_advance_never_beyond_last_step() {
        let mut session = session_with(MockCreationGateway::new());
        fill_basic(&mut session);
        fill_content(&mut session);

        assert!(session.advance());
        assert!(session.advance());
        assert!(session.advance());
        assert_eq!(session.current_step(), 3);

        // Preview always validates, yet the index stays put.
        assert!(!session.advance());
        assert_eq!(session.current_step(), 3);
    }

    #[test]
    fn test_retreat_clears_error() {
        let mut session = session_with(MockCreationGateway::new());
        fill_basic(&mut session);
        session.advance();
        session.last_error = Some("boom".to_string());

        assert!(session.retreat());
        assert_eq!(session.current_step(), 0);
        assert!(session.last_error().is_none());

        assert!(!session.retreat());
        assert_eq!(session.current_step(), 0);
    }

    #[test]
    fn test_jump_to_rejects_skipping_ahead() {
        let mut session = session_with(MockCreationGateway::new());
        fill_basic(&mut session);
        session.advance();

        assert!(!session.jump_to(2));
        assert_eq!(session.current_step(), 1);

        assert!(session.jump_to(0));
        assert_eq!(session.current_step(), 0);
    }

    #[tokio::test]
    async fn test_check_availability_short_slug_skips_gateway() {
        let mut gateway = MockCreationGateway::new();
        gateway.expect_check_slug().times(0);

        let session = session_with(gateway);
        assert!(!session.check_slug_availability("ab").await);
        assert!(!session.check_slug_availability("").await);
    }

    #[tokio::test]
    async fn test_check_availability_reflects_gateway() {
        let mut gateway = MockCreationGateway::new();
        gateway
            .expect_check_slug()
            .withf(|slug| slug == "abcdef")
            .times(2)
            .returning({
                let mut responses = vec![Ok(true), Ok(false)].into_iter();
                move |_| responses.next().unwrap()
            });

        let session = session_with(gateway);
        assert!(session.check_slug_availability("abcdef").await);
        assert!(!session.check_slug_availability("abcdef").await);
    }

    #[tokio::test]
    async fn test_check_availability_fails_closed() {
        let mut gateway = MockCreationGateway::new();
        gateway
            .expect_check_slug()
            .times(1)
            .returning(|_| Err(AppError::upstream("connection refused", json!({}))));

        let session = session_with(gateway);
        assert!(!session.check_slug_availability("abcdef").await);
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mut gateway = MockCreationGateway::new();
        gateway
            .expect_create()
            .withf(|form| form.slug == "abc-123")
            .times(1)
            .returning(|_| Ok(summary("abc-123")));

        let mut session = session_with(gateway);
        fill_basic(&mut session);
        fill_content(&mut session);

        let created = session.submit().await.unwrap();
        assert_eq!(created.slug, "abc-123");
        assert!(!session.is_submitting());
        assert!(session.last_error().is_none());
    }

    #[tokio::test]
    async fn test_submit_failure_stores_collaborator_message() {
        let mut gateway = MockCreationGateway::new();
        gateway.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Flashpage with this subdomain already exists",
                json!({}),
            ))
        });

        let mut session = session_with(gateway);
        fill_basic(&mut session);
        fill_content(&mut session);

        let err = session.submit().await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(
            session.last_error(),
            Some("Flashpage with this subdomain already exists")
        );
        assert!(!session.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_failure_falls_back_to_generic_message() {
        let mut gateway = MockCreationGateway::new();
        gateway
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::upstream("", json!({}))));

        let mut session = session_with(gateway);
        let _ = session.submit().await;
        assert_eq!(session.last_error(), Some(GENERIC_SUBMIT_ERROR));
    }

    #[tokio::test]
    async fn test_submit_is_single_attempt() {
        let mut gateway = MockCreationGateway::new();
        // Exactly one create call per submit invocation, even after failure.
        gateway
            .expect_create()
            .times(2)
            .returning(|_| Err(AppError::upstream("down", json!({}))));

        let mut session = session_with(gateway);
        let _ = session.submit().await;
        let _ = session.submit().await;
    }

    #[test]
    fn test_reset_restores_documented_defaults() {
        let mut session = session_with(MockCreationGateway::new());
        fill_basic(&mut session);
        fill_content(&mut session);
        session.form_mut().theme = Theme::Sunset;
        session.form_mut().is_dark_mode = true;
        session.advance();
        session.advance();
        session.last_error = Some("boom".to_string());
        session.is_submitting = true;

        session.reset();

        assert_eq!(session.current_step(), 0);
        assert_eq!(session.form().theme, Theme::Aurora);
        assert!(!session.form().is_dark_mode);
        assert!(session.form().slug.is_empty());
        assert!(session.form().title.is_empty());
        assert!(session.form().content.is_empty());
        assert!(session.form().gif_url.is_empty());
        assert!(!session.is_submitting());
        assert!(session.last_error().is_none());
    }
}
