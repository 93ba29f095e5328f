//! Inquiry form controller.
//!
//! Owns the form values, the error messages currently shown to the user and
//! the submit lifecycle (`Idle -> Submitting -> Idle`). Delivery itself is
//! delegated to an [`InquirySubmitter`] and user feedback to a [`Notifier`].

use super::validation::{validate, validate_field, FieldErrorMap};
use super::{
    Budget, InquiryField, InquiryForm, InquirySubmitter, Notice, Notifier, ProjectType,
    SubmissionError, Timeline,
};
use log::*;
use std::time::Duration;

/// Where the controller is in the submit lifecycle.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// A new value for a single form field.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Name(String),
    Email(String),
    ProjectType(Option<ProjectType>),
    Budget(Option<Budget>),
    Timeline(Option<Timeline>),
    Requirements(String),
}

impl FieldValue {
    pub fn field(&self) -> InquiryField {
        match self {
            FieldValue::Name(_) => InquiryField::Name,
            FieldValue::Email(_) => InquiryField::Email,
            FieldValue::ProjectType(_) => InquiryField::ProjectType,
            FieldValue::Budget(_) => InquiryField::Budget,
            FieldValue::Timeline(_) => InquiryField::Timeline,
            FieldValue::Requirements(_) => InquiryField::Requirements,
        }
    }
}

/// Result of the first half of a submission.
///
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitStart {
    /// A submission is already in flight; nothing happened.
    Busy,
    /// Validation failed; every error has been published.
    Rejected(FieldErrorMap),
    /// The controller is now submitting this snapshot.
    Ready(InquiryForm),
}

/// Final result of a submission attempt.
///
#[derive(Debug)]
pub enum SubmitOutcome {
    Busy,
    Rejected(FieldErrorMap),
    Sent,
    Failed(SubmissionError),
}

/// Specify struct for managing the inquiry form lifecycle.
///
#[derive(Debug)]
pub struct InquiryController {
    form: InquiryForm,
    errors: FieldErrorMap,
    phase: SubmitPhase,
}

impl Default for InquiryController {
    fn default() -> Self {
        InquiryController {
            form: InquiryForm::default(),
            errors: FieldErrorMap::new(),
            phase: SubmitPhase::Idle,
        }
    }
}

impl InquiryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &InquiryForm {
        &self.form
    }

    /// Errors currently published to the user.
    ///
    pub fn errors(&self) -> &FieldErrorMap {
        &self.errors
    }

    pub fn error(&self, field: InquiryField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Set a single field and publish its validation result. Errors of the
    /// other fields stay as they were last published.
    ///
    pub fn update_field(&mut self, value: FieldValue) {
        let field = value.field();
        match value {
            FieldValue::Name(name) => self.form.name = name,
            FieldValue::Email(email) => self.form.email = email,
            FieldValue::ProjectType(project_type) => self.form.project_type = project_type,
            FieldValue::Budget(budget) => self.form.budget = budget,
            FieldValue::Timeline(timeline) => self.form.timeline = timeline,
            FieldValue::Requirements(requirements) => self.form.requirements = requirements,
        }
        match validate_field(&self.form, field) {
            Some(message) => {
                self.errors.insert(field, message.to_string());
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn validate(&self) -> FieldErrorMap {
        validate(&self.form)
    }

    pub fn is_submittable(&self) -> bool {
        super::is_submittable(&self.form)
    }

    /// Restore empty defaults and clear all published errors.
    ///
    pub fn reset(&mut self) {
        self.form = InquiryForm::default();
        self.errors.clear();
    }

    /// Validate the whole form and, if it passes, enter the submitting phase
    /// and hand back the snapshot to deliver.
    ///
    pub fn begin_submit<N: Notifier + ?Sized>(&mut self, notifier: &mut N) -> SubmitStart {
        if self.is_submitting() {
            debug!("Ignoring submit request while a submission is in flight.");
            return SubmitStart::Busy;
        }
        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            info!(
                "Inquiry blocked by {} invalid field(s).",
                self.errors.len()
            );
            notifier.notify(Notice::review_needed());
            return SubmitStart::Rejected(self.errors.clone());
        }
        self.phase = SubmitPhase::Submitting;
        SubmitStart::Ready(self.form.clone())
    }

    /// Apply the collaborator's verdict and leave the submitting phase.
    ///
    pub fn finish_submit<N: Notifier + ?Sized>(
        &mut self,
        result: Result<(), SubmissionError>,
        notifier: &mut N,
    ) -> SubmitOutcome {
        self.phase = SubmitPhase::Idle;
        match result {
            Ok(()) => {
                info!("Inquiry sent.");
                notifier.notify(Notice::sent());
                self.reset();
                SubmitOutcome::Sent
            }
            Err(e) => {
                error!("Failed to deliver inquiry: {}", e);
                notifier.notify(Notice::failed());
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Run a full submission: validate, wait out the pacing delay, deliver
    /// and report. Failures are turned into notices, never returned as errors.
    ///
    pub async fn submit<S, N>(
        &mut self,
        submitter: &S,
        notifier: &mut N,
        pacing: Duration,
    ) -> SubmitOutcome
    where
        S: InquirySubmitter + ?Sized,
        N: Notifier + ?Sized,
    {
        let snapshot = match self.begin_submit(&mut *notifier) {
            SubmitStart::Busy => return SubmitOutcome::Busy,
            SubmitStart::Rejected(errors) => return SubmitOutcome::Rejected(errors),
            SubmitStart::Ready(snapshot) => snapshot,
        };
        if !pacing.is_zero() {
            tokio::time::sleep(pacing).await;
        }
        let result = submitter.submit(&snapshot).await;
        self.finish_submit(result, notifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::NoticeKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    #[derive(Default)]
    struct CountingSubmitter {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl InquirySubmitter for CountingSubmitter {
        async fn submit(&self, _form: &InquiryForm) -> Result<(), SubmissionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(SubmissionError::Other("offline".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn filled() -> InquiryController {
        let mut controller = InquiryController::new();
        controller.update_field(FieldValue::Name("Ada Lovelace".to_string()));
        controller.update_field(FieldValue::Email("ada@example.com".to_string()));
        controller.update_field(FieldValue::ProjectType(Some(ProjectType::Research)));
        controller.update_field(FieldValue::Budget(Some(Budget::From50To100k)));
        controller.update_field(FieldValue::Timeline(Some(Timeline::OneToThreeMonths)));
        controller.update_field(FieldValue::Requirements(
            "Prototype a spatial design review tool for architects.".to_string(),
        ));
        controller
    }

    #[test]
    fn test_update_field_publishes_only_changed_field() {
        let mut controller = InquiryController::new();
        controller.update_field(FieldValue::Email("ada@example".to_string()));
        assert_eq!(
            controller.error(InquiryField::Email),
            Some("Enter a valid email address.")
        );
        assert_eq!(controller.errors().len(), 1);
        assert!(controller.error(InquiryField::Name).is_none());

        controller.update_field(FieldValue::Email("ada@example.com".to_string()));
        assert!(controller.errors().is_empty());
    }

    #[test]
    fn test_update_field_keeps_other_published_errors() {
        let mut controller = InquiryController::new();
        let mut notices = Vec::new();
        assert!(matches!(
            controller.begin_submit(&mut notices),
            SubmitStart::Rejected(_)
        ));
        assert_eq!(controller.errors().len(), 6);

        controller.update_field(FieldValue::Name("Ada".to_string()));
        assert_eq!(controller.errors().len(), 5);
        assert!(controller.error(InquiryField::Budget).is_some());
    }

    #[tokio::test]
    async fn submit_with_errors_never_calls_submitter() {
        let submitter = CountingSubmitter::default();
        let mut notices = Vec::new();
        let mut controller = InquiryController::new();
        controller.update_field(FieldValue::Name("Ada".to_string()));

        let outcome = controller
            .submit(&submitter, &mut notices, Duration::ZERO)
            .await;
        match outcome {
            SubmitOutcome::Rejected(errors) => assert_eq!(errors.len(), 5),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
        assert_eq!(notices, vec![Notice::review_needed()]);
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert_eq!(controller.form().name, "Ada");
    }

    #[tokio::test]
    async fn successful_submit_resets_form() {
        let submitter = CountingSubmitter::default();
        let mut notices = Vec::new();
        let mut controller = filled();

        let outcome = controller
            .submit(&submitter, &mut notices, Duration::ZERO)
            .await;
        assert!(matches!(outcome, SubmitOutcome::Sent));
        assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
        assert_eq!(controller.form(), &InquiryForm::default());
        assert!(controller.errors().is_empty());
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
    }

    #[tokio::test]
    async fn failed_submit_preserves_form() {
        let submitter = CountingSubmitter {
            fail: true,
            ..Default::default()
        };
        let mut notices = Vec::new();
        let mut controller = filled();
        let before = controller.form().clone();

        let outcome = controller
            .submit(&submitter, &mut notices, Duration::ZERO)
            .await;
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(controller.form(), &before);
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert_eq!(notices, vec![Notice::failed()]);

        // the user may retry manually
        let submitter = CountingSubmitter::default();
        let outcome = controller
            .submit(&submitter, &mut notices, Duration::ZERO)
            .await;
        assert!(matches!(outcome, SubmitOutcome::Sent));
    }

    #[tokio::test]
    async fn submit_while_submitting_is_noop() {
        let submitter = CountingSubmitter::default();
        let mut notices = Vec::new();
        let mut controller = filled();

        assert!(matches!(
            controller.begin_submit(&mut notices),
            SubmitStart::Ready(_)
        ));
        assert!(controller.is_submitting());
        assert_eq!(controller.begin_submit(&mut notices), SubmitStart::Busy);

        let outcome = controller
            .submit(&submitter, &mut notices, Duration::ZERO)
            .await;
        assert!(matches!(outcome, SubmitOutcome::Busy));
        assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
        assert!(notices.is_empty());
        assert!(controller.is_submitting());
    }

    #[tokio::test]
    async fn submit_waits_for_pacing_delay() {
        let submitter = CountingSubmitter::default();
        let mut notices = Vec::new();
        let mut controller = filled();
        let started = Instant::now();

        controller
            .submit(&submitter, &mut notices, Duration::from_millis(30))
            .await;
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
