use crate::inquiry::{InquiryForm, InquirySubmitter, SubmitOutcome};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    /// Deliver a validated inquiry snapshot.
    SubmitInquiry(InquiryForm),
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    submitter: &'a dyn InquirySubmitter,
    pacing: Duration,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(
        state: &'a Arc<Mutex<State>>,
        submitter: &'a dyn InquirySubmitter,
        pacing: Duration,
    ) -> Self {
        Handler {
            state,
            submitter,
            pacing,
        }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::SubmitInquiry(form) => self.submit_inquiry(form).await?,
        }
        Ok(())
    }

    /// Wait out the pacing delay, deliver the inquiry and report back to
    /// state. The state lock is only taken once delivery finished.
    ///
    async fn submit_inquiry(&mut self, form: InquiryForm) -> Result<()> {
        if !self.pacing.is_zero() {
            tokio::time::sleep(self.pacing).await;
        }
        let result = self.submitter.submit(&form).await;
        let mut state = self.state.lock().await;
        match state.complete_inquiry(result) {
            SubmitOutcome::Sent => info!("Inquiry from '{}' delivered.", form.email),
            SubmitOutcome::Failed(e) => {
                warn!("Inquiry from '{}' not delivered: {}", form.email, e)
            }
            SubmitOutcome::Busy | SubmitOutcome::Rejected(_) => (),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::inquiry::{
        Budget, FieldValue, HttpSubmitter, LogSubmitter, Notice, ProjectType, Timeline,
    };
    use httpmock::MockServer;
    use std::sync::mpsc;
    use std::time::Instant;

    struct Fixture {
        state: Arc<Mutex<State>>,
        net_rx: mpsc::Receiver<Event>,
        _save_rx: mpsc::Receiver<String>,
    }

    fn fixture() -> Fixture {
        let (net_tx, net_rx) = mpsc::channel();
        let (save_tx, save_rx) = mpsc::channel();
        let state = State::new(net_tx, save_tx, &Config::new());
        Fixture {
            state: Arc::new(Mutex::new(state)),
            net_rx,
            _save_rx: save_rx,
        }
    }

    async fn submit_valid_form(fixture: &Fixture) -> Event {
        let mut state = fixture.state.lock().await;
        state
            .update_inquiry_field(FieldValue::Name("Grace Hopper".to_string()))
            .update_inquiry_field(FieldValue::Email("grace@example.com".to_string()))
            .update_inquiry_field(FieldValue::ProjectType(Some(ProjectType::Prototype)))
            .update_inquiry_field(FieldValue::Budget(Some(Budget::From25To50k)))
            .update_inquiry_field(FieldValue::Timeline(Some(Timeline::Asap)))
            .update_inquiry_field(FieldValue::Requirements(
                "Flight-deck procedures trainer for Quest 3.".to_string(),
            ))
            .submit_inquiry();
        fixture.net_rx.try_recv().unwrap()
    }

    #[tokio::test]
    async fn test_delivered_inquiry_resets_form() -> Result<()> {
        let fixture = fixture();
        let event = submit_valid_form(&fixture).await;
        let submitter = LogSubmitter;
        let mut handler = Handler::new(&fixture.state, &submitter, Duration::ZERO);
        handler.handle(event).await?;

        let state = fixture.state.lock().await;
        assert!(!state.inquiry().is_submitting());
        assert_eq!(state.inquiry().form().name, "");
        assert_eq!(
            state.notices().toasts().last().map(|t| &t.notice),
            Some(&Notice::sent())
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_rejected_inquiry_keeps_form() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/leads");
                then.status(500).body("down for maintenance");
            })
            .await;
        let fixture = fixture();
        let event = submit_valid_form(&fixture).await;
        let submitter = HttpSubmitter::new(&server.url("/leads"));
        let mut handler = Handler::new(&fixture.state, &submitter, Duration::ZERO);
        handler.handle(event).await?;

        mock.assert_async().await;
        let state = fixture.state.lock().await;
        assert!(!state.inquiry().is_submitting());
        assert_eq!(state.inquiry().form().name, "Grace Hopper");
        assert_eq!(
            state.notices().toasts().last().map(|t| &t.notice),
            Some(&Notice::failed())
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_pacing_delay_is_honoured() -> Result<()> {
        let fixture = fixture();
        let event = submit_valid_form(&fixture).await;
        let submitter = LogSubmitter;
        let mut handler = Handler::new(&fixture.state, &submitter, Duration::from_millis(50));
        let started = Instant::now();
        handler.handle(event).await?;
        assert!(started.elapsed() >= Duration::from_millis(50));
        Ok(())
    }
}
