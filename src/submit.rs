/// Dual-sink submission orchestration.
///
/// One logical Lead Record goes to two independent sinks: the form endpoint
/// (URL-encoded) and the webhook (JSON). The two calls are not transactionally
/// linked and carry equivalent data. Delivery failures are caught, logged for
/// the operator, and do not change the requester-visible outcome: the business
/// reconciles leads manually and prefers a clean confirmation over surfacing a
/// transient delivery failure. That policy is intentional; keep it.
use crate::errors::AppError;
use crate::sinks::{FormEndpointService, WebhookService};
use serde::Serialize;

/// Submission lifecycle state.
///
/// Editing, then Submitting once validation passes, then Submitted, always:
/// the network outcome does not branch the machine. Validation failure keeps
/// Editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Per-sink delivery record. Operator-facing only; the requester sees the
/// same confirmation regardless.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub reference_id: String,
    pub form_endpoint_delivered: bool,
    pub webhook_delivered: bool,
}

impl SubmissionOutcome {
    pub fn fully_delivered(&self) -> bool {
        self.form_endpoint_delivered && self.webhook_delivered
    }
}

/// One submission lifecycle. The Submitting state doubles as the
/// double-submit gate: `begin` refuses while a pass is in flight and after
/// completion, until an explicit `reset` ("send another").
#[derive(Debug, Default)]
pub struct Submission {
    state: FormState,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    fn begin(&mut self) -> Result<(), AppError> {
        match self.state {
            FormState::Editing => {
                self.state = FormState::Submitting;
                Ok(())
            }
            FormState::Submitting => Err(AppError::BadRequest(
                "A submission is already in progress".to_string(),
            )),
            FormState::Submitted => Err(AppError::BadRequest(
                "Already submitted; reset the form to send another request".to_string(),
            )),
        }
    }

    /// Runs one submission pass over an already validated, already normalized
    /// payload. Always lands in Submitted unless the gate refuses entry.
    pub async fn run<T: Serialize>(
        &mut self,
        form_sink: &FormEndpointService,
        webhook_sink: &WebhookService,
        reference_id: &str,
        payload: &T,
    ) -> Result<SubmissionOutcome, AppError> {
        self.begin()?;
        let outcome = deliver_to_sinks(form_sink, webhook_sink, reference_id, payload).await;
        self.state = FormState::Submitted;
        Ok(outcome)
    }

    /// "Send another": back to an editable form.
    pub fn reset(&mut self) {
        self.state = FormState::Editing;
    }
}

/// Issues both outbound calls, sequentially, each with its own bounded wait
/// (the sink clients carry request timeouts). Neither failure propagates.
pub async fn deliver_to_sinks<T: Serialize>(
    form_sink: &FormEndpointService,
    webhook_sink: &WebhookService,
    reference_id: &str,
    payload: &T,
) -> SubmissionOutcome {
    let form_endpoint_delivered = match form_sink.deliver(payload).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Form endpoint delivery failed for {}: {}", reference_id, e);
            false
        }
    };

    let webhook_delivered = match webhook_sink.deliver(payload).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Webhook delivery failed for {}: {}", reference_id, e);
            false
        }
    };

    let outcome = SubmissionOutcome {
        reference_id: reference_id.to_string(),
        form_endpoint_delivered,
        webhook_delivered,
    };

    if outcome.fully_delivered() {
        tracing::info!("Lead {} delivered to both sinks", reference_id);
    } else {
        tracing::warn!(
            "Lead {} delivery incomplete (form endpoint: {}, webhook: {})",
            reference_id,
            form_endpoint_delivered,
            webhook_delivered
        );
    }

    outcome
}
