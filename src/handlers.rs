use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::intake::{validate_commercial, validate_residential, validate_schedule_change};
use crate::models::{
    CommercialQuoteForm, IntakeResponse, ResidentialQuoteForm, ScheduleChangeForm,
};
use crate::payload::{
    normalize_commercial, normalize_residential, normalize_schedule_change, LeadCategory,
    SubmitContext,
};
use crate::sinks::{FormEndpointService, WebhookService};
use crate::submit::Submission;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the static-form intake endpoint (URL-encoded sink).
    pub form_sink: FormEndpointService,
    /// Client for the workflow-automation webhook (JSON sink).
    pub webhook_sink: WebhookService,
}

/// Health check endpoint.
///
/// Returns the service status and version.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "quote-intake-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /api/v1/quotes/residential
///
/// Residential quote intake: validate the raw field values, normalize them
/// into the final Lead Record, deliver to both sinks, confirm.
///
/// Validation failure returns 422 with the ordered field-to-message map and the
/// focus field; it never reaches the network layer. Once validation passes
/// the response is a confirmation regardless of sink outcomes.
pub async fn residential_quote(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ResidentialQuoteForm>,
) -> Result<(StatusCode, Json<IntakeResponse>), AppError> {
    tracing::info!("Received residential quote request");

    let ctx = SubmitContext::now(LeadCategory::Residential);
    validate_residential(&form, ctx.today)?;

    let lead = normalize_residential(&form, &ctx);
    let mut submission = Submission::new();
    let outcome = submission
        .run(
            &state.form_sink,
            &state.webhook_sink,
            &lead.reference_id,
            &lead,
        )
        .await
        .context("Residential submission pass failed")?;

    let first = form
        .first_name
        .split_whitespace()
        .next()
        .unwrap_or("friend")
        .to_string();

    Ok((
        StatusCode::CREATED,
        Json(IntakeResponse {
            success: true,
            message: format!(
                "Thank you, {}! Your request has been sent successfully. Ana will review your details and get back to you shortly.",
                first
            ),
            reference_id: outcome.reference_id,
        }),
    ))
}

/// POST /api/v1/quotes/commercial
///
/// Commercial quote intake. Same pipeline as the residential variant with
/// the commercial field schema.
pub async fn commercial_quote(
    State(state): State<Arc<AppState>>,
    Json(form): Json<CommercialQuoteForm>,
) -> Result<(StatusCode, Json<IntakeResponse>), AppError> {
    tracing::info!("Received commercial quote request");

    validate_commercial(&form)?;

    let ctx = SubmitContext::now(LeadCategory::Commercial);
    let lead = normalize_commercial(&form, &ctx);
    let mut submission = Submission::new();
    let outcome = submission
        .run(
            &state.form_sink,
            &state.webhook_sink,
            &lead.reference_id,
            &lead,
        )
        .await
        .context("Commercial submission pass failed")?;

    Ok((
        StatusCode::CREATED,
        Json(IntakeResponse {
            success: true,
            message: "Thank you for reaching out. Ana will review your commercial space requirements and contact you shortly to discuss the next steps.".to_string(),
            reference_id: outcome.reference_id,
        }),
    ))
}

/// POST /api/v1/schedule-change
///
/// Schedule-change intake for existing clients (client portal form).
pub async fn schedule_change(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ScheduleChangeForm>,
) -> Result<(StatusCode, Json<IntakeResponse>), AppError> {
    tracing::info!("Received schedule change request");

    validate_schedule_change(&form)?;

    let ctx = SubmitContext::now(LeadCategory::ScheduleChange);
    let lead = normalize_schedule_change(&form, &ctx);
    let mut submission = Submission::new();
    let outcome = submission
        .run(
            &state.form_sink,
            &state.webhook_sink,
            &lead.reference_id,
            &lead,
        )
        .await
        .context("Schedule change submission pass failed")?;

    Ok((
        StatusCode::CREATED,
        Json(IntakeResponse {
            success: true,
            message: "Your schedule change request has been received. Ana will confirm the new schedule with you shortly.".to_string(),
            reference_id: outcome.reference_id,
        }),
    ))
}
