use crate::api::{AppState, identity};
use crate::domain::submission::Submission;
use crate::error::IntakeError;
use crate::i18n::{self, Lang};
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::{HeaderMap, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    pub description: Option<String>,
    pub contact: Option<String>,
}

/// Accepts a bug-report submission and relays it to the issue tracker.
///
/// Linear pipeline with five terminal exits: 405, 429, 400, 500 (tracker or
/// internal), 200. Every response body is a plain-text message in the
/// locale resolved from `Accept-Language`.
pub async fn submit(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> Response {
    let lang = i18n::resolve(headers.get(header::ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()));

    if method != Method::POST {
        return reply(StatusCode::METHOD_NOT_ALLOWED, lang.method_not_allowed());
    }

    let identity = identity::resolve(&headers, &state.config.identity.client_ip_header);

    match state.intake_service.check_cooldown(&identity).await {
        Ok(None) => {}
        Ok(Some(wait_secs)) => {
            tracing::debug!(identity = %identity, wait_secs, "submission rejected by cooldown");
            return reply(StatusCode::TOO_MANY_REQUESTS, lang.rate_limited(wait_secs));
        }
        Err(e) => return internal(lang, &e),
    }

    // The body is only inspected past the cooldown gate: a rate-limited
    // client is answered 429 even when its body is invalid.
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "failed to parse form body");
            return reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                lang.internal_error(&rejection.body_text()),
            );
        }
    };

    let Some(submission) = Submission::parse(form.description, form.contact) else {
        tracing::debug!(identity = %identity, "submission missing required fields");
        return reply(StatusCode::BAD_REQUEST, lang.missing_fields());
    };

    match state.intake_service.submit(&identity, &submission).await {
        Ok(()) => reply(StatusCode::OK, lang.success()),
        Err(IntakeError::Tracker { status, body }) => {
            reply(StatusCode::INTERNAL_SERVER_ERROR, lang.tracker_error(status, &body))
        }
        Err(e) => internal(lang, &e),
    }
}

fn internal(lang: Lang, error: &IntakeError) -> Response {
    tracing::error!(error = %error, "intake request failed");
    reply(StatusCode::INTERNAL_SERVER_ERROR, lang.internal_error(&error.to_string()))
}

fn reply(status: StatusCode, body: impl Into<String>) -> Response {
    (status, body.into()).into_response()
}
