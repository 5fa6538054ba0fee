use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::Response,
};
use tracing::{instrument, warn};

use visitor_count_core::CounterResponse;

use crate::app_state::AppState;

/// Every method and path lands here. The request is not inspected beyond
/// logging; each invocation increments the counter.
#[instrument(skip_all, fields(%method, path = %uri.path()))]
pub async fn count_visit(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let resp = state.counter().handle().await;
    into_response(resp)
}

/// Convert without adding any header the core did not set.
pub fn into_response(resp: CounterResponse) -> Response {
    let mut out = Response::new(Body::from(resp.body));
    *out.status_mut() =
        StatusCode::from_u16(resp.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let headers = out.headers_mut();
    for (name, value) in resp.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(n), Ok(v)) => {
                headers.insert(n, v);
            }
            (Err(e), _) => warn!(header = name, error = %e, "dropping invalid header name"),
            (_, Err(e)) => warn!(header = name, error = %e, "dropping invalid header value"),
        }
    }
    out
}
