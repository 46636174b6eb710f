//! Request logging: ids, spans, route metrics and slow-request warnings.

mod request_ids;
mod routes;

use std::time::Instant;

use salvo::{
    Request, handler,
    http::{StatusCode, header::HeaderValue},
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, error, field, info, info_span, warn};

use super::{metrics, settings};

/// Wraps every request, routed or not. Scrapes of `/metrics` pass through
/// untouched so they do not count themselves.
#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if req.matched_path() == "metrics" {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();

    let request_id = request_ids::resolve(
        req.headers()
            .get(request_ids::HEADER)
            .and_then(|value| value.to_str().ok()),
    );
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        res.headers_mut().insert(request_ids::HEADER, value);
    }

    let method = req.method().clone();
    let route = routes::route_label(req.matched_path());

    let span = info_span!(
        parent: None,
        "http.request",
        request_id = %request_id,
        method = %method,
        route = %route,
        path = %req.uri().path(),
        remote_addr = %req.remote_addr(),
        status = field::Empty,
        duration_ms = field::Empty
    );

    {
        let _in_flight = metrics::request_started();

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;
    }

    let elapsed = started.elapsed();
    let status = res.status_code.unwrap_or(StatusCode::OK);
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    metrics::request_finished(method.as_str(), &route, status.as_u16(), elapsed);

    span.record("status", status.as_u16());
    span.record("duration_ms", duration_ms);
    span.in_scope(|| log_completion(status, duration_ms, settings::slow_request_threshold_ms()));
}

fn log_completion(status: StatusCode, duration_ms: u64, threshold_ms: u64) {
    let code = status.as_u16();

    if status.is_server_error() {
        error!(status = code, duration_ms, "request failed");
    } else if status.is_client_error() {
        warn!(status = code, duration_ms, "request rejected");
    } else {
        info!(status = code, duration_ms, "request completed");
    }

    if duration_ms > threshold_ms {
        warn!(duration_ms, threshold_ms, "slow request");
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;
    use uuid::Uuid;

    use super::*;

    #[handler]
    async fn ok(res: &mut Response) {
        res.render("ok");
    }

    fn make_service() -> Service {
        Service::new(
            Router::new()
                .push(Router::with_path("products").get(ok))
                .push(Router::with_path("product/{uuid}").get(ok))
                .push(Router::with_path("metrics").get(metrics::metrics_handler)),
        )
        .hoop(request_logging)
    }

    fn request_id(res: &Response) -> Option<&str> {
        res.headers()
            .get(request_ids::HEADER)
            .and_then(|value| value.to_str().ok())
    }

    #[tokio::test]
    async fn generates_request_id_when_missing() -> TestResult {
        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(
            request_id(&res).is_some_and(|id| Uuid::parse_str(id).is_ok()),
            "expected a generated UUID request id"
        );
        assert_eq!(res.take_string().await?, "ok");

        Ok(())
    }

    #[tokio::test]
    async fn echoes_incoming_request_id() {
        let res = TestClient::get("http://example.com/products")
            .add_header(request_ids::HEADER, "abc-123", true)
            .send(&make_service())
            .await;

        assert_eq!(request_id(&res), Some("abc-123"));
    }

    #[tokio::test]
    async fn unrouted_requests_still_get_a_request_id() {
        let res = TestClient::get("http://example.com/nowhere")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(request_id(&res).is_some());
    }

    #[tokio::test]
    async fn metrics_label_requests_by_route_pattern() -> TestResult {
        let service = make_service();
        let id = Uuid::now_v7().to_string();

        TestClient::get(format!("http://example.com/product/{id}"))
            .send(&service)
            .await;
        TestClient::get(format!("http://example.com/product/not-a-uuid-{id}"))
            .send(&service)
            .await;
        TestClient::get(format!("http://example.com/no-such-page/{id}"))
            .send(&service)
            .await;

        let exposition = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await?;

        assert!(exposition.contains(r#"route="/product/{uuid}",status_code="200""#));
        assert!(exposition.contains(r#"route="unmatched",status_code="404""#));
        assert!(
            !exposition.contains(&id),
            "raw request paths must not become label values"
        );

        Ok(())
    }
}
