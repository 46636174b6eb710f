//! Prometheus metrics for the storefront, exposed at `GET /metrics`.

use std::{sync::LazyLock, time::Duration};

use prometheus::{
    HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TEXT_FORMAT,
    TextEncoder,
};
use salvo::{
    handler,
    http::{
        StatusError,
        header::{CONTENT_TYPE, HeaderValue},
    },
    prelude::Response,
};
use tracing::error;

/// Latency buckets in seconds. Page renders sit at the low end, image
/// uploads at the high end.
const LATENCY_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

static METRICS: LazyLock<Option<StorefrontMetrics>> = LazyLock::new(|| {
    StorefrontMetrics::register()
        .inspect_err(|source| error!(%source, "failed to register storefront metrics"))
        .ok()
});

/// How a sign in attempt ended.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SignInOutcome {
    Accepted,
    Rejected,
}

impl SignInOutcome {
    fn label(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug)]
struct StorefrontMetrics {
    registry: Registry,
    requests: IntCounterVec,
    latency: HistogramVec,
    in_flight: IntGauge,
    sign_ins: IntCounterVec,
}

impl StorefrontMetrics {
    fn register() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("eshop_web".to_string()), None)?;

        let requests = IntCounterVec::new(
            Opts::new(
                "http_requests_total",
                "Requests by method, route pattern and status code.",
            ),
            &["method", "route", "status_code"],
        )?;
        let latency = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Request latency by method and route pattern.",
            )
            .buckets(LATENCY_BUCKETS.to_vec()),
            &["method", "route"],
        )?;
        let in_flight = IntGauge::new("http_requests_in_flight", "Requests being served.")?;
        let sign_ins = IntCounterVec::new(
            Opts::new("sign_ins_total", "Sign in attempts by outcome."),
            &["outcome"],
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(latency.clone()))?;
        registry.register(Box::new(in_flight.clone()))?;
        registry.register(Box::new(sign_ins.clone()))?;

        Ok(Self {
            registry,
            requests,
            latency,
            in_flight,
            sign_ins,
        })
    }

    fn render(&self) -> Result<String, prometheus::Error> {
        let mut text = String::new();

        TextEncoder::new().encode_utf8(&self.registry.gather(), &mut text)?;

        Ok(text)
    }
}

/// Keeps the in-flight gauge raised until dropped.
#[derive(Debug)]
pub(super) struct InFlight(Option<&'static IntGauge>);

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(gauge) = self.0 {
            gauge.dec();
        }
    }
}

pub(super) fn request_started() -> InFlight {
    let gauge = METRICS.as_ref().map(|metrics| &metrics.in_flight);

    if let Some(gauge) = gauge {
        gauge.inc();
    }

    InFlight(gauge)
}

pub(super) fn request_finished(method: &str, route: &str, status_code: u16, elapsed: Duration) {
    let Some(metrics) = METRICS.as_ref() else {
        return;
    };

    let status_code = status_code.to_string();

    metrics
        .requests
        .with_label_values(&[method, route, status_code.as_str()])
        .inc();
    metrics
        .latency
        .with_label_values(&[method, route])
        .observe(elapsed.as_secs_f64());
}

pub(crate) fn record_sign_in(outcome: SignInOutcome) {
    if let Some(metrics) = METRICS.as_ref() {
        metrics.sign_ins.with_label_values(&[outcome.label()]).inc();
    }
}

/// Prometheus text exposition of every storefront metric.
#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) -> Result<(), StatusError> {
    let text = METRICS
        .as_ref()
        .ok_or_else(StatusError::internal_server_error)?
        .render()
        .map_err(|source| {
            error!(%source, "failed to encode metrics");
            StatusError::internal_server_error()
        })?;

    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_FORMAT));
    res.render(text);

    Ok(())
}
