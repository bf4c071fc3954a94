//! Browser side of the submission pipeline.
//!
//! `WebhookNotifier` posts the payload to the collector in `no-cors` mode, so
//! the response is opaque: a resolved request only means it left the
//! browser. `TimerLatency` is the artificial round-trip delay.

use common::config::SegmentFlowConfig;
use common::model::segment::SegmentPayload;
use common::pipeline::{Latency, Notifier, NotifyError, NotifyOutcome, SubmissionPipeline};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::RequestMode;

pub type BrowserPipeline = SubmissionPipeline<WebhookNotifier, TimerLatency>;

pub fn browser_pipeline(config: &SegmentFlowConfig) -> BrowserPipeline {
    SubmissionPipeline::new(
        WebhookNotifier {
            url: config.webhook_url.clone(),
        },
        TimerLatency {
            delay_ms: config.submit_delay_ms,
        },
    )
}

#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    pub url: String,
}

impl WebhookNotifier {
    async fn post(&self, payload: &SegmentPayload) -> Result<(), NotifyError> {
        let request = Request::post(&self.url)
            .mode(RequestMode::NoCors)
            .json(payload)
            .map_err(|e| NotifyError::Serialize(e.to_string()))?;

        request
            .send()
            .await
            .map(|_| ())
            .map_err(|e| NotifyError::Transport(e.to_string()))
    }
}

impl Notifier for WebhookNotifier {
    async fn notify(&self, payload: &SegmentPayload) -> NotifyOutcome {
        self.post(payload).await.into()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TimerLatency {
    pub delay_ms: u32,
}

impl Latency for TimerLatency {
    async fn wait(&self) {
        if self.delay_ms > 0 {
            TimeoutFuture::new(self.delay_ms).await;
        }
    }
}
