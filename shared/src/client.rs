use crate::config::DetectConfig;
use crate::error::DetectError;
use crate::model::{DetectionOutcome, DetectionResult, MediaSubmission};
use crate::session::AttemptId;
use futures::future::{Either, select};
use std::future::Future;
use std::pin::pin;
use std::time::Duration;
use url::Url;

/// Status and body of whatever came back, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends the multipart `realMedia`/`fakeMedia` request.
pub trait DetectTransport {
    type Media;

    fn post_detect(
        &self,
        url: &Url,
        real: &Self::Media,
        fake: &Self::Media,
    ) -> impl Future<Output = Result<RawResponse, DetectError>>;

    /// Cancels the request started by the last `post_detect`, if any.
    fn abort(&self);
}

pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

pub fn parse_response(raw: &RawResponse) -> Result<DetectionResult, DetectError> {
    if !raw.is_success() {
        log::debug!("Detection service rejected request: {} - {}", raw.status, raw.body);
        return Err(DetectError::Status {
            status: raw.status,
            body: raw.body.clone(),
        });
    }

    let result: DetectionResult = serde_json::from_str(&raw.body)?;
    if result.similarity().is_none() {
        return Err(DetectError::Malformed(
            "response carries neither similarity_score nor cosine_similarity".into(),
        ));
    }
    Ok(result)
}

pub struct DetectClient<T, S> {
    config: DetectConfig,
    transport: T,
    timer: S,
}

impl<T, S> DetectClient<T, S>
where
    T: DetectTransport,
    S: Timer,
{
    pub fn new(config: DetectConfig, transport: T, timer: S) -> Self {
        Self {
            config,
            transport,
            timer,
        }
    }

    pub fn config(&self) -> &DetectConfig {
        &self.config
    }

    /// Refuses to send anything unless both files are present; otherwise
    /// always yields an outcome.
    pub async fn submit(
        &self,
        attempt: AttemptId,
        submission: &MediaSubmission<T::Media>,
    ) -> Result<DetectionOutcome, DetectError> {
        let (real, fake) = submission.pair()?;
        Ok(self.detect(attempt, real, fake).await)
    }

    pub async fn detect(&self, attempt: AttemptId, real: &T::Media, fake: &T::Media) -> DetectionOutcome {
        let url = match self.config.detect_url() {
            Ok(url) => url,
            Err(e) => {
                log::error!("Attempt {}: {}", attempt, e);
                return DetectionOutcome::Failed(e);
            }
        };

        log::info!("Attempt {}: POST {}", attempt, url);
        let outcome: DetectionOutcome = self
            .send_with_timeout(&url, real, fake)
            .await
            .and_then(|raw| parse_response(&raw))
            .into();

        match &outcome {
            DetectionOutcome::Detected(result) => log::info!(
                "Attempt {}: likely_deepfake={} similarity={}",
                attempt,
                result.is_likely_deepfake,
                result.similarity_display()
            ),
            DetectionOutcome::Failed(e) => log::warn!("Attempt {} failed: {}", attempt, e),
        }
        outcome
    }

    async fn send_with_timeout(
        &self,
        url: &Url,
        real: &T::Media,
        fake: &T::Media,
    ) -> Result<RawResponse, DetectError> {
        let request = pin!(self.transport.post_detect(url, real, fake));
        let deadline = pin!(self.timer.sleep(self.config.timeout));

        match select(request, deadline).await {
            Either::Left((response, _)) => response,
            Either::Right(((), _)) => {
                self.transport.abort();
                Err(DetectError::Timeout(self.config.timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GENERIC_FAILURE_MESSAGE, MediaSlot, Verdict};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct StubTransport {
        reply: Option<Result<RawResponse, DetectError>>,
        calls: Cell<usize>,
        aborted: Cell<bool>,
        sent_to: RefCell<Option<String>>,
    }

    impl StubTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self::with(Some(Ok(RawResponse {
                status,
                body: body.to_string(),
            })))
        }

        fn hanging() -> Self {
            Self::with(None)
        }

        fn with(reply: Option<Result<RawResponse, DetectError>>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                aborted: Cell::new(false),
                sent_to: RefCell::new(None),
            }
        }
    }

    impl DetectTransport for StubTransport {
        type Media = &'static str;

        async fn post_detect(
            &self,
            url: &Url,
            _real: &&'static str,
            _fake: &&'static str,
        ) -> Result<RawResponse, DetectError> {
            self.calls.set(self.calls.get() + 1);
            self.sent_to.replace(Some(url.to_string()));
            match &self.reply {
                Some(reply) => reply.clone(),
                None => futures::future::pending().await,
            }
        }

        fn abort(&self) {
            self.aborted.set(true);
        }
    }

    /// Fires immediately when `expired`, never otherwise. Remembers the
    /// duration it was armed with.
    struct StubTimer {
        expired: bool,
        armed_with: Cell<Option<Duration>>,
    }

    impl StubTimer {
        fn new(expired: bool) -> Self {
            Self {
                expired,
                armed_with: Cell::new(None),
            }
        }
    }

    impl Timer for StubTimer {
        async fn sleep(&self, duration: Duration) {
            self.armed_with.set(Some(duration));
            if !self.expired {
                futures::future::pending::<()>().await;
            }
        }
    }

    fn client(transport: StubTransport, expired: bool) -> DetectClient<StubTransport, StubTimer> {
        DetectClient::new(DetectConfig::default(), transport, StubTimer::new(expired))
    }

    fn full_submission() -> MediaSubmission<&'static str> {
        let mut submission = MediaSubmission::new();
        submission.set(MediaSlot::Real, "a.png");
        submission.set(MediaSlot::Fake, "b.png");
        submission
    }

    #[test]
    fn test_missing_input_never_sends() {
        let client = client(StubTransport::replying(200, "{}"), false);

        let mut submission = MediaSubmission::new();
        submission.set(MediaSlot::Real, "a.png");
        let result = block_on(client.submit(AttemptId::new(), &submission));

        assert_eq!(result, Err(DetectError::MissingInput));
        assert_eq!(client.transport.calls.get(), 0);
    }

    #[test]
    fn test_successful_detection() {
        let body = r#"{"is_likely_deepfake":true,"similarity_score":0.42,"message":"High similarity"}"#;
        let client = client(StubTransport::replying(200, body), false);

        let outcome = block_on(client.submit(AttemptId::new(), &full_submission())).unwrap();
        let shown = outcome.display_result();

        assert!(outcome.failure().is_none());
        assert_eq!(shown.verdict(), Verdict::LikelyDeepfake);
        assert_eq!(shown.verdict().to_string(), "Likely Deepfake");
        assert_eq!(shown.similarity_display(), "0.42");
        assert_eq!(shown.message, "High similarity");
        assert_eq!(client.transport.calls.get(), 1);
        assert_eq!(
            client.transport.sent_to.borrow().as_deref(),
            Some("http://localhost:8877/detect")
        );
    }

    #[test]
    fn test_negative_detection_renders_likely_real() {
        let body = r#"{"is_likely_deepfake":false,"cosine_similarity":0.93,"message":"Analysis completed successfully"}"#;
        let client = client(StubTransport::replying(200, body), false);

        let outcome = block_on(client.submit(AttemptId::new(), &full_submission())).unwrap();
        let shown = outcome.display_result();
        assert_eq!(shown.verdict().to_string(), "Likely Real");
        assert_eq!(shown.similarity_display(), "0.93");
    }

    #[test]
    fn test_timeout_aborts_and_falls_back() {
        let client = client(StubTransport::hanging(), true);

        let outcome = block_on(client.submit(AttemptId::new(), &full_submission())).unwrap();
        assert!(matches!(outcome, DetectionOutcome::Failed(DetectError::Timeout(d)) if d == Duration::from_secs(30)));
        assert!(client.transport.aborted.get());

        let shown = outcome.display_result();
        assert!(!shown.is_likely_deepfake);
        assert_eq!(shown.similarity_score, Some(0.0));
        assert!(shown.message.contains("timed out"));
    }

    #[test]
    fn test_timer_armed_with_configured_timeout() {
        let body = r#"{"is_likely_deepfake":false,"similarity_score":0.5,"message":"ok"}"#;
        let client = client(StubTransport::replying(200, body), false);
        block_on(client.submit(AttemptId::new(), &full_submission())).unwrap();
        assert_eq!(client.timer.armed_with.get(), Some(Duration::from_millis(30_000)));

        let config = DetectConfig::default().with_timeout(Duration::from_millis(1_500));
        let client = DetectClient::new(config, StubTransport::hanging(), StubTimer::new(true));
        let outcome = block_on(client.submit(AttemptId::new(), &full_submission())).unwrap();
        assert_eq!(client.timer.armed_with.get(), Some(Duration::from_millis(1_500)));
        assert_eq!(outcome.failure(), Some(&DetectError::Timeout(Duration::from_millis(1_500))));
    }

    #[test]
    fn test_non_success_status_uses_generic_message() {
        let body = r#"{"error":"Face analysis failed","message":"Unable to process images."}"#;
        let client = client(StubTransport::replying(500, body), false);

        let outcome = block_on(client.submit(AttemptId::new(), &full_submission())).unwrap();
        assert!(matches!(
            outcome.failure(),
            Some(DetectError::Status { status: 500, .. })
        ));
        assert!(!client.transport.aborted.get());

        let shown = outcome.display_result();
        assert_eq!(shown.similarity_score, Some(0.0));
        assert!(!shown.is_likely_deepfake);
        assert_eq!(shown.message, GENERIC_FAILURE_MESSAGE);
        assert!(!shown.message.contains("timed out"));
    }

    #[test]
    fn test_network_failure_uses_generic_message() {
        let transport = StubTransport::with(Some(Err(DetectError::Transport("TypeError: Failed to fetch".into()))));
        let client = client(transport, false);

        let outcome = block_on(client.submit(AttemptId::new(), &full_submission())).unwrap();
        assert!(matches!(outcome.failure(), Some(DetectError::Transport(_))));
        assert_eq!(outcome.display_result().message, GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_malformed_body_treated_as_failure() {
        for body in ["not json", r#"{"message":"no verdict"}"#, r#"{"is_likely_deepfake":true,"message":"no score"}"#] {
            let client = client(StubTransport::replying(200, body), false);
            let outcome = block_on(client.submit(AttemptId::new(), &full_submission())).unwrap();
            assert!(matches!(outcome.failure(), Some(DetectError::Malformed(_))), "body: {}", body);
            assert_eq!(outcome.display_result().message, GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_response_wins_over_pending_timer() {
        let body = r#"{"is_likely_deepfake":false,"similarity_score":0.8,"message":"ok"}"#;
        let client = client(StubTransport::replying(201, body), false);

        let outcome = block_on(client.submit(AttemptId::new(), &full_submission())).unwrap();
        assert!(matches!(outcome, DetectionOutcome::Detected(_)));
        assert!(!client.transport.aborted.get());
    }

    #[test]
    fn test_parse_response_status_boundaries() {
        let ok = r#"{"is_likely_deepfake":false,"similarity_score":1.0,"message":"same"}"#;
        for status in [200, 204, 299] {
            let raw = RawResponse { status, body: ok.into() };
            assert!(parse_response(&raw).is_ok(), "status {}", status);
        }
        for status in [199, 300, 404, 502] {
            let raw = RawResponse { status, body: ok.into() };
            assert!(matches!(parse_response(&raw), Err(DetectError::Status { .. })), "status {}", status);
        }
    }
}
