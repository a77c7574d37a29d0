use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{DetectConfig, DetectError, DetectTransport, MediaSlot, RawResponse, Timer, Url};
use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, AbortSignal, FormData};

/// Build-time override of the detection service base url.
const API_URL_OVERRIDE: Option<&str> = option_env!("DEEPSHIELD_API_URL");

pub fn detect_config() -> DetectConfig {
    DetectConfig::resolve(API_URL_OVERRIDE)
}

/// `fetch`-backed transport. Holds the abort controller of the request in
/// flight so a timeout can cancel it.
#[derive(Default)]
pub struct BrowserTransport {
    controller: InFlight<AbortController>,
}

/// Handle of the request in flight, cleared once the request settles.
pub(crate) struct InFlight<H>(RefCell<Option<H>>);

impl<H> Default for InFlight<H> {
    fn default() -> Self {
        Self(RefCell::new(None))
    }
}

impl<H> InFlight<H> {
    pub(crate) async fn track<T>(&self, handle: H, request: impl Future<Output = T>) -> T {
        self.0.replace(Some(handle));
        let result = request.await;
        self.0.replace(None);
        result
    }

    pub(crate) fn take(&self) -> Option<H> {
        self.0.borrow_mut().take()
    }
}

impl DetectTransport for BrowserTransport {
    type Media = GlooFile;

    async fn post_detect(
        &self,
        url: &Url,
        real: &GlooFile,
        fake: &GlooFile,
    ) -> Result<RawResponse, DetectError> {
        let form_data = build_form_data(real, fake)?;
        let controller = AbortController::new().map_err(js_error)?;
        let signal = controller.signal();
        self.controller
            .track(controller, send_form(url, &signal, form_data))
            .await
    }

    fn abort(&self) {
        if let Some(controller) = self.controller.take() {
            log::warn!("Aborting detection request");
            controller.abort();
        }
    }
}

async fn send_form(url: &Url, signal: &AbortSignal, form_data: FormData) -> Result<RawResponse, DetectError> {
    let response = Request::post(url.as_str())
        .abort_signal(Some(signal))
        .body(form_data)
        .map_err(|e| DetectError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| DetectError::Transport(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| DetectError::Transport(e.to_string()))?;
    Ok(RawResponse { status, body })
}

pub struct BrowserTimer;

impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

fn build_form_data(real: &GlooFile, fake: &GlooFile) -> Result<FormData, DetectError> {
    let form_data = FormData::new().map_err(js_error)?;
    form_data
        .append_with_blob_and_filename(MediaSlot::Real.field_name(), real.as_ref(), &real.name())
        .map_err(js_error)?;
    form_data
        .append_with_blob_and_filename(MediaSlot::Fake.field_name(), fake.as_ref(), &fake.name())
        .map_err(js_error)?;
    Ok(form_data)
}

fn js_error(value: JsValue) -> DetectError {
    DetectError::Transport(format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_handle_held_while_request_runs() {
        let slot = InFlight::default();
        let seen = block_on(slot.track(7, async { slot.0.borrow().as_ref().copied() }));
        assert_eq!(seen, Some(7));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_handle_cleared_after_failure() {
        let slot = InFlight::default();
        let result = block_on(slot.track("controller", async {
            Err::<RawResponse, _>(DetectError::Transport("TypeError: Failed to fetch".into()))
        }));
        assert!(matches!(result, Err(DetectError::Transport(_))));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_take_empties_the_slot() {
        let slot = InFlight::default();
        slot.0.replace(Some(3));
        assert_eq!(slot.take(), Some(3));
        assert_eq!(slot.take(), None);
    }
}
