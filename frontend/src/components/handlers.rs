use crate::api::{BrowserTimer, BrowserTransport};
use crate::pages::detect::{DetectPage, Msg};
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::{AttemptId, DetectClient, DetectionOutcome, MediaSlot};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const SUGGESTION_DELAY_MS: u32 = 200;

pub fn handle_file_selected(page: &mut DetectPage, slot: MediaSlot, file: GlooFile) -> bool {
    page.show_suggestion = false;
    if let Some(timeout) = page.suggestion_timeout.take() {
        timeout.cancel();
    }

    log::info!("Selected {} for {}", file.name(), slot);
    // Dropping the old ObjectUrl revokes it.
    page.previews.insert(slot, ObjectUrl::from(file.clone()));
    page.session.select(slot, file);
    true
}

pub fn handle_check_score(page: &mut DetectPage, ctx: &Context<DetectPage>) -> bool {
    let attempt = match page.session.begin() {
        Ok(attempt) => attempt,
        Err(e) => {
            log::warn!("Detection not started: {}", e);
            page.error = Some(e.to_string());
            return true;
        }
    };

    page.error = None;
    send_detection_request(page, ctx, attempt);
    true
}

pub fn handle_resolved(page: &mut DetectPage, attempt: AttemptId, outcome: DetectionOutcome) -> bool {
    page.session.resolve(attempt, outcome)
}

pub fn handle_close_popup(page: &mut DetectPage, ctx: &Context<DetectPage>) -> bool {
    page.session.dismiss();
    page.previews.clear();
    page.error = None;

    let link = ctx.link().clone();
    page.suggestion_timeout = Some(Timeout::new(SUGGESTION_DELAY_MS, move || {
        link.send_message(Msg::ShowSuggestion);
    }));
    true
}

fn send_detection_request(page: &DetectPage, ctx: &Context<DetectPage>, attempt: AttemptId) {
    let link = ctx.link().clone();
    let submission = page.session.submission().clone();
    let client = DetectClient::new(page.config.clone(), BrowserTransport::default(), BrowserTimer);

    spawn_local(async move {
        let outcome = match client.submit(attempt, &submission).await {
            Ok(outcome) => outcome,
            Err(e) => DetectionOutcome::Failed(e),
        };
        link.send_message(Msg::Resolved(attempt, outcome));
    });
}
