use crate::components::handlers;
use crate::components::results::{render_result_popup, render_suggestion};
use crate::components::upload_section::render_upload_section;
use crate::components::utils::{debounce, render_error_message, render_footer};
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::{AttemptId, DetectConfig, DetectSession, DetectionOutcome, MediaSlot};
use std::collections::HashMap;
use yew::prelude::*;

pub enum Msg {
    FileSelected(MediaSlot, GlooFile),
    CheckScore,
    Resolved(AttemptId, DetectionOutcome),
    ClosePopup,
    ShowSuggestion,
}

/// The detection form. Owns the selected files, the attempt in flight and the
/// popup; nothing here outlives the page.
pub struct DetectPage {
    pub(crate) session: DetectSession<GlooFile>,
    pub(crate) previews: HashMap<MediaSlot, ObjectUrl>,
    pub(crate) error: Option<String>,
    pub(crate) show_suggestion: bool,
    pub(crate) suggestion_timeout: Option<Timeout>,
    pub(crate) config: DetectConfig,
}

impl Component for DetectPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: DetectSession::new(),
            previews: HashMap::new(),
            error: None,
            show_suggestion: false,
            suggestion_timeout: None,
            config: crate::api::detect_config(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(slot, file) => handlers::handle_file_selected(self, slot, file),
            Msg::CheckScore => handlers::handle_check_score(self, ctx),
            Msg::Resolved(attempt, outcome) => handlers::handle_resolved(self, attempt, outcome),
            Msg::ClosePopup => handlers::handle_close_popup(self, ctx),
            Msg::ShowSuggestion => {
                self.suggestion_timeout = None;
                self.show_suggestion = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="detect-page">
                <section class="detect-section">
                    <h1 class="page-title">{"Deepfake Detection Interface"}</h1>

                    { render_upload_section(self, ctx) }
                    { render_error_message(self.error.as_deref()) }
                    { self.render_check_button(ctx) }
                </section>

                <div class="brain-icon brain-left">
                    <img src="/Brain.svg" alt="brain left" />
                </div>
                <div class="brain-icon brain-right">
                    <img src="/Brain-1.svg" alt="brain right" />
                </div>

                { render_footer("©2024 All Rights Reserved. This site is protected by the Google Privacy Policy and Terms of Service apply.") }
                { render_result_popup(self, ctx) }
                { render_suggestion(self) }
            </div>
        }
    }
}

impl DetectPage {
    fn render_check_button(&self, ctx: &Context<Self>) -> Html {
        let pending = self.session.is_pending();
        let link = ctx.link().clone();

        html! {
            <button
                class={classes!("check-btn", pending.then_some("processing"))}
                disabled={pending}
                onclick={debounce(300, move || link.send_message(Msg::CheckScore))}
            >
                { if pending { "Processing..." } else { "Check Similarity Score" } }
            </button>
        }
    }
}
