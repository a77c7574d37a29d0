use crate::pages::detect::{DetectPage, Msg};
use yew::prelude::*;

pub fn render_result_popup(page: &DetectPage, ctx: &Context<DetectPage>) -> Html {
    let Some(outcome) = page.session.outcome() else {
        return html! {};
    };

    // Failures render through the same popup as a genuine answer.
    let result = outcome.display_result();
    let verdict = result.verdict();

    html! {
        <div class="result-popup" role="dialog">
            <h3>{"Detection Result"}</h3>
            <p class="result-line">
                <span>{"Result: "}</span>
                <span class={classes!("verdict", verdict.css_class())}>{ verdict.to_string() }</span>
            </p>
            <p class="result-line">
                <strong>{"Similarity Score:"}</strong>{" "}{ result.similarity_display() }
            </p>
            <p class="result-line">
                <strong>{"Message:"}</strong>{" "}{ &result.message }
            </p>
            <button class="close-btn" onclick={ctx.link().callback(|_| Msg::ClosePopup)}>
                {"Close"}
            </button>
        </div>
    }
}

pub fn render_suggestion(page: &DetectPage) -> Html {
    if !page.show_suggestion {
        return html! {};
    }

    html! {
        <div class="suggestion">
            {"Try uploading another sample to verify further."}
        </div>
    }
}
