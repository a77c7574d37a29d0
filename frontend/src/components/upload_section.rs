use super::utils::take_first_file;
use crate::pages::detect::{DetectPage, Msg};
use shared::{MediaKind, MediaSlot};
use strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_upload_section(page: &DetectPage, ctx: &Context<DetectPage>) -> Html {
    html! {
        <div class="upload-section">
            { for MediaSlot::iter().map(|slot| render_upload_card(page, ctx, slot)) }
        </div>
    }
}

fn render_upload_card(page: &DetectPage, ctx: &Context<DetectPage>, slot: MediaSlot) -> Html {
    let handle_change = ctx.link().batch_callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        take_first_file(&input).map(|file| Msg::FileSelected(slot, file))
    });

    html! {
        <div class="upload-card" key={slot.field_name()}>
            <h2>{ slot.title() }</h2>
            <label for={slot.input_id()} class="upload-area">
                <input
                    type="file"
                    id={slot.input_id()}
                    hidden=true
                    onchange={handle_change}
                />
                { render_preview(page, slot) }
            </label>
        </div>
    }
}

fn render_preview(page: &DetectPage, slot: MediaSlot) -> Html {
    let Some(file) = page.session.submission().get(slot) else {
        return html! { <span class="upload-placeholder">{"Click to upload"}</span> };
    };

    match (MediaKind::from_mime(&file.raw_mime_type()), page.previews.get(&slot)) {
        (MediaKind::Image, Some(url)) => html! {
            <img
                src={url.to_string()}
                alt={format!("{} preview", slot.title())}
                class="upload-preview"
            />
        },
        _ => html! { <span class="upload-filename">{ file.name() }</span> },
    }
}
