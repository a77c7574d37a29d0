use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || inner_callback()));
    })
}

/// Takes the first file of a file input and resets it, so picking the same
/// file again still fires `change`.
pub fn take_first_file(input: &HtmlInputElement) -> Option<GlooFile> {
    let file = input.files().and_then(|files| files.item(0)).map(GlooFile::from);
    input.set_value("");
    file
}

pub fn render_error_message(error: Option<&str>) -> Html {
    if let Some(error_msg) = error {
        html! {
            <p class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                { " " }{ error_msg }
            </p>
        }
    } else {
        html! {}
    }
}

pub fn render_footer(text: &str) -> Html {
    html! {
        <footer class="app-footer">
            <p>{ text }</p>
        </footer>
    }
}
