use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const THANKS_VISIBLE_MS: u32 = 2_500;

const FEATURES: [(&str, &str); 12] = [
    ("/Brain.svg", "Real-Time Deep Fake Detection"),
    ("/features/media-analysis.svg", "Comprehensive Media Analysis"),
    ("/features/Multi-format.svg", "Multi-Format Support"),
    ("/features/user-friendly.svg", "User-Friendly Interface"),
    ("/features/batch.svg", "Batch Processing"),
    ("/features/privacy.svg", "Privacy and Data Security"),
    ("/features/alerts.svg", "Customizable Alerts and Notifications"),
    ("/features/report.svg", "Detailed Reporting and Insights"),
    ("/features/api.svg", "API Integration"),
    ("/features/mobile.svg", "Mobile Compatibility"),
    ("/features/ethical.svg", "Ethical and Legal Guidance"),
    ("/features/supports-language.svg", "Support for Multiple Languages"),
];

const FOOTER_LINKS: [(&str, &[&str]); 4] = [
    ("Features", &["Detect videos", "Detect audio", "Detect pictures"]),
    ("Information", &[
        "Impact of deep fake",
        "Research and development",
        "Accuracy and Reliability",
        "Overview of deep fakes",
    ]),
    ("Support", &[
        "FAQ",
        "Contact",
        "Technical Support",
        "Troubleshooting Tips",
        "Updates and Release Notes",
    ]),
    ("Download", &["iOS", "Android", "Windows", "MAC"]),
];

const SOCIAL: [(&str, &str); 5] = [
    ("WhatsApp", "/social/whatsapp.svg"),
    ("YouTube", "/social/youtube.svg"),
    ("Instagram", "/social/instagram.svg"),
    ("Twitter", "/social/twitter.svg"),
    ("Facebook", "/social/facebook.svg"),
];

const CONTACT_EMAIL: &str = "rv1175544@gmail.com";
const CONTACT_PHONE: &str = "+91 (xxx) 603-8758";

/// Contents of the feedback form. Submissions stay in the page.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Feedback {
    pub email: String,
    pub message: String,
}

impl Feedback {
    /// Both fields filled in. Address format is left to the `type="email"` input.
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.message.trim().is_empty()
    }
}

#[function_component(FeaturesPage)]
pub fn features_page() -> Html {
    html! {
        <div class="features-page">
            <main>
                <h1 class="page-title">{"Fantastic Features"}</h1>

                <section class="feature-grid">
                    { for FEATURES.iter().map(|(icon, title)| html! {
                        <div class="feature-card" key={*title}>
                            <img loading="lazy" src={*icon} alt={*title} />
                            <h3>{ *title }</h3>
                        </div>
                    }) }
                </section>

                <ContactCard />
            </main>

            { render_links_footer() }
        </div>
    }
}

#[function_component(ContactCard)]
fn contact_card() -> Html {
    let feedback = use_state(Feedback::default);
    let submitted = use_state(|| false);
    let thanks_timeout = use_mut_ref(|| None::<Timeout>);

    let on_email = {
        let feedback = feedback.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            feedback.set(Feedback {
                email: input.value(),
                ..(*feedback).clone()
            });
        })
    };

    let on_message = {
        let feedback = feedback.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            feedback.set(Feedback {
                message: input.value(),
                ..(*feedback).clone()
            });
        })
    };

    let on_submit = {
        let feedback = feedback.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !feedback.is_complete() {
                return;
            }

            log::info!("Feedback received from {}", feedback.email.trim());
            feedback.set(Feedback::default());
            submitted.set(true);

            let submitted = submitted.clone();
            *thanks_timeout.borrow_mut() = Some(Timeout::new(THANKS_VISIBLE_MS, move || {
                submitted.set(false);
            }));
        })
    };

    html! {
        <section class="contact-card">
            <div class="contact-badge">
                <i class="fa-solid fa-envelope"></i>
            </div>
            <h2>{"Contact Us"}</h2>
            <p><span class="label">{"Gmail:"}</span>{" "}<span class="value">{ CONTACT_EMAIL }</span></p>
            <p><span class="label">{"Phone:"}</span>{" "}<span class="value">{ CONTACT_PHONE }</span></p>

            <form class="feedback-form" onsubmit={on_submit}>
                <h3>{"Share Your Experience"}</h3>
                <input
                    type="email"
                    placeholder="Your email"
                    required=true
                    value={feedback.email.clone()}
                    oninput={on_email}
                />
                <textarea
                    placeholder="Your message"
                    required=true
                    value={feedback.message.clone()}
                    oninput={on_message}
                />
                <button type="submit" class="feedback-btn">{"Send Feedback"}</button>
                if *submitted {
                    <p class="feedback-thanks">{"Thank you for your feedback!"}</p>
                }
            </form>
        </section>
    }
}

fn render_links_footer() -> Html {
    html! {
        <footer class="links-footer">
            <div class="footer-columns">
                { for FOOTER_LINKS.iter().map(|(title, links)| html! {
                    <div key={*title}>
                        <h4>{ *title }</h4>
                        <ul>
                            { for links.iter().map(|link| html! { <li>{ *link }</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="footer-social">
                <h2>{"Follow us on :"}</h2>
                <div class="social-icons">
                    { for SOCIAL.iter().map(|(name, src)| html! {
                        <a href="#" aria-label={*name} onclick={Callback::from(|e: MouseEvent| e.prevent_default())}>
                            <img loading="lazy" src={*src} alt={*name} />
                        </a>
                    }) }
                </div>
            </div>
            <div class="footer-legal">
                <p>{"©2024 All Rights Reserved. This site is protected by the Google Privacy Policy and Terms of Service apply."}</p>
            </div>
        </footer>
    }
}
