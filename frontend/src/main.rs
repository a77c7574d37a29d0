mod api;
mod components;
mod pages;
mod route;

use components::header::{is_desktop_width, render_header};
use gloo_events::EventListener;
use pages::{DetectPage, FeaturesPage, HomePage, LoginPage, NotFoundPage};
use route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub enum Msg {
    ToggleMobileMenu,
    CloseMobileMenu,
}

pub struct App {
    mobile_menu_open: bool,
    resize_listener: Option<EventListener>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut app = Self {
            mobile_menu_open: false,
            resize_listener: None,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "resize", move |_| {
                let width = web_sys::window()
                    .and_then(|window| window.inner_width().ok())
                    .and_then(|width| width.as_f64());
                if width.is_some_and(is_desktop_width) {
                    link.send_message(Msg::CloseMobileMenu);
                }
            });
            app.resize_listener = Some(listener);
        }

        app
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMobileMenu => {
                self.mobile_menu_open = !self.mobile_menu_open;
                true
            }
            Msg::CloseMobileMenu => {
                let changed = self.mobile_menu_open;
                self.mobile_menu_open = false;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let menu_open = self.mobile_menu_open;
        let link = ctx.link().clone();
        let render = Callback::from(move |route: Route| {
            log::debug!("Rendering route {}", route.to_path());
            if route.has_own_nav() {
                return render_page(route);
            }
            html! {
                <div class="page">
                    { render_header(route, menu_open, &link) }
                    { render_page(route) }
                </div>
            }
        });

        html! {
            <BrowserRouter>
                <Switch<Route> {render} />
            </BrowserRouter>
        }
    }
}

fn render_page(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Detect => html! { <DetectPage /> },
        Route::Features => html! { <FeaturesPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("DeepShield starting, detection endpoint {}", api::detect_config().base_url());
    yew::Renderer::<App>::new().render();
}
