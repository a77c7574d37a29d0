use crate::route::Route;
use crate::{App, Msg};
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

/// Widths above this show the desktop navigation.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub fn is_desktop_width(width: f64) -> bool {
    width > MOBILE_BREAKPOINT_PX
}

/// Renders the sticky DeepShield header with desktop and mobile navigation.
pub fn render_header(current: Route, menu_open: bool, link: &Scope<App>) -> Html {
    html! {
        <header class="sticky-header">
            <nav class="nav-bar">
                { render_nav_link(Route::Home, html! {
                    <>
                        <img src="/Moon.svg" alt="DeepShield Logo" class="logo logo-glow" />
                        <span class="brand">{"DeepShield"}</span>
                    </>
                }, "brand-link") }

                <div class="nav-links desktop-only">
                    { for Route::NAV.iter().map(|&route| render_menu_item(route, current, "nav-link")) }
                </div>

                <button
                    class="menu-toggle mobile-only"
                    aria-label="Toggle menu"
                    onclick={link.callback(|_| Msg::ToggleMobileMenu)}
                >
                    <i class={classes!("fa-solid", if menu_open { "fa-xmark" } else { "fa-bars" })}></i>
                </button>
            </nav>

            // Link clicks bubble up here and close the menu.
            <div
                class={classes!("mobile-menu", "mobile-only", menu_open.then_some("open"))}
                onclick={link.callback(|_| Msg::CloseMobileMenu)}
            >
                { for Route::NAV.iter().map(|&route| render_menu_item(route, current, "mobile-link")) }
            </div>
        </header>
    }
}

fn render_menu_item(route: Route, current: Route, class: &'static str) -> Html {
    let class = classes!(class, (route == current).then_some("nav-link-active"));
    render_nav_link(route, html! { <span>{ route.label() }</span> }, class)
}

pub fn render_nav_link(route: Route, content: Html, class: impl Into<Classes>) -> Html {
    let classes: Classes = class.into();
    html! {
        <Link<Route> to={route} {classes}>
            { content }
        </Link<Route>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint() {
        assert!(is_desktop_width(1024.0));
        assert!(is_desktop_width(769.0));
        assert!(!is_desktop_width(768.0));
        assert!(!is_desktop_width(375.0));
    }
}
