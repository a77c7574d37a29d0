pub mod detect;
pub mod features;
pub mod home;
pub mod login;

pub use detect::DetectPage;
pub use features::FeaturesPage;
pub use home::HomePage;
pub use login::LoginPage;

use crate::components::header::render_nav_link;
use crate::route::Route;
use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="not-found">
            <h1>{"Page not found"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            { render_nav_link(Route::Home, html! { {"Back to Home"} }, "check-btn") }
        </main>
    }
}
