use crate::components::header::render_nav_link;
use crate::route::Route;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthForm {
    Login,
    Signup,
}

impl AuthForm {
    fn toggled(self) -> Self {
        match self {
            AuthForm::Login => AuthForm::Signup,
            AuthForm::Signup => AuthForm::Login,
        }
    }

    fn title(self) -> &'static str {
        match self {
            AuthForm::Login => "Login",
            AuthForm::Signup => "Signup",
        }
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form = use_state(|| AuthForm::Login);
    let show_password = use_state(|| false);
    let show_confirm = use_state(|| false);

    let toggle_form = {
        let form = form.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            form.set(form.toggled());
        })
    };

    // Forms are presentational; nothing is submitted.
    let on_submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <div class="login-page">
            <div class="login-backdrop"></div>

            <nav class="login-nav">
                { render_nav_link(Route::Home, html! {
                    <>
                        <img src="/Moon.svg" alt="Moon" />
                        {"DeepShield"}
                    </>
                }, "login-brand") }
                <div class="login-links">
                    { for Route::NAV.iter().map(|&route| render_nav_link(
                        route,
                        html! { { route.label() } },
                        "login-link",
                    )) }
                </div>
                <img src="/Brain.svg" alt="Brain Icon" class="login-brain" />
            </nav>

            <div class="login-back">
                { render_nav_link(Route::Home, html! { {"← Back"} }, "login-link") }
            </div>

            <div class="login-card">
                <img src="/profile-icon.svg" alt="User Icon" class="login-avatar" />

                <div class="login-form-box">
                    <header>{ form.title() }</header>
                    <form action="#" onsubmit={on_submit}>
                        <div class="field">
                            <input type="email" placeholder="Email" />
                        </div>
                        { render_password_field(
                            if *form == AuthForm::Login { "Password" } else { "Create password" },
                            &show_password,
                        ) }
                        if *form == AuthForm::Signup {
                            { render_password_field("Confirm password", &show_confirm) }
                        } else {
                            <div class="forgot">
                                <a href="#">{"Forgot password?"}</a>
                            </div>
                        }
                        <div class="field">
                            <button type="submit" class="login-submit">{ form.title() }</button>
                        </div>
                    </form>

                    <div class="form-switch">
                        <span>
                            { if *form == AuthForm::Login { "Don't have an account? " } else { "Already have an account? " } }
                            <a href="#" onclick={toggle_form}>{ form.toggled().title() }</a>
                        </span>
                    </div>

                    <div class="divider"><span>{"Or"}</span></div>

                    <a href="#" class="social-login facebook">
                        <img src="/social/facebook.svg" alt="Facebook" />
                        {"Login with Facebook"}
                    </a>
                    <a href="#" class="social-login google">
                        <img src="/google.svg" alt="Google" />
                        {"Login with Google"}
                    </a>
                </div>
            </div>
        </div>
    }
}

fn render_password_field(placeholder: &'static str, visible: &UseStateHandle<bool>) -> Html {
    let toggle = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(!*visible))
    };

    html! {
        <div class="field">
            <input type={if **visible { "text" } else { "password" }} {placeholder} />
            <button type="button" class="reveal-btn" onclick={toggle}>
                { if **visible { "Hide" } else { "Show" } }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_toggle() {
        assert_eq!(AuthForm::Login.toggled(), AuthForm::Signup);
        assert_eq!(AuthForm::Signup.toggled().title(), "Login");
    }
}
