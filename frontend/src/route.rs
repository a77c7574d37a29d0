use yew_router::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/detect")]
    Detect,
    #[at("/features")]
    Features,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Links shown in the sticky header, in order.
    pub const NAV: [Route; 3] = [Route::Home, Route::Detect, Route::Features];

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Detect => "Detect",
            Route::Features => "Features",
            Route::Login => "Login",
            Route::NotFound => "Not Found",
        }
    }

    /// The login page renders its own navigation bar instead of the sticky header.
    pub fn has_own_nav(self) -> bool {
        self == Route::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/detect"), Some(Route::Detect));
        assert_eq!(Route::recognize("/features"), Some(Route::Features));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/detect/extra"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/404"), Some(Route::NotFound));
    }

    #[test]
    fn test_paths_round_trip_for_nav_links() {
        for route in Route::NAV {
            assert_eq!(Route::recognize(&route.to_path()), Some(route));
        }
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::recognize(&Route::Login.to_path()), Some(Route::Login));
    }

    #[test]
    fn test_only_login_has_own_nav() {
        assert!(Route::Login.has_own_nav());
        assert!(Route::NAV.iter().all(|route| !route.has_own_nav()));
        assert!(!Route::NotFound.has_own_nav());
    }
}
