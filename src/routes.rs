//! Client route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// The three client-side screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Signup,
}

impl Route {
    pub const ALL: [Self; 3] = [Self::Home, Self::Login, Self::Signup];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
        }
    }

    /// Path segment used when declaring the route with `leptos_router`.
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Match a location pathname. One trailing slash is tolerated; anything
    /// else unknown is `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}
