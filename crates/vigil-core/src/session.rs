//! Session state and navigation targets.

use std::fmt;

use crate::auth::AuthError;

/// Authentication state for the running process. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    /// True only between request dispatch and its resolution.
    pub loading: bool,
    pub last_error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// An authenticated session, as returned by a successful auth request.
    pub fn authenticated() -> Self {
        Self {
            authenticated: true,
            loading: false,
            last_error: None,
        }
    }

    /// Marks a request as in flight.
    ///
    /// Returns `false` (and changes nothing) when one is already outstanding.
    pub fn begin_request(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.last_error = None;
        true
    }

    /// Applies the outcome of an auth request.
    ///
    /// Failure leaves `authenticated` untouched.
    pub fn complete(&mut self, outcome: &Result<Session, AuthError>) {
        self.loading = false;
        match outcome {
            Ok(session) => {
                self.authenticated = session.authenticated;
                self.last_error = None;
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Abandons the in-flight request without changing authentication.
    pub fn cancel_request(&mut self) {
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        *self = Self::default();
    }
}

/// Navigation targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Dashboard,
    UserDashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::UserDashboard => "/UserDashboard",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Dashboard => "Dashboard",
            Route::UserDashboard => "User Dashboard",
        }
    }

    /// Whether the route renders the navbar shell and roster.
    pub fn is_dashboard(self) -> bool {
        matches!(self, Route::Dashboard | Route::UserDashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
