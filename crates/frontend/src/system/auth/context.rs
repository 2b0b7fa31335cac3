use contracts::system::auth::Identity;
use leptos::prelude::*;

use super::storage;

// The back office has no server: the credential check is a fixed pair,
// the same gate the public site's login modal enforced.
const ADMIN_EMAIL: &str = "admin@gmail.com";
const ADMIN_PASSWORD: &str = "admin123";

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub identity: Option<Identity>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the session flag from localStorage on startup.
    let (auth_state, set_auth_state) = signal(AuthState {
        identity: storage::get_session(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Validate credentials against the hardcoded pair.
pub fn check_credentials(email: &str, password: &str) -> Result<Identity, String> {
    if email.trim() == ADMIN_EMAIL && password == ADMIN_PASSWORD {
        Ok(Identity {
            email: email.trim().to_string(),
        })
    } else {
        Err("Invalid email or password".to_string())
    }
}

/// Persist the session and flip the auth state.
pub fn complete_login(set_auth_state: WriteSignal<AuthState>, identity: Identity) {
    storage::save_session(&identity);
    set_auth_state.set(AuthState {
        identity: Some(identity),
    });
}

/// Clear the session flag and return to the login page.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
