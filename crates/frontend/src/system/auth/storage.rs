use contracts::system::auth::Identity;
use web_sys::window;

const SESSION_FLAG_KEY: &str = "travelops_logged_in";
const IDENTITY_KEY: &str = "travelops_identity";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the session flag and identity to localStorage
pub fn save_session(identity: &Identity) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(SESSION_FLAG_KEY, "true");
        if let Ok(json) = serde_json::to_string(identity) {
            let _ = storage.set_item(IDENTITY_KEY, &json);
        }
    }
}

/// Restore the session from localStorage, if the flag is present
pub fn get_session() -> Option<Identity> {
    let storage = get_local_storage()?;
    let flag = storage.get_item(SESSION_FLAG_KEY).ok()??;
    if flag != "true" {
        return None;
    }
    let json = storage.get_item(IDENTITY_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear the session flag and identity
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_FLAG_KEY);
        let _ = storage.remove_item(IDENTITY_KEY);
    }
}
