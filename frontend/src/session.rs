use std::cell::RefCell;
use std::rc::Rc;

use crate::api::SessionUser;

#[cfg(target_arch = "wasm32")]
const TOKEN_KEY: &str = "leavedesk_token";
#[cfg(target_arch = "wasm32")]
const USER_KEY: &str = "leavedesk_user";

/// Holder for the bearer token and the signed-in user. Constructed once at
/// app startup and handed to `ApiClient` explicitly, so every token read is
/// traceable to this object. Backed by localStorage on wasm32 and by plain
/// memory on the host.
#[derive(Clone, Default)]
pub struct SessionContext {
    inner: Rc<RefCell<SessionData>>,
}

#[derive(Default)]
struct SessionData {
    token: Option<String>,
    user: Option<SessionUser>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session as persisted by a previous page load, or an empty one.
    pub fn restore() -> Self {
        let session = Self::new();
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                let token = storage.get_item(TOKEN_KEY).ok().flatten();
                let user = storage
                    .get_item(USER_KEY)
                    .ok()
                    .flatten()
                    .and_then(|raw| serde_json::from_str::<SessionUser>(&raw).ok());
                let mut data = session.inner.borrow_mut();
                data.token = token;
                data.user = user;
            }
        }
        session
    }

    pub fn start(&self, token: String, user: SessionUser) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, &token);
                if let Ok(raw) = serde_json::to_string(&user) {
                    let _ = storage.set_item(USER_KEY, &raw);
                }
            }
        }
        let mut data = self.inner.borrow_mut();
        data.token = Some(token);
        data.user = Some(user);
    }

    pub fn clear(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
            }
        }
        let mut data = self.inner.borrow_mut();
        data.token = None;
        data.user = None;
    }

    pub fn token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.inner.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.borrow().token.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}
