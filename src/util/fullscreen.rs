//! Fullscreen capability for the expanded panel layout.
//!
//! TRADE-OFFS
//! ==========
//! Only the standard Fullscreen API is probed. Browsers without it get
//! `None` from [`Fullscreen::detect`] and the panel falls back to a CSS-only
//! expanded layout; the caller logs that downgrade.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

const CHANGE_EVENT: &str = "fullscreenchange";

/// Handle to the page's fullscreen API.
pub struct Fullscreen {
    document: web_sys::Document,
}

impl Fullscreen {
    /// `None` when the document cannot enter fullscreen (API missing, or an
    /// iframe without the `allowfullscreen` permission).
    pub fn detect() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        document.fullscreen_enabled().then_some(Self { document })
    }

    /// Ask the browser to show `element` fullscreen. Must run inside a user
    /// gesture handler.
    ///
    /// # Errors
    ///
    /// Returns the browser's rejection reason.
    pub fn enter(&self, element: &web_sys::Element) -> Result<(), String> {
        element.request_fullscreen().map_err(|e| format!("{e:?}"))
    }

    pub fn exit(&self) {
        if self.is_active() {
            self.document.exit_fullscreen();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    /// Call `callback` with the new fullscreen state whenever it changes.
    /// The listener is removed when the returned subscription is dropped.
    ///
    /// # Errors
    ///
    /// Returns the browser's error if the listener cannot be attached.
    pub fn on_change(&self, mut callback: impl FnMut(bool) + 'static) -> Result<FullscreenSubscription, String> {
        let probe = self.document.clone();
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            callback(probe.fullscreen_element().is_some());
        });
        self.document
            .add_event_listener_with_callback(CHANGE_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|e| format!("{e:?}"))?;
        Ok(FullscreenSubscription { document: self.document.clone(), closure })
    }
}

/// Live `fullscreenchange` listener.
pub struct FullscreenSubscription {
    document: web_sys::Document,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for FullscreenSubscription {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(CHANGE_EVENT, self.closure.as_ref().unchecked_ref());
    }
}
