//! Thin wrappers over the browser DOM.
//!
//! Everything here is a no-op (or returns `None`) off the web, so the views compile and
//! the pure logic can be tested natively.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Viewport-relative box of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub fn element_rect(id: &str) -> Option<Rect> {
    #[cfg(target_arch = "wasm32")]
    {
        let rect = document()?.get_element_by_id(id)?.get_bounding_client_rect();
        Some(Rect {
            top: rect.top(),
            bottom: rect.bottom(),
            left: rect.left(),
            right: rect.right(),
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}

/// `(width, height)` of the window.
pub fn viewport() -> Option<(f64, f64)> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some((width, height))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Blocking confirmation dialog. Off the web nothing is confirmed.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(prompt = message, "confirm outside the browser");
        false
    }
}

/// Full page navigation.
pub fn redirect(href: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                tracing::error!("Failed to redirect to {href}: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!(href, "redirect requested outside the browser");
}

/// Value of `name` in the current location's query string.
pub fn query_param(name: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        find_param(&search, name)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = name;
        None
    }
}

/// Look `name` up in a `?a=1&b=2` string. Empty values count as absent.
pub fn find_param(search: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Stop the page behind a dialog from scrolling.
pub fn lock_body_scroll(locked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = document().and_then(|d| d.body()) {
            let value = if locked { "hidden" } else { "" };
            let _ = body.style().set_property("overflow", value);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = locked;
}

/// Forward a click to a (usually hidden) element, e.g. a file input.
pub fn click(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = document()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            el.click();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

/// Window event delivered to a [`listen`] handler.
pub struct WindowEvent {
    #[cfg(target_arch = "wasm32")]
    inner: web_sys::Event,
}

impl WindowEvent {
    /// `KeyboardEvent.key`, for key events.
    pub fn key(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.inner
                .dyn_ref::<web_sys::KeyboardEvent>()
                .map(|e| e.key())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    /// Whether the event target lies inside any of the elements with these ids.
    pub fn target_within(&self, ids: &[&str]) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(target) = self
                .inner
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            else {
                return false;
            };
            let Some(doc) = document() else {
                return false;
            };
            ids.iter()
                .filter_map(|id| doc.get_element_by_id(id))
                .any(|el| el.contains(Some(&target)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = ids;
            false
        }
    }
}

/// Removes its window listener when dropped.
pub struct ListenerGuard {
    #[cfg(target_arch = "wasm32")]
    event: &'static str,
    #[cfg(target_arch = "wasm32")]
    capture: bool,
    #[cfg(target_arch = "wasm32")]
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback_and_bool(
                self.event,
                self.callback.as_ref().unchecked_ref(),
                self.capture,
            );
        }
    }
}

/// Listen for `event` on the window until the guard is dropped. `capture` also catches
/// events that do not bubble, such as scrolls of inner containers.
pub fn listen(
    event: &'static str,
    capture: bool,
    handler: impl FnMut(WindowEvent) + 'static,
) -> Option<ListenerGuard> {
    #[cfg(target_arch = "wasm32")]
    {
        let mut handler = handler;
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |inner: web_sys::Event| {
            handler(WindowEvent { inner })
        });
        window
            .add_event_listener_with_callback_and_bool(
                event,
                callback.as_ref().unchecked_ref(),
                capture,
            )
            .ok()?;
        Some(ListenerGuard {
            event,
            capture,
            callback,
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (event, capture, handler);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_param() {
        let search = "?userId=u-1&secureCode=123456&empty=";
        assert_eq!(find_param(search, "userId").as_deref(), Some("u-1"));
        assert_eq!(find_param(search, "secureCode").as_deref(), Some("123456"));
        assert_eq!(find_param(search, "empty"), None);
        assert_eq!(find_param(search, "missing"), None);
        assert_eq!(find_param("email=a%40b.com", "email").as_deref(), Some("a@b.com"));
    }
}
