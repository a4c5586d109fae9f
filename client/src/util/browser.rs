//! Thin wrappers over `window.location` and the browser clock.
//!
//! Requires a browser environment. Native builds (tests) compile these to
//! inert fallbacks so callers never need their own `cfg` gates.

/// Current `window.location.hash`, including the leading `#` when present.
pub fn current_hash() -> String {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        match window.location().hash() {
            Ok(hash) => hash,
            Err(err) => {
                log::warn!("read location hash failed: {err:?}");
                String::new()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Navigate to a fragment path (`/product/ahu`). The resulting `hashchange`
/// event is what updates the app's location.
pub fn set_hash(path: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_hash(&format!("#{path}")) {
            log::warn!("set hash {path} failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("set hash {path} ignored outside the browser");
    }
}

/// Point the browser at `href` (used for `mailto:` handoffs).
///
/// Returns `false` when the browser refused the navigation.
pub fn open_href(href: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.location().set_href(href) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("open {href} failed: {err:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("open {href} ignored outside the browser");
        false
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
