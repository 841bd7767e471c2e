//! Theme preference: read, apply, toggle.
//!
//! Reads the visitor's choice from `localStorage["theme"]` (`"dark"` or
//! `"light"`), falling back to the `prefers-color-scheme` media query, and
//! applies it as the `dark` class on `<html>`. Outside the browser every
//! call is a no-op and the preference reads as light.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const STORAGE_KEY: &str = "theme";

/// Stored value for a theme choice.
pub fn stored_value(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Interpret a stored value. Anything unrecognised counts as no preference.
pub fn parse_stored(value: &str) -> Option<bool> {
    match value {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Current preference: stored choice first, then the system setting.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
                if let Some(dark) = parse_stored(&value) {
                    return dark;
                }
            }
        }
        matches!(window.match_media("(prefers-color-scheme: dark)"), Ok(Some(mq)) if mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Add or remove the `dark` class on `<html>`.
pub fn apply(dark: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let classes = root.class_list();
        let result = if dark { classes.add_1("dark") } else { classes.remove_1("dark") };
        if let Err(err) = result {
            log::warn!("failed to apply theme class: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("theme dark={dark} (no document)");
    }
}

/// Flip the theme, apply it, and remember the choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(err) = storage.set_item(STORAGE_KEY, stored_value(next)) {
                log::warn!("failed to save theme preference: {err:?}");
            }
        }
    }
    next
}
