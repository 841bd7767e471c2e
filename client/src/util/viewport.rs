//! Window dimensions as a layout viewport.

use spatial::viewport::Viewport;

/// Inner size of the browser window. Falls back to the default desktop
/// viewport when the window cannot be read.
pub fn current_viewport() -> Viewport {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Viewport::default();
        };
        match (window.inner_width(), window.inner_height()) {
            (Ok(w), Ok(h)) => match (w.as_f64(), h.as_f64()) {
                (Some(width), Some(height)) => Viewport::new(width, height),
                _ => Viewport::default(),
            },
            (Err(err), _) | (_, Err(err)) => {
                log::warn!("failed to read window size: {err:?}");
                Viewport::default()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        Viewport::default()
    }
}
