//! Root component: provides shared state and lays out the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything below `App` reads its state from context:
//! `LayoutSignal` (cards and workspace), `RwSignal<UiState>` (theme, menu),
//! `Notifier` (toasts), and `SiteConfig` (mail credentials, asset paths).
//! The window resize listener registered here is the only thing that feeds
//! viewport changes into the layout controller.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::sidebar::Sidebar;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::toast_host::ToastHost;
use crate::components::workspace_view::WorkspaceView;
use crate::config::SiteConfig;
use crate::state::layout::new_layout;
use crate::state::toast::Notifier;
use crate::state::ui::UiState;
use crate::util::{dark_mode, storage, viewport};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let layout = new_layout(viewport::current_viewport(), storage::size_storage());
    let dark = dark_mode::read_preference();
    dark_mode::apply(dark);
    let ui = RwSignal::new(UiState { dark_mode: dark, menu_open: false });

    provide_context(layout);
    provide_context(ui);
    provide_context(Notifier::new());
    provide_context(SiteConfig::from_build_env());

    #[cfg(feature = "csr")]
    {
        use crate::state::layout::apply;
        use crate::util::listener::WindowListener;

        let on_resize = move |_| {
            let vp = viewport::current_viewport();
            apply(layout, move |l| l.set_viewport(vp.width, vp.height));
        };
        let listener = StoredValue::new_local(WindowListener::attach("resize", on_resize));
        on_cleanup(move || listener.set_value(None));
    }

    view! {
        <Title text=format!("{} | Portfolio", crate::components::sections::content::OWNER_NAME) />
        <main class="portfolio">
            <Sidebar />
            <ThemeToggle />
            <WorkspaceView />
            <ToastHost />
        </main>
    }
}
