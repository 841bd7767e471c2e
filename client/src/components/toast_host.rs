//! Renders the toast stack and attaches it to the shared `Notifier`.

use leptos::prelude::*;

use crate::state::toast::Notifier;

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let queue = notifier.queue();

    notifier.set_attached(true);
    on_cleanup(move || notifier.set_attached(false));

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For each=move || queue.with(|q| q.items().to_vec()) key=|toast| toast.id let:toast>
                <div class=toast.kind.css_class()>
                    <span class="toast__icon">{toast.kind.icon()}</span>
                    <div class="toast__body">
                        <strong class="toast__title">{toast.title.clone()}</strong>
                        {toast.detail.clone().map(|detail| view! { <p class="toast__detail">{detail}</p> })}
                    </div>
                    <button class="toast__close" title="Dismiss" on:click=move |_| notifier.dismiss(toast.id)>
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}
