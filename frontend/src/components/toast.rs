//! Transient notification toast.
//!
//! Views own a `(message, is_error)` signal pair; this component renders
//! it and clears it after a few seconds.

use leptos::prelude::*;

/// Notification payload: message text plus error flag.
pub type Notification = Option<(String, bool)>;

#[component]
pub fn Toast(
    notification: ReadSignal<Notification>,
    set_notification: WriteSignal<Notification>,
) -> impl IntoView {
    // Auto-dismiss after 3 seconds.
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || set_notification.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || notification.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let (_, is_err) = notification.get().unwrap();
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notification.get().unwrap().0}</span>
                </div>
            </div>
        </Show>
    }
}
