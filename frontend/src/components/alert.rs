//! Dismissible alert banner

use leptos::*;
use portfolio_core::AppState;

use crate::services::AppContext;

#[component]
pub fn AlertBanner() -> impl IntoView {
    let state = expect_context::<AppContext>().state;

    move || {
        state.with(|s| s.alert.clone()).map(|alert| {
            view! {
                <div
                    class=format!("alert alert-{} alert-dismissible", alert.kind.variant())
                    role="alert"
                >
                    {alert.kind.emoji()} " " {alert.text}
                    <button
                        type="button"
                        class="btn-close"
                        aria-label="Close"
                        on:click=move |_| state.update(AppState::dismiss_alert)
                    ></button>
                </div>
            }
        })
    }
}
