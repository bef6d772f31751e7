//! "Sync All Data" card

use leptos::*;

use crate::services::AppContext;

#[component]
pub fn SyncSection() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = ctx.state;

    let loading = move || state.with(|s| s.is_loading());
    let is_empty = move || state.with(|s| s.spreadsheets.is_empty());

    view! {
        <div class="card mb-4">
            <div class="card-body text-center">
                <h5 class="card-title">"🔄 Sync All Data"</h5>
                <p class="card-text text-muted">
                    "Process all spreadsheets with their respective broker configurations"
                </p>
                <button
                    class="btn btn-success btn-lg"
                    disabled=move || loading() || is_empty()
                    on:click=move |_| ctx.sync()
                >
                    {move || if loading() { "Syncing..." } else { "🚀 Sync All Data" }}
                </button>
            </div>
        </div>
    }
}
