//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="text-center text-muted py-4">
            <div>
                "Stock Portfolio Manager • Powered by "
                <span class="badge bg-secondary">"🦀 Rust + Leptos"</span>
            </div>
        </footer>
    }
}
