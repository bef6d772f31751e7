//! Welcome card and sign-in landing

use leptos::*;

use crate::services::AppContext;

#[component]
pub fn Hero() -> impl IntoView {
    let state = expect_context::<AppContext>().state;
    let name = move || {
        state.with(|s| {
            s.session
                .user()
                .map(|user| user.name.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="card mb-4">
            <div class="card-body text-center">
                <h2 class="card-title">"Welcome back, " {name} "! 👋"</h2>
                <p class="card-text text-muted">
                    "Manage your stock portfolio with accurate broker-specific calculations"
                </p>
            </div>
        </div>
    }
}

/// Shown when nobody is signed in.
#[component]
pub fn Landing() -> impl IntoView {
    let login_url = expect_context::<AppContext>().login_url();

    view! {
        <div class="row justify-content-center">
            <div class="col-md-6">
                <div class="card">
                    <div class="card-body text-center p-5">
                        <h1 class="mb-4">"📊 Stock Portfolio Manager"</h1>
                        <p class="text-muted mb-4">
                            "Manage your stock portfolio with accurate broker-specific charge calculations"
                        </p>
                        <a href=login_url class="btn btn-primary btn-lg w-100">
                            "🔐 Login with Google"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
