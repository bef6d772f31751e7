use leptos::*;

use crate::config::APP_NAME;
use crate::services::AppContext;

/// Navbar with the signed-in user's menu.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = ctx.state;
    let (menu_open, set_menu_open) = create_signal(false);

    let user_name = move || state.with(|s| s.session.user().map(|user| user.name.clone()));

    let on_debug = move |_| {
        set_menu_open.set(false);
        log::info!("🔧 Fetching session debug info");
        ctx.debug_session();
    };

    let on_sign_out = move |_| {
        set_menu_open.set(false);
        log::info!("🚪 Signing out");
        ctx.sign_out();
    };

    view! {
        <header class="navbar navbar-expand-lg navbar-dark bg-primary mb-4">
            <div class="container">
                <span class="navbar-brand">"📊 " {APP_NAME}</span>
                {move || user_name().map(|name| view! {
                    <div class="dropdown">
                        <button
                            class="btn btn-outline-light dropdown-toggle"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            "👤 " {name}
                        </button>
                        <Show when=move || menu_open.get() fallback=|| view! { }>
                            <div class="dropdown-menu dropdown-menu-end show">
                                <button class="dropdown-item" on:click=on_debug>
                                    "🔧 Debug Session"
                                </button>
                                <hr class="dropdown-divider"/>
                                <button class="dropdown-item" on:click=on_sign_out>
                                    "🚪 Sign Out"
                                </button>
                            </div>
                        </Show>
                    </div>
                })}
            </div>
        </header>
    }
}
