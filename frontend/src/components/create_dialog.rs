//! Modal form for a new spreadsheet.

use leptos::*;
use portfolio_core::{participants, AppState, Participant};

use crate::services::AppContext;

#[component]
pub fn CreateSpreadsheetDialog() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = ctx.state;
    let (filter, set_filter) = create_signal(String::new());

    let visible = move || state.with(|s| s.show_create_dialog);
    let loading = move || state.with(|s| s.is_loading());
    let valid = move || state.with(|s| s.create_form.is_valid());
    let brokers = move || {
        let query = filter.get();
        participants::search(&query).collect::<Vec<&'static Participant>>()
    };

    let close = move |_| {
        set_filter.set(String::new());
        state.update(AppState::close_create_dialog);
    };

    view! {
        <Show when=visible fallback=|| view! { }>
            <div class="modal d-block" tabindex="-1" style="background: rgba(0, 0, 0, 0.5);">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"📋 Create New Spreadsheet"</h5>
                            <button type="button" class="btn-close" on:click=close></button>
                        </div>
                        <div class="modal-body">
                            <div class="mb-3">
                                <label class="form-label">"Spreadsheet Title"</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    placeholder="Enter spreadsheet title"
                                    prop:value=move || state.with(|s| s.create_form.title.clone())
                                    on:input=move |ev| {
                                        let title = event_target_value(&ev);
                                        state.update(|s| s.create_form.title = title);
                                    }
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label">"Depository Participant (Broker)"</label>
                                <input
                                    type="search"
                                    class="form-control mb-2"
                                    placeholder="Search brokers..."
                                    prop:value=move || filter.get()
                                    on:input=move |ev| set_filter.set(event_target_value(&ev))
                                />
                                <select
                                    class="form-select"
                                    prop:value=move || {
                                        state.with(|s| {
                                            s.create_form.participant.map(|p| p.value).unwrap_or_default()
                                        })
                                    }
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.create_form.participant = participants::find(&value));
                                    }
                                >
                                    <option value="">"Select your broker..."</option>
                                    <For
                                        each=brokers
                                        key=|participant| participant.value
                                        children=|participant| view! {
                                            <option value=participant.value>
                                                {participant.icon} " " {participant.label}
                                            </option>
                                        }
                                    />
                                </select>
                                <small class="form-text text-muted">
                                    "Select your broker for accurate charge calculations"
                                </small>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=close>
                                "Cancel"
                            </button>
                            <button
                                type="button"
                                class="btn btn-primary"
                                disabled=move || !valid() || loading()
                                on:click=move |_| ctx.create()
                            >
                                {move || if loading() { "Creating..." } else { "Create Spreadsheet" }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
