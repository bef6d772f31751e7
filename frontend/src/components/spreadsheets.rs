//! Spreadsheet list with open and delete actions.

use leptos::*;
use portfolio_core::{participants, AppState, Spreadsheet};

use crate::services::AppContext;

#[component]
pub fn SpreadsheetTable() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let state = ctx.state;

    let loading = move || state.with(|s| s.is_loading());
    let spreadsheets = move || state.with(|s| s.spreadsheets.clone());
    let is_empty = move || state.with(|s| s.spreadsheets.is_empty());

    view! {
        <div class="card mb-4">
            <div class="card-header d-flex justify-content-between align-items-center">
                <h5 class="mb-0">"📋 Your Spreadsheets"</h5>
                <div>
                    <button
                        class="btn btn-outline-secondary btn-sm me-2"
                        disabled=loading
                        on:click=move |_| ctx.refresh()
                    >
                        "🔄 Refresh"
                    </button>
                    <button
                        class="btn btn-primary btn-sm"
                        on:click=move |_| state.update(AppState::open_create_dialog)
                    >
                        "➕ Create New"
                    </button>
                </div>
            </div>
            <div class="card-body">
                <Show
                    when=move || !is_empty()
                    fallback=|| view! {
                        <p class="text-muted text-center mb-0">
                            "No spreadsheets yet. Create one to get started."
                        </p>
                    }
                >
                    <div class="table-responsive">
                        <table class="table table-hover align-middle">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Broker"</th>
                                    <th>"Created"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=spreadsheets
                                    key=|sheet| sheet.url.clone()
                                    children=move |sheet| view! { <SpreadsheetRow sheet=sheet/> }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn SpreadsheetRow(sheet: Spreadsheet) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let participant = sheet.participant_name();
    let broker = format!(
        "{} {}",
        participants::icon_for(participant),
        participants::label_for(participant)
    );
    let created = sheet
        .created_on()
        .map(|date| date.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "-".to_string());
    let open_url = sheet.url.clone();
    let delete_url = sheet.url.clone();

    view! {
        <tr>
            <td><strong>{sheet.title}</strong></td>
            <td><span class="badge bg-light text-dark">{broker}</span></td>
            <td>{created}</td>
            <td>
                <button
                    class="btn btn-outline-primary btn-sm me-2"
                    on:click=move |_| ctx.open(&open_url)
                >
                    "🔗 Open"
                </button>
                <button
                    class="btn btn-outline-danger btn-sm"
                    on:click=move |_| ctx.delete(delete_url.clone())
                >
                    "🗑️ Delete"
                </button>
            </td>
        </tr>
    }
}
