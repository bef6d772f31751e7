//! CSV upload into an existing spreadsheet.
//!
//! The target is the spreadsheet whose title matches the one typed here.

use leptos::*;
use portfolio_core::{uploader, Store, UploaderState, STATUS_RESET_DELAY};
use web_sys::{Event, HtmlInputElement};

use crate::services::{read_file_list, AppContext, SignalStore};

#[component]
pub fn FileUploader() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let app = ctx.state;
    let upload = SignalStore::new(UploaderState::new());

    // Keep the target in step with the list.
    create_effect(move |_| {
        let spreadsheets = app.with(|s| s.spreadsheets.clone());
        upload.update(|u| u.refresh_target(&spreadsheets));
    });

    let on_files = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else {
            return;
        };
        if list.length() == 0 || upload.read(UploaderState::can_select) != Some(true) {
            return;
        }

        spawn_local(async move {
            let read = read_file_list(&list).await;
            // Emptied so picking the same files again still fires `change`.
            input.set_value("");
            match read {
                Ok(files) => {
                    log::info!("📁 {} file(s) selected", files.len());
                    let spreadsheets = app.read(|s| s.spreadsheets.clone()).unwrap_or_default();
                    upload.write(|u| u.select_files(files, &spreadsheets));
                }
                Err(e) => log::error!("❌ {}", e),
            }
        });
    };

    let on_title = move |ev: Event| {
        let title = event_target_value(&ev);
        let spreadsheets = app.read(|s| s.spreadsheets.clone()).unwrap_or_default();
        upload.update(|u| u.set_title(title, &spreadsheets));
    };

    let on_submit = move |_| {
        let api = ctx.client();
        spawn_local(async move {
            match uploader::submit(&*api, &upload).await {
                Ok(ticket) => {
                    gloo_timers::future::sleep(STATUS_RESET_DELAY).await;
                    upload.write(|u| u.reset_status(ticket));
                }
                Err(e) => log::warn!("Upload not started: {}", e),
            }
        });
    };

    let file_names = move || {
        upload.with(|u| {
            u.files()
                .iter()
                .map(|file| format!("{} ({} bytes)", file.name, file.size()))
                .enumerate()
                .collect::<Vec<_>>()
        })
    };
    let has_files = move || upload.with(|u| !u.files().is_empty());
    let can_submit = move || upload.with(|u| u.can_submit());
    let status = move || upload.with(|u| u.status().message());
    let unmatched = move || {
        upload.with(|u| !u.files().is_empty() && !u.title().is_empty() && u.target_url().is_none())
    };

    view! {
        <div class="card mb-4">
            <div class="card-header">
                <h5 class="mb-0">"📤 Upload CSV Data"</h5>
            </div>
            <div class="card-body">
                <input
                    type="file"
                    id="csvFiles"
                    multiple=true
                    accept=".csv"
                    style="display: none;"
                    on:change=on_files
                />
                <label for="csvFiles" class="btn btn-outline-primary mb-3">
                    "📁 Choose CSV files"
                </label>

                <Show when=has_files fallback=|| view! { }>
                    <div class="mb-3">
                        <For
                            each=file_names
                            key=|entry| entry.clone()
                            children=|(index, name)| view! {
                                <div><strong>"File " {index + 1} ":"</strong> " " {name}</div>
                            }
                        />
                    </div>
                </Show>

                <div class="mb-3">
                    <label class="form-label">"Spreadsheet Title"</label>
                    <input
                        type="text"
                        class="form-control"
                        placeholder="Title of an existing spreadsheet"
                        prop:value=move || upload.with(|u| u.title().to_string())
                        on:input=on_title
                    />
                    <Show when=unmatched fallback=|| view! { }>
                        <small class="text-warning">"No spreadsheet with this title"</small>
                    </Show>
                </div>

                <button class="btn btn-primary" disabled=move || !can_submit() on:click=on_submit>
                    "➕ Add Data"
                </button>
                <p class="mt-2 mb-0">{status}</p>
            </div>
        </div>
    }
}
