//! Recent upload receipts reported by the ingestion host.

use chrono::Local;
use leptos::*;

use crate::config::MAX_HISTORY_ENTRIES;
use crate::services::fetch_upload_history;
use crate::{format_file_size, UploadReceipt};

/// Table of recent uploads.
///
/// Re-fetches every time `refresh` changes.
#[component]
pub fn UploadHistory(#[prop(into)] refresh: Signal<u32>) -> impl IntoView {
    let receipts = create_local_resource(
        move || refresh.get(),
        |_| async move {
            fetch_upload_history().await.map_err(|e| {
                log::warn!("Could not load upload history: {}", e);
                e
            })
        },
    );

    view! {
        <div class="card shadow-sm mt-4">
            <div class="card-body">
                <h5 class="card-title">"Recent uploads"</h5>
                {move || match receipts.get() {
                    None => view! { <p class="text-muted mb-0">"Loading..."</p> }.into_view(),
                    Some(Err(_)) => view! {
                        <div class="alert alert-warning mb-0">"Upload history is unavailable."</div>
                    }
                    .into_view(),
                    Some(Ok(list)) if list.is_empty() => {
                        view! { <p class="text-muted mb-0">"No uploads yet."</p> }.into_view()
                    }
                    Some(Ok(list)) => view! { <ReceiptTable receipts=list/> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ReceiptTable(receipts: Vec<UploadReceipt>) -> impl IntoView {
    let rows = receipts
        .into_iter()
        .take(MAX_HISTORY_ENTRIES)
        .map(|receipt| {
            let received = receipt
                .received_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
            view! {
                <tr>
                    <td>{receipt.file_name}</td>
                    <td>{receipt.kind.label()}</td>
                    <td>{format_file_size(receipt.size_bytes)}</td>
                    <td>{received}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="table table-sm mb-0">
            <thead>
                <tr>
                    <th>"File"</th>
                    <th>"Type"</th>
                    <th>"Size"</th>
                    <th>"Received"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
