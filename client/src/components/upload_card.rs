//! Tile for one recent pitch-deck upload.

use leptos::prelude::*;

use crate::content::records::UploadRecord;

#[component]
pub fn UploadCard(record: UploadRecord) -> impl IntoView {
    view! {
        <div class="upload-card">
            <svg class="upload-card__icon" viewBox="0 0 24 24" aria-hidden="true">
                <rect x="4" y="4" width="16" height="16" rx="3"/>
            </svg>
            <span class="upload-card__name">{record.filename}</span>
            <span class="upload-card__date">{record.uploaded}</span>
        </div>
    }
}
