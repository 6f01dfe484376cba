//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="container text-muted small py-4 mt-4 border-top">
            <div>
                "Files are acknowledged on receipt and processed in the background. "
                <span class="rust-badge">"Rust + Leptos"</span>
            </div>
            <div>
                <a href="/api/ingestion/health" class="footer-link" target="_blank">"Service status"</a>
            </div>
        </footer>
    }
}
