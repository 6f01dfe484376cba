use leptos::*;
use leptos_router::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="navbar navbar-dark bg-primary mb-4">
            <div class="container">
                <A href="/ingestion" class="navbar-brand">
                    <i class="fas fa-heartbeat me-2"></i>
                    "Data Ingestion"
                </A>
                <nav class="d-flex gap-3">
                    <A href="/ingestion" class="nav-link text-white">"Upload"</A>
                    <A href="/ingestion/history" class="nav-link text-white">"History"</A>
                    <span
                        class="text-white-50"
                        data-bs-toggle="tooltip"
                        data-bs-placement="bottom"
                        title="Upload CSV exports of patients or medical records"
                    >
                        <i class="fas fa-info-circle"></i>
                    </span>
                </nav>
            </div>
        </header>
    }
}
