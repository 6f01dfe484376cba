//! Entry point for the WASM application

pub fn main() {
    ingestion_frontend::run();
}
