pub mod http;
pub mod import;
pub mod memory;
#[cfg(not(target_arch = "wasm32"))]
pub mod sqlite;

/// Local wall-clock time in the format stored alongside custom frameworks.
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
