//! IPC surface exposed to the Tauri UI, versioned by module.

pub mod v1;
