use std::sync::Mutex;

/// Cross-test synchronization for process-wide state (env vars).
///
/// Tests run in parallel by default, but env vars are shared per-process.
/// Any test that mutates or depends on `FORGE_*` env vars should lock this mutex.
pub(crate) static ENV_MUTEX: Mutex<()> = Mutex::new(());
