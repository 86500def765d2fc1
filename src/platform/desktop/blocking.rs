/// Runs a synchronous store call from an event handler inside a named tracing span.
pub fn run_blocking<F, T>(task: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let _span = tracing::debug_span!("blocking", task).entered();
    f()
}
