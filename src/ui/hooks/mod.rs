pub mod debounce;
pub mod viewport;
