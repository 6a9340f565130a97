pub mod debounce;
pub mod ids;
