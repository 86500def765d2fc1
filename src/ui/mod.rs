pub mod components;
pub mod hooks;
pub mod modules;
pub mod state;
