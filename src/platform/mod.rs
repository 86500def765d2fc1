pub mod desktop;
pub mod timer;
