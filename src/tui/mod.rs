pub mod app;
pub mod event;
pub mod input;
pub mod render;
pub mod theme;

pub use app::run;
