//! Interactive terminal guide.

mod app;
mod screens;

pub use app::run;
