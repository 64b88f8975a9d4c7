pub mod app;
pub mod audio;
pub mod context;
pub mod driver;
pub mod renderer;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
