pub mod app;
pub mod context;
pub mod routes;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, SessionDisplay, UiApp, build_app_context};
pub use routes::Route;
