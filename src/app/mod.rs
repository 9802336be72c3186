pub mod render;
pub mod routes;

pub use render::PageRenderer;
pub use routes::{build_router, AppState, Route};
