use crate::application::http::{
    diary::router::DiaryApiDoc, health::HealthApiDoc, library::router::LibraryApiDoc,
    recipe::router::RecipeApiDoc, stats::router::StatsApiDoc, tag::router::TagApiDoc,
};
use utoipa::OpenApi;

// Handlers carry their full route in `#[utoipa::path]`, so the module docs
// all nest at the root; `router()` prefixes the configured root path.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Larder API"
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    // The `nest(...)` derive attribute requires a non-empty prefix per entry,
    // but these module docs nest at the root. Compose them at runtime with an
    // empty prefix, which leaves each handler's full path unchanged.
    pub fn openapi() -> utoipa::openapi::OpenApi {
        <ApiDoc as OpenApi>::openapi()
            .nest("", LibraryApiDoc::openapi())
            .nest("", RecipeApiDoc::openapi())
            .nest("", DiaryApiDoc::openapi())
            .nest("", TagApiDoc::openapi())
            .nest("", StatsApiDoc::openapi())
            .nest("", HealthApiDoc::openapi())
    }
}
