use std::sync::Arc;

use quiz_core::QuestionCatalog;

pub trait UiApp: Send + Sync {
    fn app_title(&self) -> String;
    fn catalog(&self) -> Arc<QuestionCatalog>;
}

#[derive(Clone)]
pub struct AppContext {
    app_title: String,
    catalog: Arc<QuestionCatalog>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_title: app.app_title(),
            catalog: app.catalog(),
        }
    }

    #[must_use]
    pub fn app_title(&self) -> &str {
        &self.app_title
    }

    /// Questions every new session plays through.
    #[must_use]
    pub fn catalog(&self) -> Arc<QuestionCatalog> {
        Arc::clone(&self.catalog)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
