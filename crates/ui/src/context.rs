use std::sync::Arc;

use services::QuizService;

/// What the application composition root (`crates/app`) hands to the UI.
pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn quiz_service(&self) -> Arc<QuizService>;
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    quiz_service: Arc<QuizService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title(),
            quiz_service: app.quiz_service(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    /// Year shown in the footer, taken from the service clock.
    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.quiz_service.clock().current_year()
    }
}

#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
