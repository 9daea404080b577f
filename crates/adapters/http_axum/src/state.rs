//! Shared application state for axum handlers.

use std::sync::Arc;

use rolodex_app::ports::PersonRepository;
use rolodex_app::services::person_service::PersonService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Person CRUD service.
    pub person_service: Arc<PersonService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            person_service: Arc::clone(&self.person_service),
        }
    }
}

impl<R> AppState<R>
where
    R: PersonRepository + Send + Sync + 'static,
{
    /// Create a new application state from the person service.
    pub fn new(person_service: PersonService<R>) -> Self {
        Self {
            person_service: Arc::new(person_service),
        }
    }
}
