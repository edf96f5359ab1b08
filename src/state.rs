use std::sync::Arc;

use crate::{service::PersonService, views::Views};

#[derive(Clone)]
pub struct AppState {
    pub persons: PersonService,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(persons: PersonService, views: Views) -> Self {
        Self {
            persons,
            views: Arc::new(views),
        }
    }
}
