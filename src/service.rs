use std::sync::Arc;

use crate::{error::AppResult, models::Person, repository::PersonRepository};

/// Thin seam between the HTTP handlers and the repository.
#[derive(Clone)]
pub struct PersonService {
    repo: Arc<dyn PersonRepository>,
}

impl PersonService {
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_persons(&self) -> AppResult<Vec<Person>> {
        self.repo.find_all().await
    }

    pub async fn get_person_by_id(&self, id: i64) -> AppResult<Option<Person>> {
        self.repo.find_by_id(id).await
    }

    pub async fn save_person(&self, person: Person) -> AppResult<Person> {
        self.repo.save(person).await
    }

    pub async fn delete_person(&self, id: i64) -> AppResult<()> {
        self.repo.delete_by_id(id).await
    }
}
