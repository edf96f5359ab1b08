use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::{error::AppResult, models::Person};

/// Persistence gateway for [`Person`] records.
///
/// `save` is an upsert keyed on `id`: records without an id are inserted and
/// receive a fresh one, records with an id overwrite that row. Updating or
/// deleting an id that does not exist is a silent no-op.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn init(&self) -> AppResult<()>;
    async fn find_all(&self) -> AppResult<Vec<Person>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Person>>;
    async fn save(&self, person: Person) -> AppResult<Person>;
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgPersonRepository {
    pool: PgPool,
}

impl PgPersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn init(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Person>> {
        let persons = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, name, email, mobile
            FROM persons
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(persons)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Person>> {
        let person = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, name, email, mobile
            FROM persons
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(person)
    }

    async fn save(&self, person: Person) -> AppResult<Person> {
        let Some(id) = person.id else {
            let inserted = sqlx::query_as::<_, Person>(
                r#"
                INSERT INTO persons (name, email, mobile)
                VALUES ($1, $2, $3)
                RETURNING id, name, email, mobile
                "#,
            )
            .bind(person.name)
            .bind(person.email)
            .bind(person.mobile)
            .fetch_one(&self.pool)
            .await?;

            return Ok(inserted);
        };

        sqlx::query(
            r#"
            UPDATE persons
            SET name = $2, email = $3, mobile = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(person.name.as_deref())
        .bind(person.email.as_deref())
        .bind(person.mobile.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(person)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[derive(Debug)]
struct InMemoryTable {
    rows: BTreeMap<i64, Person>,
    next_id: i64,
}

impl Default for InMemoryTable {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Process-local repository, used for tests and the `memory` backend.
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    table: RwLock<InMemoryTable>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn init(&self) -> AppResult<()> {
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Person>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Person>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut person: Person) -> AppResult<Person> {
        let mut table = self.table.write().await;

        match person.id {
            Some(id) => {
                if let Some(existing) = table.rows.get_mut(&id) {
                    *existing = person.clone();
                }
            }
            None => {
                let id = table.next_id;
                table.next_id += 1;
                person.id = Some(id);
                table.rows.insert(id, person.clone());
            }
        }

        Ok(person)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}
