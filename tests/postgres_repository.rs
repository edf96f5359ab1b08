use person_crud::{
    models::Person,
    repository::{PersonRepository, PgPersonRepository},
};
use sqlx::{PgPool, postgres::PgPoolOptions};

async fn maybe_pool() -> Option<PgPool> {
    let database_url = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()?;

    PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .ok()
}

#[tokio::test]
async fn postgres_repository_crud_flow() {
    let Some(pool) = maybe_pool().await else {
        eprintln!(
            "Skipping postgres_repository_crud_flow: TEST_DATABASE_URL/DATABASE_URL is not set or database is unreachable."
        );
        return;
    };

    let repo = PgPersonRepository::new(pool.clone());
    repo.init().await.expect("migrations should run");

    sqlx::query("TRUNCATE TABLE persons RESTART IDENTITY")
        .execute(repo.pool())
        .await
        .expect("truncate should succeed");

    let alice = repo
        .save(Person::new("Alice", "a@x.com", "555"))
        .await
        .expect("insert should succeed");
    let alice_id = alice.id.expect("insert should assign an id");
    assert_eq!(alice.name.as_deref(), Some("Alice"));

    let bob = repo
        .save(Person {
            id: None,
            name: None,
            email: Some(String::new()),
            mobile: None,
        })
        .await
        .expect("insert with nulls should succeed");
    let bob_id = bob.id.expect("insert should assign an id");
    assert_ne!(alice_id, bob_id);

    let fetched = repo
        .find_by_id(alice_id)
        .await
        .expect("find should succeed")
        .expect("person should exist");
    assert_eq!(fetched, alice);

    let mut edited = Person::new("Alicia", "alicia@x.com", "556");
    edited.id = Some(alice_id);
    repo.save(edited.clone()).await.expect("update should succeed");
    assert_eq!(
        repo.find_by_id(alice_id).await.expect("find"),
        Some(edited)
    );

    let mut ghost = Person::new("Ghost", "", "");
    ghost.id = Some(alice_id + bob_id + 100);
    repo.save(ghost).await.expect("update of unknown id should not fail");

    assert_eq!(repo.find_all().await.expect("find_all").len(), 2);

    repo.delete_by_id(bob_id).await.expect("delete should succeed");
    repo.delete_by_id(bob_id)
        .await
        .expect("second delete should be a no-op");

    assert!(repo.find_by_id(bob_id).await.expect("find").is_none());
    assert_eq!(repo.find_all().await.expect("find_all").len(), 1);
}
