//! `SQLite` implementation of [`PersonRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use rolodex_app::ports::PersonRepository;
use rolodex_domain::error::RolodexError;
use rolodex_domain::id::PersonId;
use rolodex_domain::person::Person;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Person`].
struct Wrapper(Person);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Person> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;

        Ok(Self(Person {
            id: PersonId::new(id),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO people (id, first_name, last_name, email, phone) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM people WHERE id = ?";
const SELECT_WINDOW: &str = "SELECT * FROM people ORDER BY id LIMIT ? OFFSET ?";
const SELECT_NEXT_ID: &str = "SELECT IFNULL(MAX(id), 0) + 1 FROM people";
const UPDATE: &str =
    "UPDATE people SET first_name = ?, last_name = ?, email = ?, phone = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM people WHERE id = ?";

/// `SQLite`-backed person repository.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PersonRepository for SqlitePersonRepository {
    async fn insert(&self, person: Person) -> Result<Person, RolodexError> {
        let id = person.id;
        sqlx::query(INSERT)
            .bind(id.get())
            .bind(&person.first_name)
            .bind(&person.last_name)
            .bind(&person.email)
            .bind(&person.phone)
            .execute(&self.pool)
            .await
            .map_err(|err| match err.as_database_error() {
                Some(db) if db.is_unique_violation() => RolodexError::AlreadyExists(id),
                _ => StorageError::from(err).into(),
            })?;

        Ok(person)
    }

    async fn get_by_id(&self, id: PersonId) -> Result<Option<Person>, RolodexError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self, start: i64, count: i64) -> Result<Vec<Person>, RolodexError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_WINDOW)
            .bind(count)
            .bind(start)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, person: Person) -> Result<Person, RolodexError> {
        // A zero-row UPDATE reports success, so existence is checked with a
        // read first. The two statements are not a transaction.
        let existing: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(person.id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;
        if existing.is_none() {
            return Err(RolodexError::NotFound(person.id));
        }

        sqlx::query(UPDATE)
            .bind(&person.first_name)
            .bind(&person.last_name)
            .bind(&person.email)
            .bind(&person.phone)
            .bind(person.id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(person)
    }

    async fn delete(&self, id: PersonId) -> Result<(), RolodexError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn next_id(&self) -> Result<PersonId, RolodexError> {
        let (id,): (i64,) = sqlx::query_as(SELECT_NEXT_ID)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(PersonId::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqlitePersonRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqlitePersonRepository::new(db.pool().clone())
    }

    fn test_person(id: i64, first_name: &str) -> Person {
        Person {
            id: PersonId::new(id),
            first_name: first_name.to_string(),
            last_name: "Example".to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
            phone: "555-0100".to_string(),
        }
    }

    #[tokio::test]
    async fn should_insert_and_retrieve_person() {
        let repo = setup().await;
        repo.insert(test_person(1, "Ada")).await.unwrap();

        let fetched = repo.get_by_id(PersonId::new(1)).await.unwrap().unwrap();
        assert_eq!(fetched.id, PersonId::new(1));
        assert_eq!(fetched.first_name, "Ada");
        assert_eq!(fetched.email, "ada@example.com");
    }

    #[tokio::test]
    async fn should_report_conflict_when_identifier_taken() {
        let repo = setup().await;
        repo.insert(test_person(1, "Ada")).await.unwrap();

        let result = repo.insert(test_person(1, "Grace")).await;
        assert!(matches!(
            result,
            Err(RolodexError::AlreadyExists(id)) if id == PersonId::new(1)
        ));
    }

    #[tokio::test]
    async fn should_return_none_when_person_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(PersonId::new(404)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_everything_when_count_is_negative() {
        let repo = setup().await;
        for (id, name) in [(2, "Grace"), (1, "Ada"), (3, "Edsger")] {
            repo.insert(test_person(id, name)).await.unwrap();
        }

        let all = repo.get_all(0, -1).await.unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(names, ["Ada", "Grace", "Edsger"]);
    }

    #[tokio::test]
    async fn should_apply_offset_and_limit_window() {
        let repo = setup().await;
        for id in 1..=5 {
            repo.insert(test_person(id, "Someone")).await.unwrap();
        }

        let window = repo.get_all(1, 2).await.unwrap();
        let ids: Vec<i64> = window.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, [2, 3]);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_table_empty() {
        let repo = setup().await;
        let all = repo.get_all(0, -1).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn should_overwrite_every_field_on_update() {
        let repo = setup().await;
        repo.insert(test_person(1, "Ada")).await.unwrap();

        let replacement = Person {
            id: PersonId::new(1),
            first_name: "Grace".to_string(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
        };
        repo.update(replacement).await.unwrap();

        let fetched = repo.get_by_id(PersonId::new(1)).await.unwrap().unwrap();
        assert_eq!(fetched.first_name, "Grace");
        assert_eq!(fetched.last_name, "");
        assert_eq!(fetched.email, "");
        assert_eq!(fetched.phone, "");
    }

    #[tokio::test]
    async fn should_fail_update_when_row_missing() {
        let repo = setup().await;
        let result = repo.update(test_person(7, "Nobody")).await;
        assert!(matches!(result, Err(RolodexError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_person_when_exists() {
        let repo = setup().await;
        repo.insert(test_person(1, "Ada")).await.unwrap();

        repo.delete(PersonId::new(1)).await.unwrap();

        let result = repo.get_by_id(PersonId::new(1)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_delete_silently_when_row_missing() {
        let repo = setup().await;
        repo.delete(PersonId::new(404)).await.unwrap();
    }

    #[tokio::test]
    async fn should_allocate_one_when_table_empty() {
        let repo = setup().await;
        let id = repo.next_id().await.unwrap();
        assert_eq!(id, PersonId::new(1));
    }

    #[tokio::test]
    async fn should_allocate_highest_plus_one_with_gaps() {
        let repo = setup().await;
        for id in [1, 2, 5] {
            repo.insert(test_person(id, "Someone")).await.unwrap();
        }

        let id = repo.next_id().await.unwrap();
        assert_eq!(id, PersonId::new(6));
    }
}
