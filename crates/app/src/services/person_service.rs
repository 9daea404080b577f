//! Person service — use-cases for the address book.

use rolodex_domain::error::RolodexError;
use rolodex_domain::id::PersonId;
use rolodex_domain::person::Person;

use crate::ports::PersonRepository;

/// Application service for person CRUD operations.
pub struct PersonService<R> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert a new person under the identifier it carries.
    ///
    /// # Errors
    ///
    /// Returns [`RolodexError::AlreadyExists`] when the identifier is
    /// taken, or a storage error propagated from the repository.
    pub async fn create_person(&self, person: Person) -> Result<Person, RolodexError> {
        self.repo.insert(person).await
    }

    /// Look up a person by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RolodexError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_person(&self, id: PersonId) -> Result<Person, RolodexError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(RolodexError::NotFound(id))
    }

    /// List every person, in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`RolodexError::Empty`] when the address book holds no
    /// entries — an empty book is reported as a failure, not as an empty
    /// collection — or a storage error from the repository.
    pub async fn list_people(&self) -> Result<Vec<Person>, RolodexError> {
        let people = self.repo.get_all(0, -1).await?;
        if people.is_empty() {
            return Err(RolodexError::Empty);
        }
        Ok(people)
    }

    /// Replace every field of an existing person.
    ///
    /// # Errors
    ///
    /// Returns [`RolodexError::NotFound`] when the person is absent, or a
    /// storage error from the repository.
    pub async fn update_person(&self, person: Person) -> Result<Person, RolodexError> {
        self.repo.update(person).await
    }

    /// Delete a person by id. Deleting an absent person succeeds.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_person(&self, id: PersonId) -> Result<(), RolodexError> {
        self.repo.delete(id).await
    }

    /// Allocate the next free identifier: the highest stored one plus one,
    /// or `1` when the address book is empty.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn next_person_id(&self) -> Result<PersonId, RolodexError> {
        self.repo.next_id().await
    }
}
