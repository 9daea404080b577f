//! Storage port — repository trait for person persistence.

use std::future::Future;

use rolodex_domain::error::RolodexError;
use rolodex_domain::id::PersonId;
use rolodex_domain::person::Person;

/// Repository for persisting and querying [`Person`]s.
///
/// The quirks are part of the contract, not accidents of one backend:
/// [`update`](PersonRepository::update) checks existence with a separate
/// read, and [`delete`](PersonRepository::delete) succeeds even when no row
/// matched.
pub trait PersonRepository {
    /// Insert a new person under the identifier it carries.
    ///
    /// Fails with [`RolodexError::AlreadyExists`] when the identifier is
    /// already taken.
    fn insert(&self, person: Person) -> impl Future<Output = Result<Person, RolodexError>> + Send;

    /// Get a person by identifier.
    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, RolodexError>> + Send;

    /// Get a window of people in ascending identifier order.
    ///
    /// `start` rows are skipped and at most `count` rows are returned; a
    /// negative `count` disables the limit and returns everything from
    /// `start` on.
    fn get_all(
        &self,
        start: i64,
        count: i64,
    ) -> impl Future<Output = Result<Vec<Person>, RolodexError>> + Send;

    /// Overwrite every field of an existing person.
    ///
    /// Fails with [`RolodexError::NotFound`] when the row is absent. The
    /// existence read and the overwrite are two statements, not one
    /// transaction.
    fn update(&self, person: Person) -> impl Future<Output = Result<Person, RolodexError>> + Send;

    /// Delete a person by identifier. Deleting an absent row is not an
    /// error.
    fn delete(&self, id: PersonId) -> impl Future<Output = Result<(), RolodexError>> + Send;

    /// The highest stored identifier plus one, or `1` for an empty table.
    fn next_id(&self) -> impl Future<Output = Result<PersonId, RolodexError>> + Send;
}
