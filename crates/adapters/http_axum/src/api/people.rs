//! Plain-text/JSON REST handlers for the person entity.

use std::str::FromStr;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use rolodex_app::ports::PersonRepository;
use rolodex_domain::error::RolodexError;
use rolodex_domain::id::PersonId;
use rolodex_domain::person::Person;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Person>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the read endpoint.
pub enum ReadResponse {
    Ok(Json<Person>),
}

impl IntoResponse for ReadResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoints.
pub enum CreateResponse {
    Created(PersonId),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(id) => format!("Created person with ID {id}.").into_response(),
        }
    }
}

/// Possible responses from the update endpoints (PUT and PATCH).
pub enum UpdateResponse {
    Updated(PersonId),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Updated(id) => format!("Updated person with ID {id}.").into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted(PersonId),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(id) => format!("Deleted person with ID {id}.").into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<PersonId, ApiError> {
    PersonId::from_str(raw).map_err(|err| ApiError::from(RolodexError::InvalidId(err)))
}

/// `GET /people`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    let people = state.person_service.list_people().await?;
    Ok(ListResponse::Ok(Json(people)))
}

/// `GET /person/{id}`
pub async fn read<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<ReadResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let person = state.person_service.get_person(id).await?;
    Ok(ReadResponse::Ok(Json(person)))
}

/// `POST /person` — the service allocates the identifier (`max + 1`).
///
/// The identifier is allocated before the body is decoded, so a malformed
/// body still costs an allocation query.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    let id = state.person_service.next_person_id().await?;
    create_inner(&state, id, &body).await
}

/// `POST /person/{id}` — the caller supplies the identifier.
pub async fn create_with_id<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    create_inner(&state, id, &body).await
}

async fn create_inner<R>(
    state: &AppState<R>,
    id: PersonId,
    body: &[u8],
) -> Result<CreateResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    let mut person: Person = serde_json::from_slice(body).map_err(RolodexError::from)?;
    person.id = id;

    let created = state.person_service.create_person(person).await?;
    tracing::debug!(id = %created.id, "created person");
    Ok(CreateResponse::Created(created.id))
}

/// `PUT /person/{id}` — whole-resource replacement.
///
/// Fields omitted from the body are written back as empty strings.
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let mut person: Person = serde_json::from_slice(&body).map_err(RolodexError::from)?;
    person.id = id;

    let updated = state.person_service.update_person(person).await?;
    tracing::debug!(id = %updated.id, "replaced person");
    Ok(UpdateResponse::Updated(updated.id))
}

/// `PATCH /person/{id}` — merge non-empty fields into the stored person.
///
/// The stored row is read into a snapshot (a failed read leaves an empty
/// snapshot), the body is decoded into a scratch person and merged
/// field-by-field, and only then is the decode result checked. An empty
/// incoming field keeps the stored value, so a PATCH can never clear a
/// field. The snapshot read and the final write are separate statements; a
/// row deleted in between surfaces as `404` from the write.
pub async fn update_partial<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;

    let mut snapshot = match state.person_service.get_person(id).await {
        Ok(person) => person,
        Err(_) => Person::with_id(id),
    };

    let (scratch, decode_err) = match serde_json::from_slice::<Person>(&body) {
        Ok(person) => (person, None),
        Err(err) => (Person::default(), Some(err)),
    };
    snapshot.merge_non_empty(scratch);
    if let Some(err) = decode_err {
        return Err(RolodexError::from(err).into());
    }

    let updated = state.person_service.update_person(snapshot).await?;
    tracing::debug!(id = %updated.id, "patched person");
    Ok(UpdateResponse::Updated(updated.id))
}

/// `DELETE /person/{id}`
///
/// Deleting an absent identifier still succeeds; the confirmation echoes
/// the identifier either way.
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.person_service.delete_person(id).await?;
    tracing::debug!(%id, "deleted person");
    Ok(DeleteResponse::Deleted(id))
}
