//! CSV bulk import/export handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use rolodex_app::ports::PersonRepository;
use rolodex_domain::error::RolodexError;
use rolodex_domain::id::PersonId;
use rolodex_domain::person::Person;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the import endpoint.
pub enum ImportResponse {
    Imported(usize),
    NoData,
}

impl IntoResponse for ImportResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Imported(count) => format!("Imported {count} entries.").into_response(),
            Self::NoData => (StatusCode::CONFLICT, "No data.").into_response(),
        }
    }
}

/// Possible responses from the export endpoint.
pub enum ExportResponse {
    Csv(String),
}

impl IntoResponse for ExportResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Csv(text) => text.into_response(),
        }
    }
}

fn csv_err(err: impl std::fmt::Display) -> ApiError {
    ApiError::from(RolodexError::Csv(err.to_string()))
}

/// `POST /import` — bulk-load people from a CSV body.
///
/// Records are processed one at a time: the next identifier is allocated
/// per record (never batched up front), a record equal to the canonical
/// header is skipped without counting, and an individual insert failure is
/// logged and swallowed — the reported count covers every non-header
/// record whether or not its insert stuck. A record that cannot be parsed
/// aborts the request with `500`; records already inserted stay inserted.
pub async fn import<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<ImportResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    if body.is_empty() {
        return Ok(ImportResponse::NoData);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(body.as_ref());

    let mut imported = 0;
    for record in reader.records() {
        let record = record.map_err(csv_err)?;

        // Allocated before the header check; a skipped record discards it.
        let id = state.person_service.next_person_id().await?;

        if record.iter().eq(Person::CSV_HEADER) {
            continue;
        }

        let person = person_from_record(id, &record)?;
        if let Err(err) = state.person_service.create_person(person).await {
            tracing::warn!(error = %err, %id, "skipping CSV record that failed to insert");
        }
        imported += 1;
    }

    tracing::debug!(imported, "CSV import finished");
    Ok(ImportResponse::Imported(imported))
}

fn person_from_record(id: PersonId, record: &csv::StringRecord) -> Result<Person, ApiError> {
    let field = |index: usize| -> Result<String, ApiError> {
        record.get(index).map(str::to_owned).ok_or_else(|| {
            csv_err(format!(
                "record has {} fields, expected {}",
                record.len(),
                Person::CSV_HEADER.len()
            ))
        })
    };

    Ok(Person {
        id,
        first_name: field(0)?,
        last_name: field(1)?,
        email: field(2)?,
        phone: field(3)?,
    })
}

/// `GET /export` — dump the address book as CSV.
///
/// The first row is the canonical header; identifiers are not exported.
/// An empty address book is `500`, exactly like the list endpoint.
pub async fn export<R>(State(state): State<AppState<R>>) -> Result<ExportResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    let people = state.person_service.list_people().await?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(Person::CSV_HEADER).map_err(csv_err)?;
    for person in &people {
        writer.write_record(person.csv_record()).map_err(csv_err)?;
    }

    let bytes = writer.into_inner().map_err(csv_err)?;
    let text = String::from_utf8(bytes).map_err(csv_err)?;

    tracing::debug!(people = people.len(), "CSV export finished");
    Ok(ExportResponse::Csv(text))
}
