//! JSON request handlers for outer transports (HTTP server, CLI).
//!
//! # Responsibility
//! - Parse JSON request bodies into DTOs and call the web services.
//! - Wrap every outcome in one `ApiResponse` envelope with an HTTP-style
//!   status code.
//!
//! # Invariants
//! - Handlers never panic; every failure becomes an error envelope.
//! - Status mapping: `NotFound` 404, `InvalidInput` and malformed bodies 400,
//!   `CollaboratorFailure` 500.

use crate::dto::{AnimalDto, BreedDto};
use crate::service::animal_web_service::AnimalWebService;
use crate::service::breed_web_service::BreedWebService;
use crate::translator::{AnimalWebTranslator, BreedWebTranslator};
use log::warn;
use petme_core::{
    Animal, AnimalDomainService, Breed, BreedDomainService, ServiceError, ServiceResult,
    Translator,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Error payload of a failed `ApiResponse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// `not_found | invalid_input | collaborator_failure | serialization`.
    pub kind: String,
    pub message: String,
}

/// Response envelope returned by every handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    pub status: u16,
    pub data: Option<Value>,
    pub error: Option<ApiErrorBody>,
}

impl ApiResponse {
    fn success<T: Serialize>(status: u16, data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self {
                ok: true,
                status,
                data: Some(value),
                error: None,
            },
            Err(err) => Self::failure(STATUS_INTERNAL_ERROR, "serialization", err.to_string()),
        }
    }

    fn no_content() -> Self {
        Self {
            ok: true,
            status: STATUS_NO_CONTENT,
            data: None,
            error: None,
        }
    }

    fn failure(status: u16, kind: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            status,
            data: None,
            error: Some(ApiErrorBody {
                kind: kind.to_string(),
                message: message.into(),
            }),
        }
    }

    fn from_service_error(operation: &str, err: &ServiceError) -> Self {
        let status = match err {
            ServiceError::NotFound { .. } => STATUS_NOT_FOUND,
            ServiceError::InvalidInput(_) => STATUS_BAD_REQUEST,
            ServiceError::CollaboratorFailure(_) => STATUS_INTERNAL_ERROR,
        };
        warn!(
            "event={operation} module=api status=error http_status={status} error_kind={}",
            err.kind()
        );
        Self::failure(status, err.kind(), err.to_string())
    }

    /// Serializes the envelope; falls back to a fixed error document.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"ok":false,"status":500,"data":null,"error":{"kind":"serialization","message":"response serialization failed"}}"#
                .to_string()
        })
    }
}

fn respond<T: Serialize>(operation: &str, status: u16, result: ServiceResult<T>) -> ApiResponse {
    match result {
        Ok(data) => ApiResponse::success(status, &data),
        Err(err) => ApiResponse::from_service_error(operation, &err),
    }
}

fn respond_empty(operation: &str, result: ServiceResult<()>) -> ApiResponse {
    match result {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => ApiResponse::from_service_error(operation, &err),
    }
}

fn parse_body<T: DeserializeOwned>(operation: &str, body: &str) -> Result<T, ApiResponse> {
    serde_json::from_str(body).map_err(|err| {
        warn!("event={operation} module=api status=error http_status=400 error_kind=invalid_body");
        ApiResponse::failure(
            STATUS_BAD_REQUEST,
            "invalid_input",
            format!("malformed request body: {err}"),
        )
    })
}

/// JSON handlers for animals.
pub struct AnimalApi<D, T = AnimalWebTranslator> {
    web: AnimalWebService<D, T>,
}

impl<D, T> AnimalApi<D, T>
where
    D: AnimalDomainService,
    T: Translator<Animal, AnimalDto>,
{
    pub fn new(web: AnimalWebService<D, T>) -> Self {
        Self { web }
    }

    pub fn list(&self) -> ApiResponse {
        respond("animal_list", STATUS_OK, self.web.get_all())
    }

    pub fn get(&self, id: &str) -> ApiResponse {
        respond("animal_get", STATUS_OK, self.web.get_one(id))
    }

    pub fn create(&self, body: &str) -> ApiResponse {
        match parse_body::<AnimalDto>("animal_create", body) {
            Ok(dto) => respond("animal_create", STATUS_CREATED, self.web.create(&dto)),
            Err(response) => response,
        }
    }

    pub fn update(&self, body: &str) -> ApiResponse {
        match parse_body::<AnimalDto>("animal_update", body) {
            Ok(dto) => respond("animal_update", STATUS_OK, self.web.update(&dto)),
            Err(response) => response,
        }
    }

    pub fn delete(&self, body: &str) -> ApiResponse {
        match parse_body::<AnimalDto>("animal_delete", body) {
            Ok(dto) => respond_empty("animal_delete", self.web.delete(&dto)),
            Err(response) => response,
        }
    }
}

/// JSON handlers for breeds.
pub struct BreedApi<D, BT = BreedWebTranslator, AT = AnimalWebTranslator> {
    web: BreedWebService<D, BT, AT>,
}

impl<D, BT, AT> BreedApi<D, BT, AT>
where
    D: BreedDomainService,
    BT: Translator<Breed, BreedDto>,
    AT: Translator<Animal, AnimalDto>,
{
    pub fn new(web: BreedWebService<D, BT, AT>) -> Self {
        Self { web }
    }

    pub fn list(&self) -> ApiResponse {
        respond("breed_list", STATUS_OK, self.web.get_all())
    }

    pub fn get(&self, id: &str) -> ApiResponse {
        respond("breed_get", STATUS_OK, self.web.get_one(id))
    }

    pub fn create(&self, body: &str) -> ApiResponse {
        match parse_body::<BreedDto>("breed_create", body) {
            Ok(dto) => respond("breed_create", STATUS_CREATED, self.web.create(&dto)),
            Err(response) => response,
        }
    }

    pub fn update(&self, body: &str) -> ApiResponse {
        match parse_body::<BreedDto>("breed_update", body) {
            Ok(dto) => respond("breed_update", STATUS_OK, self.web.update(&dto)),
            Err(response) => response,
        }
    }

    pub fn delete(&self, body: &str) -> ApiResponse {
        match parse_body::<BreedDto>("breed_delete", body) {
            Ok(dto) => respond_empty("breed_delete", self.web.delete(&dto)),
            Err(response) => response,
        }
    }

    /// Body is an animal DTO; matches on its `id`.
    pub fn by_animal(&self, body: &str) -> ApiResponse {
        match parse_body::<AnimalDto>("breed_by_animal", body) {
            Ok(dto) => respond("breed_by_animal", STATUS_OK, self.web.get_by_animal(&dto)),
            Err(response) => response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petme_core::db::open_db_in_memory;
    use petme_core::{AnimalService, BreedService, SqliteAnimalRepository, SqliteBreedRepository};
    use serde_json::json;

    #[test]
    fn animal_lifecycle_over_json() {
        let conn = open_db_in_memory().unwrap();
        let api = AnimalApi::new(AnimalWebService::with_default_translator(
            AnimalService::with_default_translator(SqliteAnimalRepository::try_new(&conn).unwrap()),
        ));

        let created = api.create(r#"{"id": "an123", "name": "Dog"}"#);
        assert_eq!(created.status, STATUS_CREATED);
        assert_eq!(created.data, Some(json!({"id": "an123", "name": "Dog"})));

        let updated = api.update(r#"{"id": "an123", "name": "Hound"}"#);
        assert!(updated.ok);
        assert_eq!(
            api.list().data,
            Some(json!([{"id": "an123", "name": "Hound"}]))
        );

        let deleted = api.delete(r#"{"id": "an123"}"#);
        assert_eq!(deleted.status, STATUS_NO_CONTENT);

        let missing = api.get("an123");
        assert!(!missing.ok);
        assert_eq!(missing.status, STATUS_NOT_FOUND);
        assert_eq!(missing.error.unwrap().kind, "not_found");
    }

    #[test]
    fn animal_update_of_unknown_id_creates_it() {
        let conn = open_db_in_memory().unwrap();
        let api = AnimalApi::new(AnimalWebService::with_default_translator(
            AnimalService::with_default_translator(SqliteAnimalRepository::try_new(&conn).unwrap()),
        ));

        let response = api.update(r#"{"id": "an777", "name": "Ferret"}"#);

        assert_eq!(response.status, STATUS_OK);
        assert_eq!(api.get("an777").data, Some(json!({"id": "an777", "name": "Ferret"})));
    }

    #[test]
    fn breed_by_animal_and_error_mapping() {
        let conn = open_db_in_memory().unwrap();
        let api = BreedApi::new(BreedWebService::with_default_translators(
            BreedService::with_default_translators(SqliteBreedRepository::try_new(&conn).unwrap()),
        ));

        let created = api.create(
            r#"{"id": "br123", "name": "Golden Retriever", "animal": {"id": "an123", "name": "Dog"}}"#,
        );
        assert!(created.ok, "{:?}", created.error);

        let by_animal = api.by_animal(r#"{"id": "an123", "name": "Dog"}"#);
        assert_eq!(
            by_animal.data,
            Some(json!([{
                "id": "br123",
                "name": "Golden Retriever",
                "animal": {"id": "an123", "name": "Dog"}
            }]))
        );

        let not_found = api.update(r#"{"id": "br999", "name": "Unknown"}"#);
        assert_eq!(not_found.status, STATUS_NOT_FOUND);

        let missing_id = api.by_animal(r#"{"name": "Dog"}"#);
        assert_eq!(missing_id.status, STATUS_BAD_REQUEST);
        assert_eq!(missing_id.error.unwrap().kind, "invalid_input");

        let malformed = api.create("{not json");
        assert_eq!(malformed.status, STATUS_BAD_REQUEST);
    }

    #[test]
    fn envelope_serializes_to_stable_json() {
        let response = ApiResponse::failure(STATUS_NOT_FOUND, "not_found", "breed not found: x");

        let parsed: Value = serde_json::from_str(&response.to_json()).unwrap();

        assert_eq!(
            parsed,
            json!({
                "ok": false,
                "status": 404,
                "data": null,
                "error": {"kind": "not_found", "message": "breed not found: x"}
            })
        );
    }
}
