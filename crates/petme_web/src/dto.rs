//! External-facing data shapes exchanged as JSON.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalDto {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// `{"id", "name", "animal"?: {"id", "name"}}`; `animal` is omitted when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedDto {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal: Option<AnimalDto>,
}
