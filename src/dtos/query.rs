//! Query DTOs - query parameters and small action payloads

use serde::{Deserialize, Serialize};

/// Pagination and (currently unapplied) filter parameters of the list
/// operation. `size == 0` means "no limit"; the statistics scan relies on it.
#[derive(Serialize, Deserialize, Debug)]
pub struct ListQuery {
    #[serde(default)]
    pub query: Option<String>,

    #[serde(default, rename = "queryType")]
    pub query_type: Option<String>,

    #[serde(default)]
    pub position: u32,

    #[serde(default = "default_list_size")]
    pub size: u32,
}

fn default_list_size() -> u32 {
    25
}

/// Payload of the register and deregister actions.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegistrationDTO {
    pub comment: Option<String>,
}
