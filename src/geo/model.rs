use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geographic position as reported by a position provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Address produced by exactly one resolution strategy. Held only until
/// the user confirms or abandons it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAddress {
    pub base: String,
    pub coordinates: Option<Coordinates>,
}

/// Used when every real data source failed, so the confirmation screen
/// stays reachable and the user can correct the address by hand.
pub const FALLBACK_ADDRESS: &str = "Rua das Flores - Centro, São Paulo - SP";

impl ResolvedAddress {
    pub fn fallback() -> Self {
        Self {
            base: FALLBACK_ADDRESS.to_string(),
            coordinates: None,
        }
    }
}

/// Options for a position request. Accuracy is traded for responsiveness;
/// the user refines the result manually afterwards.
#[derive(Debug, Clone)]
pub struct PositionRequest {
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// a cached fix up to this old is acceptable
    pub max_age: Duration,
}

impl Default for PositionRequest {
    fn default() -> Self {
        Self {
            high_accuracy: false,
            timeout: Duration::from_secs(15),
            max_age: Duration::from_secs(300),
        }
    }
}

/// Why a resolution strategy could not produce an address.
///
/// Display texts are user-facing; the chain driver only dispatches on the
/// variant.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("geolocalização não suportada neste dispositivo")]
    CapabilityUnavailable,
    #[error("permissão de localização negada")]
    PermissionDenied,
    #[error("localização indisponível")]
    PositionUnavailable,
    #[error("tempo limite excedido ao obter a localização")]
    Timeout,
    #[error("falha de rede na consulta: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("a resposta não contém um endereço utilizável")]
    NotFound,
}
