use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::geo::model::{Coordinates, LocateError};

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Reverse-geocoding client backed by Nominatim (OpenStreetMap).
pub struct ReverseGeocoder {
    client: Client,
}

impl ReverseGeocoder {
    pub fn new() -> color_eyre::Result<Self> {
        Ok(Self {
            client: crate::http::client()?,
        })
    }

    /// Turn a position into a display address, pt-BR labels preferred.
    pub async fn lookup(&self, position: Coordinates) -> Result<String, LocateError> {
        let lat = position.lat.to_string();
        let lon = position.lng.to_string();
        let payload: ReversePayload = self
            .client
            .get(NOMINATIM_URL)
            .query(&[
                ("format", "json"),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("addressdetails", "1"),
                ("accept-language", "pt-BR"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(
            "reverse geocode house number: {}",
            payload.address.house_number.as_deref().unwrap_or("S/N")
        );
        Ok(payload.address.display())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ReversePayload {
    #[serde(default)]
    pub address: AddressParts,
}

/// Address components as Nominatim names them. Which keys are present
/// varies with map coverage, hence the layered accessors.
#[derive(Debug, Default, Deserialize)]
pub struct AddressParts {
    pub road: Option<String>,
    pub pedestrian: Option<String>,
    /// often present for urban fixes; the confirmation step asks the user
    /// for the number instead of trusting this one
    pub house_number: Option<String>,
    pub neighbourhood: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
}

impl AddressParts {
    fn street(&self) -> &str {
        first_of(&[&self.road, &self.pedestrian]).unwrap_or("Rua não identificada")
    }

    fn neighborhood(&self) -> &str {
        first_of(&[&self.neighbourhood, &self.suburb]).unwrap_or("Centro")
    }

    fn city(&self) -> &str {
        first_of(&[&self.city, &self.town, &self.village]).unwrap_or("São Paulo")
    }

    fn state(&self) -> &str {
        self.state.as_deref().filter(|s| !s.is_empty()).unwrap_or("SP")
    }

    /// `{street} - {neighborhood}, {city} - {state}`
    pub fn display(&self) -> String {
        format!(
            "{} - {}, {} - {}",
            self.street(),
            self.neighborhood(),
            self.city(),
            self.state()
        )
    }
}

fn first_of<'a>(fields: &[&'a Option<String>]) -> Option<&'a str> {
    fields
        .iter()
        .find_map(|field| field.as_deref().filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parts(json: &str) -> AddressParts {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn composes_from_a_complete_payload() {
        let parts = parts(
            r#"{
                "road": "Av. Paulista",
                "house_number": "1000",
                "suburb": "Bela Vista",
                "city": "São Paulo",
                "state": "SP"
            }"#,
        );
        assert_eq!(parts.display(), "Av. Paulista - Bela Vista, São Paulo - SP");
    }

    #[test]
    fn house_number_never_enters_the_display() {
        let parts = parts(r#"{"road": "Rua A", "house_number": "55", "city": "Santos", "state": "SP"}"#);
        assert!(!parts.display().contains("55"));
    }

    #[test]
    fn street_falls_back_to_pedestrian_then_literal() {
        let pedestrian = parts(r#"{"pedestrian": "Calçadão Central", "city": "Santos"}"#);
        assert!(pedestrian.display().starts_with("Calçadão Central - "));

        let nothing = parts("{}");
        assert_eq!(
            nothing.display(),
            "Rua não identificada - Centro, São Paulo - SP"
        );
    }

    #[test]
    fn city_prefers_city_then_town_then_village() {
        let town = parts(r#"{"road": "Rua B", "town": "Holambra", "state": "SP"}"#);
        assert_eq!(town.display(), "Rua B - Centro, Holambra - SP");

        let village = parts(r#"{"road": "Rua B", "village": "Vila Rica", "state": "MG"}"#);
        assert_eq!(village.display(), "Rua B - Centro, Vila Rica - MG");
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let parts = parts(r#"{"road": "", "suburb": "", "city": "", "state": ""}"#);
        assert_eq!(
            parts.display(),
            "Rua não identificada - Centro, São Paulo - SP"
        );
    }

    #[test]
    fn payload_with_unknown_keys_still_deserializes() {
        let payload: ReversePayload = serde_json::from_str(
            r#"{"place_id": 1, "licence": "x", "address": {"road": "Rua C"}, "boundingbox": []}"#,
        )
        .unwrap();
        assert_eq!(payload.address.road.as_deref(), Some("Rua C"));
    }
}
