use reqwest::Client;
use serde::Deserialize;

use crate::geo::model::LocateError;

const IPAPI_URL: &str = "https://ipapi.co/json/";

/// Coarse IP geolocation, the privacy/availability fallback.
pub struct IpLocator {
    client: Client,
}

impl IpLocator {
    pub fn new() -> color_eyre::Result<Self> {
        Ok(Self {
            client: crate::http::client()?,
        })
    }

    pub async fn lookup(&self) -> Result<String, LocateError> {
        let payload: IpPayload = self
            .client
            .get(IPAPI_URL)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        payload.display().ok_or(LocateError::NotFound)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct IpPayload {
    pub city: Option<String>,
    pub region: Option<String>,
}

impl IpPayload {
    /// `{city}, {region} - Brasil`; both parts are required.
    pub fn display(&self) -> Option<String> {
        let city = self.city.as_deref().filter(|s| !s.is_empty())?;
        let region = self.region.as_deref().filter(|s| !s.is_empty())?;
        Some(format!("{city}, {region} - Brasil"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_city_and_region() {
        let payload = IpPayload {
            city: Some("Curitiba".into()),
            region: Some("PR".into()),
        };
        assert_eq!(payload.display().as_deref(), Some("Curitiba, PR - Brasil"));
    }

    #[test]
    fn missing_or_empty_parts_yield_nothing() {
        let missing_region = IpPayload {
            city: Some("Curitiba".into()),
            region: None,
        };
        assert_eq!(missing_region.display(), None);

        let empty_city = IpPayload {
            city: Some(String::new()),
            region: Some("PR".into()),
        };
        assert_eq!(empty_city.display(), None);
    }
}
