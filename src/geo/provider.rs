use futures::future::BoxFuture;

use crate::geo::model::{Coordinates, LocateError, PositionRequest};

/// The platform position capability.
///
/// Implementations resolve to a coordinate pair or to the provider error
/// the rest of the chain dispatches on.
pub trait PositionProvider: Send + Sync {
    fn current_position(
        &self,
        request: &PositionRequest,
    ) -> BoxFuture<'_, Result<Coordinates, LocateError>>;
}

pub const POSITION_ENV: &str = "GASOLA_POSITION";

/// Position source configured through `GASOLA_POSITION`: a `lat,lng` pair
/// resolves to that position, the literals `denied` and `unavailable`
/// reproduce the matching provider errors, and an unset variable means
/// the capability is absent.
pub struct EnvPositionProvider {
    setting: Option<String>,
}

impl EnvPositionProvider {
    pub fn from_env() -> Self {
        Self {
            setting: std::env::var(POSITION_ENV).ok(),
        }
    }

    #[cfg(test)]
    fn with_setting(setting: Option<&str>) -> Self {
        Self {
            setting: setting.map(str::to_string),
        }
    }

    fn resolve(&self) -> Result<Coordinates, LocateError> {
        let setting = match &self.setting {
            Some(setting) => setting.trim(),
            None => return Err(LocateError::CapabilityUnavailable),
        };
        match setting {
            "" => Err(LocateError::CapabilityUnavailable),
            "denied" => Err(LocateError::PermissionDenied),
            "unavailable" => Err(LocateError::PositionUnavailable),
            pair => parse_pair(pair).ok_or(LocateError::PositionUnavailable),
        }
    }
}

impl PositionProvider for EnvPositionProvider {
    fn current_position(
        &self,
        _request: &PositionRequest,
    ) -> BoxFuture<'_, Result<Coordinates, LocateError>> {
        Box::pin(async move { self.resolve() })
    }
}

fn parse_pair(pair: &str) -> Option<Coordinates> {
    let (lat, lng) = pair.split_once(',')?;
    Some(Coordinates {
        lat: lat.trim().parse().ok()?,
        lng: lng.trim().parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_setting_means_capability_unavailable() {
        let provider = EnvPositionProvider::with_setting(None);
        let err = provider
            .current_position(&PositionRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LocateError::CapabilityUnavailable));
    }

    #[tokio::test]
    async fn denial_literal_is_reported_as_denied() {
        let provider = EnvPositionProvider::with_setting(Some("denied"));
        let err = provider
            .current_position(&PositionRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LocateError::PermissionDenied));
    }

    #[tokio::test]
    async fn coordinate_pair_is_parsed() {
        let provider = EnvPositionProvider::with_setting(Some("-23.55, -46.63"));
        let position = provider
            .current_position(&PositionRequest::default())
            .await
            .unwrap();
        assert_eq!(
            position,
            Coordinates {
                lat: -23.55,
                lng: -46.63
            }
        );
    }

    #[tokio::test]
    async fn garbage_setting_is_position_unavailable() {
        let provider = EnvPositionProvider::with_setting(Some("not coordinates"));
        let err = provider
            .current_position(&PositionRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LocateError::PositionUnavailable));
    }
}
