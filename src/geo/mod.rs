use futures::future::BoxFuture;
use log::{debug, info, warn};
use tokio::time::timeout;

mod ipapi;
pub mod model;
mod nominatim;
mod provider;

pub use model::{Coordinates, LocateError, PositionRequest, ResolvedAddress, FALLBACK_ADDRESS};
pub use provider::{EnvPositionProvider, PositionProvider, POSITION_ENV};

/// One way of producing an address. Strategies are tried in order by
/// [`LocationResolver::resolve`], strictly one at a time.
pub trait LocateStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn attempt(&self) -> BoxFuture<'_, Result<ResolvedAddress, LocateError>>;
}

/// Device position refined through reverse geocoding. Carries the fix's
/// coordinates alongside the composed address.
pub struct DeviceStrategy<P> {
    provider: P,
    geocoder: nominatim::ReverseGeocoder,
    request: PositionRequest,
}

impl<P: PositionProvider> DeviceStrategy<P> {
    pub fn new(provider: P) -> color_eyre::Result<Self> {
        Ok(Self {
            provider,
            geocoder: nominatim::ReverseGeocoder::new()?,
            request: PositionRequest::default(),
        })
    }
}

impl<P: PositionProvider> LocateStrategy for DeviceStrategy<P> {
    fn name(&self) -> &'static str {
        "device position"
    }

    fn attempt(&self) -> BoxFuture<'_, Result<ResolvedAddress, LocateError>> {
        Box::pin(async move {
            debug!(
                "requesting position (high_accuracy={}, timeout={:?}, max_age={:?})",
                self.request.high_accuracy, self.request.timeout, self.request.max_age
            );
            let position = timeout(
                self.request.timeout,
                self.provider.current_position(&self.request),
            )
            .await
            .map_err(|_| LocateError::Timeout)??;
            info!(
                "device position acquired: {:.6}, {:.6}",
                position.lat, position.lng
            );
            let base = self.geocoder.lookup(position).await?;
            Ok(ResolvedAddress {
                base,
                coordinates: Some(position),
            })
        })
    }
}

/// IP geolocation; city-level only, so no coordinates are attached.
pub struct IpStrategy {
    locator: ipapi::IpLocator,
}

impl IpStrategy {
    pub fn new() -> color_eyre::Result<Self> {
        Ok(Self {
            locator: ipapi::IpLocator::new()?,
        })
    }
}

impl LocateStrategy for IpStrategy {
    fn name(&self) -> &'static str {
        "ip geolocation"
    }

    fn attempt(&self) -> BoxFuture<'_, Result<ResolvedAddress, LocateError>> {
        Box::pin(async move {
            let base = self.locator.lookup().await?;
            Ok(ResolvedAddress {
                base,
                coordinates: None,
            })
        })
    }
}

/// Runs the strategies in order and applies the degradation policy.
pub struct LocationResolver {
    strategies: Vec<Box<dyn LocateStrategy>>,
}

impl LocationResolver {
    /// Production chain: device position first, IP geolocation second.
    pub fn new() -> color_eyre::Result<Self> {
        Ok(Self::with_strategies(vec![
            Box::new(DeviceStrategy::new(EnvPositionProvider::from_env())?),
            Box::new(IpStrategy::new()?),
        ]))
    }

    pub fn with_strategies(strategies: Vec<Box<dyn LocateStrategy>>) -> Self {
        Self { strategies }
    }

    /// First strategy to succeed wins.
    ///
    /// When every strategy fails the chain still ends in the fixed
    /// placeholder so the confirmation step stays reachable, with one
    /// exception: a denied permission is reported instead of papered
    /// over, and the user is told to type the CEP.
    pub async fn resolve(&self) -> Result<ResolvedAddress, LocateError> {
        let mut denied = false;
        for strategy in &self.strategies {
            match strategy.attempt().await {
                Ok(address) => {
                    info!("resolved address via {}: {}", strategy.name(), address.base);
                    return Ok(address);
                }
                Err(err) => {
                    warn!("{} failed: {}", strategy.name(), err);
                    denied |= matches!(err, LocateError::PermissionDenied);
                }
            }
        }
        if denied {
            Err(LocateError::PermissionDenied)
        } else {
            info!("falling back to the placeholder address");
            Ok(ResolvedAddress::fallback())
        }
    }
}
