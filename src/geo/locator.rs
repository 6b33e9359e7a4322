//! Location sources and the fallback-to-Rotterdam resolver

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::Settings;
use crate::geo::GeoHint;
use crate::TripFinderError;

const DEFAULT_IP_ENDPOINT: &str = "http://ip-api.com/json/?fields=status,message,lat,lon";

#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Look up the current position once.
    async fn locate(&self) -> Result<GeoHint>;
}

/// Build a locator from runtime settings.
pub fn build_locator(settings: &Settings) -> Result<Box<dyn GeoLocator>> {
    match settings.geo.provider.to_lowercase().as_str() {
        "ip" => Ok(Box::new(IpLocator::from_settings(settings)?)),
        "fixed" => match (settings.geo.latitude, settings.geo.longitude) {
            (Some(latitude), Some(longitude)) => {
                Ok(Box::new(FixedLocator::new(GeoHint::new(latitude, longitude))))
            }
            _ => Err(TripFinderError::Config(
                "geo.provider 'fixed' requires geo.latitude and geo.longitude".to_string(),
            )
            .into()),
        },
        "none" => Ok(Box::new(DisabledLocator)),
        other => Err(TripFinderError::Config(format!(
            "Unsupported geo.provider '{}'. Supported providers: ip, fixed, none",
            other
        ))
        .into()),
    }
}

/// Resolve the hint for one request, substituting Rotterdam on any failure.
pub async fn resolve_geo_hint(locator: &dyn GeoLocator) -> GeoHint {
    match locator.locate().await {
        Ok(hint) if hint.is_valid() => {
            tracing::debug!("Resolved location: {}", hint);
            hint
        }
        Ok(hint) => {
            tracing::warn!(
                "Location lookup returned invalid coordinates ({}), defaulting to Rotterdam",
                hint
            );
            GeoHint::ROTTERDAM
        }
        Err(e) => {
            tracing::warn!(
                "Could not get user location, defaulting to Rotterdam coordinates: {:#}",
                e
            );
            GeoHint::ROTTERDAM
        }
    }
}

/// Coordinates supplied up front (config or command line).
pub struct FixedLocator {
    hint: GeoHint,
}

impl FixedLocator {
    pub fn new(hint: GeoHint) -> Self {
        Self { hint }
    }
}

#[async_trait]
impl GeoLocator for FixedLocator {
    async fn locate(&self) -> Result<GeoHint> {
        Ok(self.hint)
    }
}

/// Never resolves; every request uses the default.
pub struct DisabledLocator;

#[async_trait]
impl GeoLocator for DisabledLocator {
    async fn locate(&self) -> Result<GeoHint> {
        Err(TripFinderError::Geolocation("location lookup is disabled".to_string()).into())
    }
}

/// Approximate position from the public IP address.
pub struct IpLocator {
    http: Client,
    endpoint: String,
}

impl IpLocator {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let endpoint = if settings.geo.endpoint.trim().is_empty() {
            DEFAULT_IP_ENDPOINT.to_string()
        } else {
            settings.geo.endpoint.trim().to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(Duration::from_secs(settings.geo.timeout_secs))
                .build()
                .context("Failed to build geolocation HTTP client")?,
            endpoint,
        })
    }
}

#[async_trait]
impl GeoLocator for IpLocator {
    async fn locate(&self) -> Result<GeoHint> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .context("Geolocation request failed")?
            .error_for_status()
            .context("Geolocation service returned an error status")?;

        let payload: IpLookupResponse = response
            .json()
            .await
            .context("Failed to parse geolocation response")?;

        payload.into_hint()
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl IpLookupResponse {
    fn into_hint(self) -> Result<GeoHint> {
        if let Some(status) = self.status.as_deref() {
            if status != "success" {
                return Err(TripFinderError::Geolocation(format!(
                    "lookup status '{}': {}",
                    status,
                    self.message.as_deref().unwrap_or("no message")
                ))
                .into());
            }
        }

        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Ok(GeoHint::new(lat, lon)),
            _ => Err(TripFinderError::Geolocation(
                "lookup response is missing coordinates".to_string(),
            )
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{closed_endpoint, serve_once};

    fn ip_locator_for(endpoint: String) -> IpLocator {
        let mut settings = Settings::default();
        settings.geo.endpoint = endpoint;
        settings.geo.timeout_secs = 5;
        IpLocator::from_settings(&settings).unwrap()
    }

    struct FailingLocator;

    #[async_trait]
    impl GeoLocator for FailingLocator {
        async fn locate(&self) -> Result<GeoHint> {
            anyhow::bail!("User denied Geolocation")
        }
    }

    #[test]
    fn rejected_lookup_falls_back_to_rotterdam() {
        let hint = tokio_test::block_on(resolve_geo_hint(&FailingLocator));
        assert_eq!(hint, GeoHint::new(51.9225, 4.47917));
    }

    #[test]
    fn disabled_locator_falls_back_to_rotterdam() {
        let hint = tokio_test::block_on(resolve_geo_hint(&DisabledLocator));
        assert_eq!(hint, GeoHint::ROTTERDAM);
    }

    #[test]
    fn invalid_coordinates_fall_back_to_rotterdam() {
        let locator = FixedLocator::new(GeoHint::new(123.0, 0.0));
        let hint = tokio_test::block_on(resolve_geo_hint(&locator));
        assert_eq!(hint, GeoHint::ROTTERDAM);
    }

    #[test]
    fn fixed_locator_is_used_as_is() {
        let locator = FixedLocator::new(GeoHint::new(41.98, 2.82));
        let hint = tokio_test::block_on(resolve_geo_hint(&locator));
        assert_eq!(hint, GeoHint::new(41.98, 2.82));
    }

    #[test]
    fn ip_lookup_success_yields_coordinates() {
        let payload: IpLookupResponse =
            serde_json::from_str(r#"{"status":"success","lat":52.37,"lon":4.89}"#).unwrap();
        assert_eq!(payload.into_hint().unwrap(), GeoHint::new(52.37, 4.89));
    }

    #[test]
    fn ip_lookup_failure_is_an_error() {
        let payload: IpLookupResponse =
            serde_json::from_str(r#"{"status":"fail","message":"reserved range"}"#).unwrap();
        let err = payload.into_hint().unwrap_err().to_string();
        assert!(err.contains("reserved range"));
    }

    #[tokio::test]
    async fn ip_locator_reads_coordinates_from_service() {
        let (url, server) =
            serve_once("200 OK", r#"{"status":"success","lat":52.37,"lon":4.89}"#).await;

        let locator = ip_locator_for(format!("{}/json/", url));
        assert_eq!(locator.locate().await.unwrap(), GeoHint::new(52.37, 4.89));

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /json/ HTTP/1.1"));
    }

    #[tokio::test]
    async fn unreachable_ip_service_resolves_to_rotterdam() {
        let locator = ip_locator_for(closed_endpoint().await);

        assert!(locator.locate().await.is_err());
        assert_eq!(resolve_geo_hint(&locator).await, GeoHint::ROTTERDAM);
    }

    #[tokio::test]
    async fn ip_service_error_status_resolves_to_rotterdam() {
        let (url, server) = serve_once("429 Too Many Requests", "{}").await;

        let locator = ip_locator_for(url);
        assert_eq!(resolve_geo_hint(&locator).await, GeoHint::ROTTERDAM);
        server.await.unwrap();
    }

    #[test]
    fn fixed_provider_requires_coordinates() {
        let mut settings = Settings::default();
        settings.geo.provider = "fixed".to_string();

        let err = match build_locator(&settings) {
            Ok(_) => panic!("expected locator creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("requires geo.latitude"));
    }

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.geo.provider = "gps".to_string();

        let err = match build_locator(&settings) {
            Ok(_) => panic!("expected locator creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Unsupported geo.provider"));
    }
}
