//! Reverse geocoding: coordinates to country / department / city / postcode.
//!
//! [`ReverseGeocoder`] is the seam the sync workflow depends on.
//! [`NominatimGeocoder`] calls the OpenStreetMap Nominatim `reverse` endpoint
//! (JSON v2). Each lookup is a single attempt with a client-side timeout.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use skillconnect_db::models::direccion::{Direccion, UpdateDireccion};

/// HTTP request timeout for a single lookup.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Lookup service settings.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub base_url: String,
    /// Nominatim rejects requests without an identifying User-Agent.
    pub user_agent: String,
}

impl GeocoderConfig {
    /// | Env Var               | Default                              |
    /// |-----------------------|--------------------------------------|
    /// | `GEOCODER_BASE_URL`   | `https://nominatim.openstreetmap.org`|
    /// | `GEOCODER_USER_AGENT` | `skillconnect-api/<version>`         |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("GEOCODER_BASE_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".into())
                .trim_end_matches('/')
                .to_string(),
            user_agent: std::env::var("GEOCODER_USER_AGENT")
                .unwrap_or_else(|_| concat!("skillconnect-api/", env!("CARGO_PKG_VERSION")).into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// Network, DNS, timeout or body decoding failure.
    #[error("Geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Geocoding service returned HTTP {0}")]
    HttpStatus(u16),

    /// The HTTP client could not be built from the configuration.
    #[error("Invalid geocoder client configuration: {0}")]
    Client(reqwest::Error),
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Address fields resolved for a coordinate pair. Blank values are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseGeocode {
    pub pais: Option<String>,
    pub departamento: Option<String>,
    pub ciudad: Option<String>,
    pub codigo_postal: Option<String>,
}

impl ReverseGeocode {
    pub fn is_empty(&self) -> bool {
        self.pais.is_none()
            && self.departamento.is_none()
            && self.ciudad.is_none()
            && self.codigo_postal.is_none()
    }

    /// Patch that fills the blank fields of `current` with resolved values.
    ///
    /// Anything the user already entered is left out of the patch.
    pub fn fill_gaps(self, current: &Direccion) -> UpdateDireccion {
        fn gap(existing: &Option<String>, found: Option<String>) -> Option<String> {
            match existing.as_deref().map(str::trim) {
                Some(v) if !v.is_empty() => None,
                _ => found,
            }
        }
        UpdateDireccion {
            ciudad: gap(&current.ciudad_direccion, self.ciudad),
            departamento: gap(&current.departamento_direccion, self.departamento),
            pais: gap(&current.pais_direccion, self.pais),
            codigo_postal: gap(&current.codigo_postal_direccion, self.codigo_postal),
            id_persona: None,
        }
    }
}

#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, latitud: f64, longitud: f64) -> Result<ReverseGeocode, GeocodeError>;
}

// ---------------------------------------------------------------------------
// Nominatim
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct NominatimResponse {
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    country: Option<String>,
    state: Option<String>,
    region: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    postcode: Option<String>,
}

impl From<NominatimAddress> for ReverseGeocode {
    fn from(a: NominatimAddress) -> Self {
        fn pick(candidates: [Option<String>; 3]) -> Option<String> {
            candidates
                .into_iter()
                .flatten()
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
        }

        Self {
            pais: pick([a.country, None, None]),
            departamento: pick([a.state, a.region, None]),
            ciudad: pick([a.city, a.town, a.village]),
            codigo_postal: pick([a.postcode, None, None]),
        }
    }
}

pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(GeocodeError::Client)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn reverse(&self, latitud: f64, longitud: f64) -> Result<ReverseGeocode, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", latitud.to_string()),
                ("lon", longitud.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::HttpStatus(response.status().as_u16()));
        }

        let body: NominatimResponse = response.json().await?;
        Ok(body.address.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ReverseGeocode {
        let body: NominatimResponse = serde_json::from_str(json).unwrap();
        body.address.into()
    }

    #[test]
    fn maps_city_response() {
        let geo = parse(
            r#"{"address":{"city":"Rosario","state":"Santa Fe","country":"Argentina","postcode":"S2000"}}"#,
        );
        assert_eq!(geo.pais.as_deref(), Some("Argentina"));
        assert_eq!(geo.departamento.as_deref(), Some("Santa Fe"));
        assert_eq!(geo.ciudad.as_deref(), Some("Rosario"));
        assert_eq!(geo.codigo_postal.as_deref(), Some("S2000"));
    }

    #[test]
    fn falls_back_to_town_and_region() {
        let geo = parse(r#"{"address":{"town":"Tafí del Valle","region":"Tucumán","country":"Argentina"}}"#);
        assert_eq!(geo.ciudad.as_deref(), Some("Tafí del Valle"));
        assert_eq!(geo.departamento.as_deref(), Some("Tucumán"));
        assert_eq!(geo.codigo_postal, None);
    }

    #[test]
    fn blank_values_are_skipped() {
        let geo = parse(r#"{"address":{"city":" ","village":"San Marcos","country":""}}"#);
        assert_eq!(geo.ciudad.as_deref(), Some("San Marcos"));
        assert_eq!(geo.pais, None);
    }

    #[test]
    fn error_body_yields_empty_result() {
        let geo = parse(r#"{"error":"Unable to geocode"}"#);
        assert!(geo.is_empty());
    }

    fn direccion(codigo_postal: Option<&str>) -> Direccion {
        Direccion {
            id_direccion: 1,
            ciudad_direccion: None,
            departamento_direccion: Some(" ".into()),
            pais_direccion: None,
            codigo_postal_direccion: codigo_postal.map(str::to_string),
            id_perfil_persona: Some(1),
        }
    }

    #[test]
    fn fill_gaps_keeps_user_entered_fields() {
        let geo = parse(
            r#"{"address":{"city":"Rosario","state":"Santa Fe","country":"Argentina","postcode":"S2000"}}"#,
        );
        let patch = geo.fill_gaps(&direccion(Some("S2001")));
        assert_eq!(patch.ciudad.as_deref(), Some("Rosario"));
        assert_eq!(patch.departamento.as_deref(), Some("Santa Fe"));
        assert_eq!(patch.pais.as_deref(), Some("Argentina"));
        assert_eq!(patch.codigo_postal, None);
    }

    #[test]
    fn invalid_user_agent_is_a_config_error() {
        let config = GeocoderConfig {
            base_url: "https://nominatim.openstreetmap.org/".into(),
            user_agent: "skillconnect\nbad".into(),
        };
        assert!(matches!(
            NominatimGeocoder::new(&config),
            Err(GeocodeError::Client(_))
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = GeocoderConfig {
            base_url: "https://nominatim.openstreetmap.org/".into(),
            user_agent: "skillconnect-tests".into(),
        };
        let geocoder = NominatimGeocoder::new(&config).unwrap();
        assert_eq!(geocoder.base_url, "https://nominatim.openstreetmap.org");
    }

    #[test]
    fn fill_gaps_of_empty_result_is_empty() {
        let patch = ReverseGeocode::default().fill_gaps(&direccion(None));
        assert!(patch.is_empty());
    }
}
