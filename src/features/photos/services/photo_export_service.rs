use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use reqwest::Url;

use crate::core::config::PhotoExportConfig;
use crate::core::error::{AppError, Result};
use crate::features::photos::dtos::{PhotoExportPayload, PhotoExportResultDto};
use crate::features::photos::models::OrderPhoto;
use crate::features::settings::models::PhotoExportSettings;

/// Pushes photos to a user-configured HTTP endpoint
pub struct PhotoExportService {
    http_client: reqwest::Client,
    allow_private_hosts: bool,
}

impl PhotoExportService {
    pub fn new(config: &PhotoExportConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(config.request_timeout);

        // Hostnames must resolve to public addresses; redirects are not followed
        if !config.allow_private_hosts {
            builder = builder
                .dns_resolver(Arc::new(PublicAddressResolver))
                .redirect(reqwest::redirect::Policy::none());
        }

        let http_client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            allow_private_hosts: config.allow_private_hosts,
        })
    }

    /// Parse the endpoint and reject non-HTTP schemes and non-public hosts
    fn check_endpoint(&self, endpoint: &str) -> Result<Url> {
        let url = Url::parse(endpoint).map_err(|e| {
            AppError::BadRequest(format!("Invalid photo export endpoint: {}", e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::BadRequest(
                "Photo export endpoint must use http or https".to_string(),
            ));
        }

        if self.allow_private_hosts {
            return Ok(url);
        }

        let host = url
            .host_str()
            .ok_or_else(|| AppError::BadRequest("Photo export endpoint has no host".to_string()))?
            .trim_start_matches('[')
            .trim_end_matches(']')
            .to_ascii_lowercase();

        let blocked = match host.parse::<IpAddr>() {
            Ok(ip) => !is_public_ip(ip),
            Err(_) => host == "localhost" || host.ends_with(".localhost"),
        };

        if blocked {
            tracing::warn!("Rejected photo export endpoint on non-public host {}", host);
            return Err(AppError::BadRequest(format!(
                "Photo export endpoint host {} is not a public address",
                host
            )));
        }

        Ok(url)
    }

    pub async fn export(
        &self,
        settings: &PhotoExportSettings,
        photo: &OrderPhoto,
    ) -> Result<PhotoExportResultDto> {
        if !settings.is_configured() {
            return Err(AppError::BadRequest(
                "Photo export endpoint is not configured".to_string(),
            ));
        }

        let url = self.check_endpoint(&settings.api_endpoint)?;

        let payload = PhotoExportPayload {
            order_id: &photo.order_id,
            photo_id: &photo.id,
            image_data: &photo.image_data,
            date: photo.date,
        };

        tracing::debug!(
            "Exporting photo {} of order {} to {}",
            photo.id,
            photo.order_id,
            settings.api_endpoint
        );

        let mut request = self.http_client.post(url).json(&payload);
        if let Some(api_key) = settings.api_key.as_deref().filter(|k| !k.is_empty()) {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Photo export request failed: {}", e);
            AppError::ExternalServiceError(format!("Photo export failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Photo export endpoint error: HTTP {} - {}", status, body);
            return Err(AppError::ExternalServiceError(format!(
                "Photo export endpoint returned HTTP {}",
                status
            )));
        }

        tracing::info!(
            "Photo exported: id={}, order={}, status={}",
            photo.id,
            photo.order_id,
            status
        );

        Ok(PhotoExportResultDto {
            photo_id: photo.id.clone(),
            endpoint: settings.api_endpoint.clone(),
            status: status.as_u16(),
        })
    }
}

/// Resolver that drops every address `is_public_ip` rejects
struct PublicAddressResolver;

impl Resolve for PublicAddressResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let host = name.as_str().to_string();
        Box::pin(async move {
            let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host.as_str(), 0))
                .await?
                .filter(|addr| is_public_ip(addr.ip()))
                .collect();

            if addrs.is_empty() {
                return Err(format!("{} does not resolve to a public address", host).into());
            }

            Ok::<Addrs, Box<dyn std::error::Error + Send + Sync>>(Box::new(addrs.into_iter()))
        })
    }
}

/// Globally routable unicast address
fn is_public_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            let [a, b, ..] = v4.octets();
            let shared = a == 100 && (b & 0xc0) == 64;
            !(v4.is_loopback()
                || v4.is_private()
                || v4.is_link_local()
                || v4.is_unspecified()
                || v4.is_broadcast()
                || v4.is_multicast()
                || a == 0
                || shared)
        }
        IpAddr::V6(v6) => {
            if let Some(v4) = v6.to_ipv4_mapped() {
                return is_public_ip(IpAddr::V4(v4));
            }
            let first = v6.segments()[0];
            let unique_local = (first & 0xfe00) == 0xfc00;
            let link_local = (first & 0xffc0) == 0xfe80;
            !(v6.is_loopback()
                || v6.is_unspecified()
                || v6.is_multicast()
                || unique_local
                || link_local)
        }
    }
}
