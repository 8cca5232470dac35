//! reqwest adapter for the hospital service REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ServiceError;
use crate::port::HospitalService;
use crate::types::{Doctor, DoctorId, ErrorBody, IncrementTokenRequest, NewDoctor, TokenResponse};

const DOCTORS_PATH: [&str; 3] = ["api", "hospital", "doctors"];
const INCREMENT_TOKEN_PATH: [&str; 3] = ["api", "token-management", "increment-token"];

/// Transport settings for [`HttpHospitalService`].
#[derive(Debug, Clone, Copy)]
pub struct HttpSettings {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

/// Hospital service client over HTTP/JSON.
pub struct HttpHospitalService {
    client: Client,
    base_url: Url,
}

impl HttpHospitalService {
    /// Create a client for the service rooted at `base_url`.
    pub fn new(base_url: &str, settings: HttpSettings) -> Result<Self, ServiceError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ServiceError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ServiceError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(settings.request_timeout)
            .connect_timeout(settings.connect_timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send a request and turn non-2xx responses into [`ServiceError::Rejected`].
    async fn send(&self, request: RequestBuilder) -> Result<Response, ServiceError> {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                ServiceError::Connection(format!("Cannot connect to {}", self.base_url))
            } else {
                ServiceError::Http(e)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Error bodies are optional and not always JSON.
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        warn!(status = status.as_u16(), ?message, "hospital service rejected request");

        Err(ServiceError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse<R: DeserializeOwned>(response: Response) -> Result<R, ServiceError> {
        response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }
}

#[async_trait]
impl HospitalService for HttpHospitalService {
    async fn list_doctors(&self) -> Result<Vec<Doctor>, ServiceError> {
        let url = self.endpoint(&DOCTORS_PATH);
        debug!(%url, "listing doctors");
        let response = self.send(self.client.get(url)).await?;
        Self::parse(response).await
    }

    async fn create_doctor(&self, doctor: &NewDoctor) -> Result<Doctor, ServiceError> {
        let url = self.endpoint(&DOCTORS_PATH);
        debug!(%url, name = %doctor.name, "creating doctor");
        let response = self.send(self.client.post(url).json(doctor)).await?;
        Self::parse(response).await
    }

    async fn delete_doctor(&self, id: &DoctorId) -> Result<(), ServiceError> {
        let mut segments: Vec<&str> = DOCTORS_PATH.to_vec();
        segments.push(id.as_str());
        let url = self.endpoint(&segments);
        debug!(%url, "deleting doctor");
        // Any 2xx counts; the body is not required.
        self.send(self.client.delete(url)).await.map(|_| ())
    }

    async fn increment_token(&self, doctor_id: &DoctorId) -> Result<u64, ServiceError> {
        let url = self.endpoint(&INCREMENT_TOKEN_PATH);
        debug!(%url, %doctor_id, "incrementing token");
        let body = IncrementTokenRequest {
            doctor_id: doctor_id.clone(),
        };
        let response = self.send(self.client.post(url).json(&body)).await?;
        let token: TokenResponse = Self::parse(response).await?;
        Ok(token.token)
    }
}
