//! Access-token sources for the Drive API.
//!
//! The pipeline never sees tokens; it talks to a capability handle. This
//! module supplies the bearer credential that handle sends: either an access
//! token obtained elsewhere (OAuth flow, `gcloud auth`) and handed in by the
//! caller, or a service account exchanged for short-lived tokens via a
//! signed JWT assertion.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::{FilterError, Result};
use crate::models::{ServiceAccountCredentials, TokenResponse};

/// Google OAuth2 token endpoint, used unless the credentials file names one.
const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Google Drive API scope.
const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive";

/// JWT claims for service account authentication.
#[derive(Debug, Serialize)]
struct Claims {
    iss: String,   // Issuer (service account email)
    scope: String, // OAuth scope
    aud: String,   // Audience (token endpoint)
    exp: u64,      // Expiration time
    iat: u64,      // Issued at
}

/// Cached access token with expiration.
#[derive(Clone)]
struct CachedToken {
    access_token: String,
    expires_at: SystemTime,
}

#[derive(Clone)]
enum TokenSource {
    /// Caller-supplied token. Never refreshed; once it expires, provider
    /// calls fail with 401s and the caller must supply a fresh one.
    Static(String),
    /// Service account credentials exchanged for cached short-lived tokens.
    ServiceAccount {
        credentials: Arc<ServiceAccountCredentials>,
        client: Client,
        cached: Arc<RwLock<Option<CachedToken>>>,
    },
}

/// Supplier of bearer tokens for Drive API calls.
#[derive(Clone)]
pub struct Authenticator {
    source: TokenSource,
}

impl Authenticator {
    /// Authenticator around a pre-issued access token with Drive scope.
    pub fn from_access_token(token: impl Into<String>) -> Self {
        Self {
            source: TokenSource::Static(token.into()),
        }
    }

    /// Authenticator from a service account JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let credentials: ServiceAccountCredentials = serde_json::from_str(&content)?;
        Ok(Self::from_credentials(credentials))
    }

    /// Authenticator from already-parsed service account credentials.
    pub fn from_credentials(credentials: ServiceAccountCredentials) -> Self {
        Self {
            source: TokenSource::ServiceAccount {
                credentials: Arc::new(credentials),
                client: Client::new(),
                cached: Arc::new(RwLock::new(None)),
            },
        }
    }

    /// Get a valid access token, refreshing if necessary.
    pub async fn access_token(&self) -> Result<String> {
        let (credentials, client, cached) = match &self.source {
            TokenSource::Static(token) => return Ok(token.clone()),
            TokenSource::ServiceAccount {
                credentials,
                client,
                cached,
            } => (credentials, client, cached),
        };

        // Check if we have a valid cached token
        {
            let guard = cached.read().await;
            if let Some(token) = guard.as_ref() {
                // Add 60 second buffer before expiration
                let buffer = Duration::from_secs(60);
                if token.expires_at > SystemTime::now() + buffer {
                    return Ok(token.access_token.clone());
                }
            }
        }

        let fresh = refresh_token(credentials, client).await?;

        {
            let mut guard = cached.write().await;
            *guard = Some(fresh.clone());
        }

        Ok(fresh.access_token)
    }
}

/// Exchange a signed JWT assertion for an access token.
async fn refresh_token(
    credentials: &ServiceAccountCredentials,
    client: &Client,
) -> Result<CachedToken> {
    let token_uri = credentials.token_uri.as_deref().unwrap_or(TOKEN_URI);

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs();

    let claims = Claims {
        iss: credentials.client_email.clone(),
        scope: DRIVE_SCOPE.to_string(),
        aud: token_uri.to_string(),
        iat: now,
        exp: now + 3600, // 1 hour
    };

    let header = Header::new(Algorithm::RS256);
    let key = EncodingKey::from_rsa_pem(credentials.private_key.as_bytes())?;
    let jwt = encode(&header, &claims, &key)?;

    let params = [
        ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
        ("assertion", &jwt),
    ];

    let response = client
        .post(token_uri)
        .form(&params)
        .send()
        .await
        .map_err(|e| FilterError::TokenRefresh(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(FilterError::TokenRefresh(format!(
            "Status {}: {}",
            status, body
        )));
    }

    let token_response: TokenResponse = response
        .json()
        .await
        .map_err(|e| FilterError::TokenRefresh(e.to_string()))?;

    let expires_at = SystemTime::now() + Duration::from_secs(token_response.expires_in);

    Ok(CachedToken {
        access_token: token_response.access_token,
        expires_at,
    })
}
