//! HTTP client for the Harmony catalog API.

use crate::catalog::Catalog;
use crate::error::{ClientError, Result};
use crate::types::{
    JoinRoom, LoginRequest, LoginResponse, LoginSession, NewPlaylist, NewRoom, NewSong,
    PlaylistRecord, RoomRecord, SongRecord, UserRecord,
};
use async_trait::async_trait;
use harmony_core::{Playlist, PlaylistId, Room, Track, TrackId, UserProfile};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Configuration for the catalog client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL of the catalog server, e.g. `https://harmony.example.com`
    pub base_url: String,

    /// Bearer token from a previous login, if any
    pub token: Option<String>,
}

impl ClientConfig {
    /// Create a config for the given server URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }
}

/// Client for the Harmony catalog API.
///
/// # Example
///
/// ```ignore
/// use harmony_client::{ClientConfig, HarmonyClient};
///
/// let mut client = HarmonyClient::new(ClientConfig::new("https://harmony.example.com"))?;
/// let session = client.login("my-secret-code").await?;
/// println!("Signed in as {}", session.user.nickname);
///
/// let songs = client.get_songs().await?;
/// println!("{} songs in the catalog", songs.len());
/// ```
pub struct HarmonyClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl HarmonyClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("HarmonyPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            token: config.token,
        })
    }

    /// The normalized server URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the client holds a session token.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        builder.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::Unreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })
    }

    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ClientError::Parse(format!("failed to parse response body: {e}")))
        } else if status == StatusCode::UNAUTHORIZED {
            Err(ClientError::AuthRequired)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn expect_success(response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED {
            Err(ClientError::AuthRequired)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait(?Send)]
impl Catalog for HarmonyClient {
    async fn login(&mut self, secret_code: &str) -> Result<LoginSession> {
        let url = format!("{}/api/login", self.base_url);
        debug!(url = %url, "Attempting login");

        let request = LoginRequest {
            secret_code: secret_code.to_string(),
        };

        let response = self.send(self.http.post(&url).json(&request)).await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %message, "Login failed: invalid secret code");
            return Err(ClientError::AuthFailed("invalid secret code".to_string()));
        }

        let login: LoginResponse = Self::parse_response(response).await?;
        info!(nickname = %login.user.nickname, "Login successful");

        self.token = Some(login.token.clone());
        Ok(LoginSession {
            token: login.token,
            user: login.user.into(),
        })
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    async fn get_profile(&self) -> Result<UserProfile> {
        if self.token.is_none() {
            return Err(ClientError::AuthRequired);
        }
        let response = self.send(self.request(Method::GET, "/api/profile")).await?;
        let record: UserRecord = Self::parse_response(response).await?;
        Ok(record.into())
    }

    async fn update_profile(&self, profile: &UserProfile) -> Result<()> {
        let record = UserRecord::from(profile);
        let response = self
            .send(self.request(Method::PUT, "/api/profile").json(&record))
            .await?;
        Self::expect_success(response).await
    }

    async fn get_songs(&self) -> Result<Vec<Track>> {
        let response = self.send(self.request(Method::GET, "/api/songs")).await?;
        let records: Vec<SongRecord> = Self::parse_response(response).await?;
        debug!(count = records.len(), "Fetched songs");
        Ok(records.into_iter().map(Track::from).collect())
    }

    async fn upload_song(&self, song: &NewSong) -> Result<Track> {
        let response = self
            .send(self.request(Method::POST, "/api/songs").json(song))
            .await?;
        let record: SongRecord = Self::parse_response(response).await?;
        info!(id = %record.id, title = %record.title, "Registered song");
        Ok(record.into())
    }

    async fn delete_song(&self, id: &TrackId) -> Result<()> {
        let path = format!("/api/songs/{id}");
        let response = self.send(self.request(Method::DELETE, &path)).await?;
        Self::expect_success(response).await
    }

    async fn get_playlists(&self) -> Result<Vec<Playlist>> {
        let response = self
            .send(self.request(Method::GET, "/api/playlists"))
            .await?;
        let records: Vec<PlaylistRecord> = Self::parse_response(response).await?;
        debug!(count = records.len(), "Fetched playlists");
        Ok(records.into_iter().map(Playlist::from).collect())
    }

    async fn create_playlist(&self, playlist: &NewPlaylist) -> Result<Playlist> {
        let response = self
            .send(self.request(Method::POST, "/api/playlists").json(playlist))
            .await?;
        let record: PlaylistRecord = Self::parse_response(response).await?;
        Ok(record.into())
    }

    async fn update_playlist(&self, id: &PlaylistId, playlist: &NewPlaylist) -> Result<Playlist> {
        let path = format!("/api/playlists/{id}");
        let response = self
            .send(self.request(Method::PUT, &path).json(playlist))
            .await?;
        let record: PlaylistRecord = Self::parse_response(response).await?;
        Ok(record.into())
    }

    async fn delete_playlist(&self, id: &PlaylistId) -> Result<()> {
        let path = format!("/api/playlists/{id}");
        let response = self.send(self.request(Method::DELETE, &path)).await?;
        Self::expect_success(response).await
    }

    async fn create_room(&self, room: &NewRoom) -> Result<Room> {
        let response = self
            .send(self.request(Method::POST, "/api/rooms").json(room))
            .await?;
        let record: RoomRecord = Self::parse_response(response).await?;
        info!(code = %record.code, "Created room");
        Ok(record.into())
    }

    async fn join_room(&self, join: &JoinRoom) -> Result<Room> {
        let response = self
            .send(self.request(Method::POST, "/api/rooms/join").json(join))
            .await?;
        let record: RoomRecord = Self::parse_response(response).await?;
        info!(code = %record.code, "Joined room");
        Ok(record.into())
    }

    async fn get_demo_songs(&self) -> Result<Vec<Track>> {
        let response = self
            .send(self.request(Method::GET, "/api/demo-songs"))
            .await?;
        let records: Vec<SongRecord> = Self::parse_response(response).await?;
        Ok(records.into_iter().map(Track::from).collect())
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!(error = %err, "Health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation() {
        assert!(HarmonyClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(HarmonyClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        assert!(HarmonyClient::new(ClientConfig::new("")).is_err());
        assert!(HarmonyClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(HarmonyClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn url_normalization_strips_trailing_slash() {
        let client = HarmonyClient::new(ClientConfig::new("https://example.com/")).unwrap();
        assert_eq!(client.base_url(), "https://example.com");
    }

    #[test]
    fn stored_token_marks_client_authenticated() {
        let mut config = ClientConfig::new("https://example.com");
        config.token = Some("tok".to_string());
        let client = HarmonyClient::new(config).unwrap();
        assert!(client.is_authenticated());
    }
}
