use once_cell::unsync::OnceCell;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::models::{FetchError, Post, Todo, User, WeatherReport};

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_DIRECTORY: OnceCell<DashboardClient> = const { OnceCell::new() };
    static SHARED_WEATHER: OnceCell<WeatherClient> = const { OnceCell::new() };
}

/// Client for the remote user directory: users, posts and todos.
///
/// All failures are mapped to [`FetchError`] at this boundary; no transport
/// error type leaks to the callers. Requests are independent, un-retried and
/// un-cancelled.
#[derive(Clone, Debug)]
pub struct DashboardClient {
    base_url: String,
    client: Client,
}

impl DashboardClient {
    /// Create a new directory client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Process-wide instance configured from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_DIRECTORY.with(|cell| {
            cell.get_or_init(|| Self::new(&FrontendConfig::new().directory_base_url))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|_| FetchError::Network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status.as_u16()));
        }
        response.json().await.map_err(|_| FetchError::Decode)
    }

    /// Fetch the whole user directory.
    pub async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        self.get_json(self.api_url("users"), &[]).await
    }

    /// Fetch a single user by id.
    pub async fn fetch_user(&self, id: i64) -> Result<User, FetchError> {
        self.get_json(self.api_url(&format!("users/{id}")), &[])
            .await
    }

    /// Fetch the posts authored by `user_id`.
    pub async fn fetch_posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, FetchError> {
        self.get_json(self.api_url("posts"), &[("userId", user_id.to_string())])
            .await
    }

    /// Fetch the todos owned by `user_id`.
    pub async fn fetch_todos_by_user(&self, user_id: i64) -> Result<Vec<Todo>, FetchError> {
        self.get_json(self.api_url("todos"), &[("userId", user_id.to_string())])
            .await
    }

    /// Fetch every post in the directory.
    pub async fn fetch_all_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.get_json(self.api_url("posts"), &[]).await
    }

    /// Fetch every todo in the directory.
    pub async fn fetch_all_todos(&self) -> Result<Vec<Todo>, FetchError> {
        self.get_json(self.api_url("todos"), &[]).await
    }
}

/// Client for the current-weather service.
///
/// Both lookups reject locally before any network traffic when the build
/// carries no API key; a city search additionally rejects a blank query.
#[derive(Clone, Debug)]
pub struct WeatherClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl WeatherClient {
    /// Create a new weather client for `base_url` with an optional key.
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key,
            client: Client::new(),
        }
    }

    /// Process-wide instance configured from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_WEATHER.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::new();
                Self::new(&config.weather_base_url, config.weather_api_key)
            })
            .clone()
        })
    }

    fn key(&self) -> Result<&str, FetchError> {
        self.api_key.as_deref().ok_or(FetchError::MissingApiKey)
    }

    /// Current weather for a searched city, metric units.
    pub async fn by_city(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(FetchError::EmptyCity);
        }
        let key = self.key()?;
        self.request(&[
            ("q", city.to_string()),
            ("appid", key.to_string()),
            ("units", "metric".to_string()),
        ])
        .await
    }

    /// Current weather at geolocated coordinates, metric units.
    pub async fn by_coords(&self, lat: f64, lon: f64) -> Result<WeatherReport, FetchError> {
        let key = self.key()?;
        self.request(&[
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", key.to_string()),
            ("units", "metric".to_string()),
        ])
        .await
    }

    async fn request(&self, query: &[(&str, String)]) -> Result<WeatherReport, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(query)
            .send()
            .await
            .map_err(|_| FetchError::Network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status.as_u16()));
        }
        response.json().await.map_err(|_| FetchError::Decode)
    }
}
