use super::error::{Error, Result};

use log::{debug, warn};

use reqwest::header::{self, HeaderMap, HeaderValue};

use serde::Serialize;
use serde_json::Value as JsonValue;

use url::Url;

/// Base URL for requests made with an OAuth access token.
pub const OAUTH_URL: &str = "https://oauth.reddit.com";

/// Base URL for anonymous, read-only requests.
pub const WWW_URL: &str = "https://www.reddit.com";

/// Client struct.
///
/// Cloning a `Client` is cheap: clones share the same connection pool and configuration. Every
/// model object keeps a clone of the client it was loaded with.
#[derive(Debug, Clone)]
pub struct Client {
    url: Url,
    client: reqwest::Client,
}

impl Client {
    /// Create a new client with the specified base URL and value for the User-Agent header. Reddit
    /// requires a unique and descriptive User-Agent, preferably of the form
    /// `<platform>:<app ID>:<version string> (by /u/<reddit username>)`.
    ///
    /// Requests made with this client are anonymous. See [`Client::with_access_token`] for
    /// authenticated requests.
    pub fn new(url: &str, user_agent: impl AsRef<[u8]>) -> Result<Self> {
        Self::with_headers(url, user_agent, HeaderMap::new())
    }

    /// Create a new client sending `access_token` as a bearer token with every request.
    ///
    /// Obtaining and refreshing the token is up to the caller; once it expires, requests will fail
    /// with an [`Error::Http`] error.
    pub fn with_access_token(
        url: &str,
        user_agent: impl AsRef<[u8]>,
        access_token: &str,
    ) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&format!("bearer {}", access_token))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);

        Self::with_headers(url, user_agent, headers)
    }

    fn with_headers(
        url: &str,
        user_agent: impl AsRef<[u8]>,
        mut headers: HeaderMap,
    ) -> Result<Self> {
        if user_agent.as_ref() == b"" {
            return Err(Error::CannotCreateClient(String::from(
                "User Agent mustn't be empty",
            )));
        }

        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_bytes(user_agent.as_ref())?,
        );

        match reqwest::Client::builder().default_headers(headers).build() {
            Ok(c) => Ok(Client {
                url: Url::parse(url)?,
                client: c,
            }),
            Err(e) => Err(Error::CannotCreateClient(format!("{:?}", e))),
        }
    }

    /// The base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.url
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.url.join(endpoint)?)
    }

    /// Send a GET request to `endpoint` with the given query parameters and return the parsed
    /// JSON response.
    pub async fn get<Q>(&self, endpoint: &str, query: &Q) -> Result<JsonValue>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;
        debug!("GET {}", url);

        let res = self.client.get(url).query(query).send().await?;
        read_json(res).await
    }

    /// Send a POST request to `endpoint` with a form-encoded body and return the parsed JSON
    /// response.
    ///
    /// Fails on transport errors, non-2xx statuses and on 2xx responses reporting API errors. The
    /// request is attempted exactly once.
    pub async fn post<F>(&self, endpoint: &str, form: &F) -> Result<JsonValue>
    where
        F: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;
        debug!("POST {}", url);

        let res = self.client.post(url).form(form).send().await?;
        read_json(res).await
    }
}

async fn read_json(res: reqwest::Response) -> Result<JsonValue> {
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        // error pages aren't always JSON
        let reason = serde_json::from_str::<JsonValue>(&body).ok().and_then(|v| {
            v["message"]
                .as_str()
                .or_else(|| v["reason"].as_str())
                .map(String::from)
        });

        warn!("request failed with status {}", status);
        return Err(Error::Http {
            code: status.as_u16(),
            reason,
        });
    }

    // some endpoints (`api/vote/`, `api/block`, ...) answer with an empty body
    let json = if body.trim().is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_str(&body)?
    };

    match api_error(&json) {
        Some(e) => {
            warn!("request rejected: {}", e);
            Err(e)
        }
        None => Ok(json),
    }
}

/// Reddit reports API-semantic errors as `{"json": {"errors": [[code, message, field], ...]}}`.
fn api_error(body: &JsonValue) -> Option<Error> {
    let first = body["json"]["errors"].as_array()?.first()?;

    Some(Error::Api {
        code: first[0].as_str().unwrap_or_default().to_string(),
        message: first[1].as_str().unwrap_or_default().to_string(),
        field: first[2].as_str().map(String::from),
    })
}
