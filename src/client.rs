use anyhow::{bail, Context};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::channel::{Brightness, ChannelId, PowerCommand};

/// A channel as reported by the server.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RemoteChannel {
    pub id: u8,
    pub on: bool,
    pub brightness: u8,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteState {
    pub on: bool,
    pub brightness: u8,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: String,
}

/// Talks to a running relay-mock server over http.
pub struct RelayClient {
    base_url: String,
    http: Client,
}

impl RelayClient {
    pub fn new(base_url: &str) -> RelayClient {
        return RelayClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        };
    }

    pub fn url(&self, path: &str) -> String {
        return format!("{}{}", self.base_url, path);
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = self.url(path);
        let response: Response = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("request to {} failed", url))?;
        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let body: ErrorBody = response
                .json()
                .with_context(|| format!("malformed error response from {}", url))?;
            bail!("server rejected {}: {}", path, body.error);
        }
        if !status.is_success() {
            bail!("unexpected status {} from {}", status, url);
        }
        return response
            .json()
            .with_context(|| format!("malformed response from {}", url));
    }

    pub fn status(&self) -> anyhow::Result<BTreeMap<u8, RemoteState>> {
        return self.get("/status");
    }

    pub fn set_power(&self, id: ChannelId, command: PowerCommand) -> anyhow::Result<RemoteChannel> {
        return self.get(&format!("/relay/{}/{}", id, command.as_str()));
    }

    pub fn set_brightness(&self, id: ChannelId, brightness: Brightness) -> anyhow::Result<RemoteChannel> {
        return self.get(&format!("/relay/{}/brightness/{}", id, brightness.get()));
    }
}
