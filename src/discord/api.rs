//! Type definitions and helpers for the Discord API.

use super::auth::{to_auth_header_val, UserToken};

/// The base URL of the Discord API.
pub const API_BASE: &str = "https://discord.com/api/v9";

/// The `User-Agent` the official web client would send alongside
/// [SUPER_PROPERTIES]. User tokens are only accepted alongside a plausible
/// browser fingerprint.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Base64-encoded client metadata mirroring what the web client reports.
/// Treated as an opaque constant; the encoded fields must stay consistent
/// with [BROWSER_USER_AGENT].
const SUPER_PROPERTIES: &str = "eyJvcyI6IldpbmRvd3MiLCJicm93c2VyIjoiQ2hyb21lIiwiZGV2aWNlIjoiIiwic3lzdGVtX2xvY2FsZSI6ImVuLVVTIiwiYnJvd3Nlcl91c2VyX2FnZW50IjoiTW96aWxsYS81LjAgKFdpbmRvd3MgTlQgMTAuMDsgV2luNjQ7IHg2NCkgQXBwbGVXZWJLaXQvNTM3LjM2IChLSFRNTCwgbGlrZSBHZWNrbykgQ2hyb21lLzEyMC4wLjAuMCBTYWZhcmkvNTM3LjM2IiwiYnJvd3Nlcl92ZXJzaW9uIjoiMTIwLjAuMC4wIiwib3NfdmVyc2lvbiI6IjEwIiwicmVmZXJyZXIiOiIiLCJyZWZlcnJpbmdfZG9tYWluIjoiIiwicmVmZXJyZXJfY3VycmVudCI6IiIsInJlZmVycmluZ19kb21haW5fY3VycmVudCI6IiIsInJlbGVhc2VfY2hhbm5lbCI6InN0YWJsZSIsImNsaWVudF9idWlsZF9udW1iZXIiOjI1ODc0MywiY2xpZW50X2V2ZW50X3NvdXJjZSI6bnVsbH0=";

/// A client for the subset of the Discord API we use, holding a connection
/// pool internally as per [reqwest::Client].
///
/// The base URL is taken at construction so that tests can point the client
/// at a local mock server.
pub struct DiscordClient {
    base_url: String,
    token: UserToken,
    http: reqwest::Client,
}

impl DiscordClient {
    pub fn new(base_url: String, token: UserToken) -> Self {
        Self {
            base_url,
            token,
            http: reqwest::Client::new(),
        }
    }

    /// Create a GET request to any Discord API endpoint, handling
    /// authentication and the static client-fingerprint headers.
    pub(super) fn get<T: ToString>(&self, path: T) -> reqwest::RequestBuilder {
        self.fingerprinted(self.http.get(self.base_url.to_owned() + &path.to_string()))
    }

    /// Create a POST request to any Discord API endpoint, handling
    /// authentication and the static client-fingerprint headers.
    pub(super) fn post<T: ToString>(&self, path: T) -> reqwest::RequestBuilder {
        self.fingerprinted(self.http.post(self.base_url.to_owned() + &path.to_string()))
    }

    fn fingerprinted(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header(reqwest::header::AUTHORIZATION, to_auth_header_val(&self.token))
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
            .header("X-Super-Properties", SUPER_PROPERTIES)
    }
}
