//! Backend client construction, gated on the execution context.

use crate::backend::config::BackendConfig;

/// Where this process is executing.
///
/// The app renders entirely on the client. Anything that is not the
/// end-user runtime (prerender passes, CI, tooling) must not construct a
/// real client from possibly-absent credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// The end-user client runtime.
    Client,
    /// Everything else: build steps, prerendering, CI.
    Server,
}

/// What the initializer produced: a connected client in a client context,
/// an inert placeholder everywhere else.
#[derive(Debug)]
pub enum BackendHandle {
    Connected(BackendClient),
    Inert,
}

impl BackendHandle {
    /// Build a handle for `context`.
    ///
    /// Never fails. Incomplete configuration still yields a connected
    /// handle that cannot reach a service (logged, not raised), and an
    /// HTTP client construction failure degrades to [`BackendHandle::Inert`].
    pub fn init(context: ExecutionContext, config: BackendConfig) -> Self {
        match context {
            ExecutionContext::Server => {
                tracing::debug!("non-client execution, skipping backend client");
                BackendHandle::Inert
            }
            ExecutionContext::Client => match BackendClient::new(config) {
                Ok(client) => {
                    tracing::debug!(base_url = %client.base_url(), "backend client ready");
                    BackendHandle::Connected(client)
                }
                Err(err) => {
                    tracing::error!(error = %err, "backend client construction failed, handle is inert");
                    BackendHandle::Inert
                }
            },
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, BackendHandle::Connected(_))
    }

    /// The connected client, if this process got one.
    pub fn client(&self) -> Option<&BackendClient> {
        match self {
            BackendHandle::Connected(client) => Some(client),
            BackendHandle::Inert => None,
        }
    }
}

/// Connection material for the hosted backend: service URL, publishable
/// key, and a ready HTTP client. Construction performs no network I/O.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    public_key: String,
}

impl BackendClient {
    fn new(config: BackendConfig) -> Result<Self, reqwest::Error> {
        if !config.is_complete() {
            tracing::warn!("backend configuration incomplete, requests will not reach a service");
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("velu-mobile/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.url,
            public_key: config.public_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// HTTP client that service calls go through.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Absolute URL for a service path, tolerant of stray slashes on
    /// either side of the join.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
