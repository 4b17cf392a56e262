//! Service client and request/response plumbing
//!
//! All contract logic sits behind the `Transport` trait so it can be tested
//! without a socket; `HttpTransport` is the real implementation. Failed or
//! malformed analysis responses degrade to the sentinel result rather than
//! erroring, so the constraint pipeline never sees a network problem.

use super::{Analysis, GameScore, SolverConfig, TupleScore, WordScore, request};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::fmt;

/// Error raised below the HTTP contract: connection, status, or encoding
#[derive(Debug)]
pub enum TransportError {
    /// The URL did not parse
    InvalidUrl(String),
    /// Connection-level failure
    Network(String),
    /// Non-success HTTP status
    Status(u16),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(url) => write!(f, "invalid url: {url}"),
            Self::Network(msg) => write!(f, "network failure: {msg}"),
            Self::Status(code) => write!(f, "service returned status {code}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Error raised by a typed client call
#[derive(Debug)]
pub enum ClientError {
    Transport(TransportError),
    Decode(serde_json::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "request failed: {e}"),
            Self::Decode(e) => write!(f, "malformed response: {e}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::Decode(e) => Some(e),
        }
    }
}

impl From<TransportError> for ClientError {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

/// How the client reaches the service
///
/// The seam exists so every contract test runs against a canned transport.
pub trait Transport {
    /// Perform a GET and return the response body
    ///
    /// # Errors
    /// Returns a `TransportError` for connection failures, bad URLs, or
    /// non-success statuses.
    fn get(&self, url: &str) -> Result<String, TransportError>;
}

/// Real HTTP transport over hyper, driving its own single-threaded runtime
pub struct HttpTransport {
    client: hyper::Client<hyper::client::HttpConnector>,
    runtime: tokio::runtime::Runtime,
}

impl HttpTransport {
    /// Create a transport with a fresh runtime
    ///
    /// # Errors
    /// Returns an I/O error if the runtime cannot be created.
    pub fn new() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            client: hyper::Client::new(),
            runtime,
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        let uri: hyper::Uri = url
            .parse()
            .map_err(|_| TransportError::InvalidUrl(url.to_string()))?;
        self.runtime.block_on(async {
            let response = self
                .client
                .get(uri)
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(TransportError::Status(status.as_u16()));
            }
            let body = hyper::body::to_bytes(response.into_body())
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            String::from_utf8(body.to_vec()).map_err(|e| TransportError::Network(e.to_string()))
        })
    }
}

/// Token identifying one dispatched analysis request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic sequence gate for in-flight requests
///
/// Responses arrive in no particular order; only the response to the most
/// recently issued request may replace the displayed result set, everything
/// older is discarded.
#[derive(Debug, Default)]
pub struct ResponseGate {
    issued: u64,
}

impl ResponseGate {
    #[must_use]
    pub const fn new() -> Self {
        Self { issued: 0 }
    }

    /// Hand out the token for the next outbound request
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Whether a response carrying `token` is still worth applying
    #[must_use]
    pub const fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }
}

/// Typed client for the ranking service
pub struct SolverClient<T: Transport> {
    base: String,
    transport: T,
}

impl<T: Transport> SolverClient<T> {
    pub fn new(base: impl Into<String>, transport: T) -> Self {
        Self {
            base: base.into(),
            transport,
        }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    fn get_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, ClientError> {
        debug!("fetching {url}");
        let body = self.transport.get(url)?;
        serde_json::from_str(&body).map_err(ClientError::Decode)
    }

    /// Fetch the candidate analysis for a restriction string
    ///
    /// Never fails: any transport or decode problem degrades to the sentinel
    /// result so loading indicators clear and the pipeline keeps running.
    #[must_use]
    pub fn analysis(&self, restriction: &str, config: &SolverConfig) -> Analysis {
        let url = request::analysis_url(&self.base, restriction, config);
        match self.get_json(&url) {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("analysis request for {restriction} failed: {e}");
                Analysis::error_sentinel()
            }
        }
    }

    /// Score a single candidate word under the current restrictions
    ///
    /// # Errors
    /// Returns a `ClientError` on transport failure or a malformed body.
    pub fn word_score(
        &self,
        restriction: &str,
        word: &str,
        config: &SolverConfig,
    ) -> Result<WordScore, ClientError> {
        let url = request::word_score_url(&self.base, restriction, word, config);
        self.get_json(&url)
    }

    /// Rate a completed or partial game against a known solution
    ///
    /// # Errors
    /// Returns a `ClientError` on transport failure or a malformed body.
    pub fn rate_game(
        &self,
        solution: &str,
        guesses: &[String],
        config: &SolverConfig,
    ) -> Result<GameScore, ClientError> {
        let url = request::rate_url(&self.base, solution, guesses, config);
        self.get_json(&url)
    }

    /// Ask the service how it would solve for `solution`
    ///
    /// # Errors
    /// Returns a `ClientError` on transport failure or a malformed body.
    pub fn solve(
        &self,
        solution: &str,
        first_word: Option<&str>,
        config: &SolverConfig,
    ) -> Result<Vec<String>, ClientError> {
        let url = request::solve_url(&self.base, solution, first_word, config);
        self.get_json(&url)
    }

    /// Combined statistics for a fixed starting sequence
    ///
    /// # Errors
    /// Returns a `ClientError` on transport failure or a malformed body.
    pub fn score_tuple(
        &self,
        words: &[String],
        config: &SolverConfig,
    ) -> Result<TupleScore, ClientError> {
        let url = request::score_tuple_url(&self.base, words, config);
        self.get_json(&url)
    }

    /// Ranked suggestions to complete a starting sequence
    ///
    /// # Errors
    /// Returns a `ClientError` on transport failure or a malformed body.
    pub fn finish_tuple(
        &self,
        words: &[String],
        config: &SolverConfig,
    ) -> Result<Vec<TupleScore>, ClientError> {
        let url = request::finish_tuple_url(&self.base, words, config);
        self.get_json(&url)
    }
}
