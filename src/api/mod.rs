//! External ranking-service contract
//!
//! The word-ranking algorithm itself lives in a remote HTTP service; this
//! module owns the client side of that contract: configuration enums, request
//! URL construction, response decoding, and the failure policy that keeps
//! service trouble from ever corrupting board or constraint state.

pub mod client;
pub mod config;
pub mod request;
pub mod response;

pub use client::{
    ClientError, HttpTransport, RequestToken, ResponseGate, SolverClient, Transport, TransportError,
};
pub use config::{SolverConfig, StrategyPreset, WordList};
pub use response::{
    Analysis, GameScore, GameScoreRow, PartitionStats, ScoredWord, TupleScore, TupleWord, WordScore,
};
