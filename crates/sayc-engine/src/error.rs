use thiserror::Error;

/// The engine's only error. Every other failure mode degrades to a
/// legal Pass instead of surfacing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("auction has not been started")]
    AuctionNotStarted,
}
