//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Signing Ports
//!
//! - `PayloadSigner` - Keyed signing and verification of redirect payloads

mod payload_signer;

pub use payload_signer::PayloadSigner;
