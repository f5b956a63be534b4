pub mod atomic;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod fs;
pub mod interactive;
pub mod invocation;
pub mod logging;
pub mod output;
pub mod registration;
pub mod resilience;
pub mod utils;

/// Installs the process-wide rustls crypto provider used by the HTTP client.
///
/// Safe to call more than once; later calls are ignored.
pub fn install_crypto_provider() {
    #[cfg(not(windows))]
    let provider = rustls::crypto::ring::default_provider();
    #[cfg(windows)]
    let provider = rustls::crypto::aws_lc_rs::default_provider();

    let _ = provider.install_default();
}
