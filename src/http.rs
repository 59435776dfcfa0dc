//! HTTP agent used by the remote reply provider.
//!
//! TLS goes through native-tls so the system trust store applies (Schannel on
//! Windows, OpenSSL on Linux, Security.framework on macOS).

use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

/// User-Agent header sent with every query.
pub const USER_AGENT: &str = concat!("chefbot/", env!("CARGO_PKG_VERSION"));

/// Create a new HTTP agent configured with native-tls.
///
/// Non-2xx responses surface as `ureq::Error::StatusCode`. No global timeout
/// is set.
pub fn agent() -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder()
        .tls_config(tls_config)
        .build()
        .into()
}
