//! Root certificate loading for the SuperLink connection.

use crate::error::UsageError;
use std::{fs, path::Path};
use supernode_node_api::RootCertificates;
use tracing::{debug, warn};

/// Obtains the root certificates used to verify the SuperLink.
///
/// - `insecure` with a certificate path is a usage error.
/// - `insecure` alone logs a warning and returns `None`.
/// - otherwise the certificate file is read if given; `None` selects the
///   system roots.
pub fn try_obtain_root_certificates(
    insecure: bool,
    root_certificates: Option<&Path>,
    superlink_address: &str,
) -> Result<Option<RootCertificates>, UsageError> {
    if insecure {
        if root_certificates.is_some() {
            return Err(UsageError::ConflictingRootCertificates);
        }
        warn!(
            "Option `--insecure` was set. Starting insecure HTTP client connected to {}.",
            superlink_address
        );
        return Ok(None);
    }

    let certificates = root_certificates
        .map(|path| {
            fs::read(path)
                .map(RootCertificates::new)
                .map_err(|source| UsageError::RootCertificates { path: path.to_path_buf(), source })
        })
        .transpose()?;

    debug!(
        "Starting secure HTTPS client connected to {} with the following certificates: {:?}.",
        superlink_address, certificates
    );

    Ok(certificates)
}
