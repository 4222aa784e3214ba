//! Fatal usage errors raised while resolving the command line.

use crate::constants::ROOT_CERTIFICATES_FLAG;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Contradictory, incomplete or retired command-line input.
#[derive(Debug, Error)]
pub enum UsageError {
    /// The retired positional `app` argument was supplied.
    #[error(
        "The `app` argument is deprecated. The SuperNode now automatically uses the ClientApp \
         delivered from the SuperLink. Providing the app directory manually is no longer \
         supported. Please remove the `app` argument from your command."
    )]
    RemovedAppArgument,

    /// `--insecure` and `--root-certificates` were both supplied.
    #[error(
        "Conflicting options: The '--insecure' flag disables HTTPS, but '{flag}' was also \
         specified. Please remove the '{flag}' option when running in insecure mode, or omit \
         '--insecure' to use HTTPS.",
        flag = ROOT_CERTIFICATES_FLAG
    )]
    ConflictingRootCertificates,

    /// The root certificate file could not be read.
    #[error(
        "Unable to read the root certificates file {} given in '{flag}': {source}",
        path.display(),
        flag = ROOT_CERTIFICATES_FLAG
    )]
    RootCertificates {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
