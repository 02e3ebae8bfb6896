#![warn(missing_docs)]
//! This library wraps [rcgen] and [rsa] to generate a self-signed
//! TLS server certificate together with its RSA private key. Its
//! primary intent is to bootstrap a local TLS endpoint, such as a
//! development server, without an external certificate authority.
//!
//! ```no_run
//! # use selfsigned_cert_gen::CertificateBuilder;
//! # use std::path::Path;
//! # fn main() -> selfsigned_cert_gen::Result<()> {
//! CertificateBuilder::new()
//! 	.build()?
//! 	.serialize_pem()?
//! 	.write(Path::new("."), "cert.pem", "key.pem")?;
//! # Ok(())
//! # }
//! ```

mod cert;
mod error;

pub use cert::{
	random_serial, CertificateBuilder, CertificateConfig, PemCertifiedKey, RsaKey, RsaKeySize,
	SelfSigned, DEFAULT_COMMON_NAME, DEFAULT_ORGANIZATION, DEFAULT_ORGANIZATIONAL_UNIT,
	DEFAULT_SAN, DEFAULT_VALIDITY_DAYS,
};
pub use error::Error;

/// A specialized `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
