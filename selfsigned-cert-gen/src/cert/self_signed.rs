use rcgen::{Certificate, CertificateParams};
use ring::digest;
use std::fmt::Write;
use tracing::debug;

use super::{key::RsaKey, PemCertifiedKey};

/// A self-signed [Certificate] together with the key that signed it.
pub struct SelfSigned {
	cert: Certificate,
	key: RsaKey,
}

impl SelfSigned {
	/// Sign `params` with `key`, using the same identity as subject and issuer.
	pub fn sign(params: CertificateParams, key: RsaKey) -> crate::Result<Self> {
		let cert = params.self_signed(key.key_pair())?;
		debug!(len = cert.der().len(), "self-signed certificate");
		Ok(Self { cert, key })
	}
	/// Serialize the certificate as `CERTIFICATE` and the key as PKCS#1
	/// `RSA PRIVATE KEY` PEM.
	pub fn serialize_pem(&self) -> crate::Result<PemCertifiedKey> {
		Ok(PemCertifiedKey {
			cert_pem: self.cert.pem(),
			private_key_pem: self.key.serialize_pkcs1_pem()?,
		})
	}
	/// DER encoding of the certificate
	pub fn der(&self) -> &[u8] {
		self.cert.der()
	}
	/// Return `&Certificate`
	pub fn cert(&self) -> &Certificate {
		&self.cert
	}
	/// Return the signing key
	pub fn key(&self) -> &RsaKey {
		&self.key
	}
	/// Lowercase hex SHA-256 digest of the DER certificate.
	pub fn fingerprint(&self) -> String {
		let hash = digest::digest(&digest::SHA256, self.der());
		hash.as_ref().iter().fold(String::new(), |mut output, b| {
			let _ = write!(output, "{b:02x}");
			output
		})
	}
}
