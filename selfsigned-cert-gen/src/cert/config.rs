use std::net::{IpAddr, Ipv4Addr};

use rcgen::SanType;

use super::key::RsaKeySize;
use crate::Error;

/// Default subject organization (O)
pub const DEFAULT_ORGANIZATION: &str = "FEARLESS SPIDER";
/// Default subject organizational unit (OU)
pub const DEFAULT_ORGANIZATIONAL_UNIT: &str = "IT";
/// Default subject common name (CN)
pub const DEFAULT_COMMON_NAME: &str = "Go Web Programming";
/// Default validity window, counted from generation time
pub const DEFAULT_VALIDITY_DAYS: u32 = 365;
/// Default Subject Alternative Name: the IPv4 loopback address
pub const DEFAULT_SAN: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Identity, validity and key parameters of the self-signed certificate.
///
/// [`Default`] yields the loopback development certificate:
/// `O=FEARLESS SPIDER, OU=IT, CN=Go Web Programming`, valid for 365 days,
/// a single `127.0.0.1` SAN and a 2048-bit RSA key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateConfig {
	/// Subject organization (O)
	pub organization: String,
	/// Subject organizational unit (OU)
	pub organizational_unit: String,
	/// Subject common name (CN)
	pub common_name: String,
	/// Number of days between not-before and not-after
	pub validity_days: u32,
	/// Subject Alternative Names the certificate is valid for
	pub subject_alt_names: Vec<SanType>,
	/// Size of the generated RSA key
	pub key_size: RsaKeySize,
}

impl Default for CertificateConfig {
	fn default() -> Self {
		Self {
			organization: DEFAULT_ORGANIZATION.into(),
			organizational_unit: DEFAULT_ORGANIZATIONAL_UNIT.into(),
			common_name: DEFAULT_COMMON_NAME.into(),
			validity_days: DEFAULT_VALIDITY_DAYS,
			subject_alt_names: vec![SanType::IpAddress(DEFAULT_SAN)],
			key_size: RsaKeySize::default(),
		}
	}
}

impl CertificateConfig {
	/// Reject configurations that cannot produce a usable server certificate.
	pub fn validate(&self) -> crate::Result<()> {
		// not_after must be strictly after not_before
		if self.validity_days == 0 {
			return Err(Error::InvalidConfig(
				"validity must be at least one day".into(),
			));
		}
		if self.subject_alt_names.is_empty() {
			return Err(Error::InvalidConfig(
				"at least one subject alternative name is required".into(),
			));
		}
		Ok(())
	}
}
