use rcgen::{
	CertificateParams, DistinguishedName, DnType, ExtendedKeyUsagePurpose, IsCa, KeyUsagePurpose,
	SanType, SerialNumber,
};
use time::{Duration, OffsetDateTime};
use tracing::debug;

use super::{
	config::CertificateConfig,
	key::{RsaKey, RsaKeySize},
	self_signed::SelfSigned,
	serial::random_serial,
};

/// Builder to configure the TLS server [CertificateParams] that are
/// finalized into a [SelfSigned] certificate.
#[derive(Clone, Debug, Default)]
pub struct CertificateBuilder {
	config: CertificateConfig,
}

impl CertificateBuilder {
	/// Initialize with the [`CertificateConfig`] defaults
	/// # Example
	/// ```
	/// # use selfsigned_cert_gen::CertificateBuilder;
	/// let cert = CertificateBuilder::new();
	/// ```
	pub fn new() -> Self {
		Self::default()
	}
	/// Initialize from an existing configuration
	pub fn from_config(config: CertificateConfig) -> Self {
		Self { config }
	}
	/// Return `&self.config`.
	pub fn config(&self) -> &CertificateConfig {
		&self.config
	}
	/// Set the subject organization (O).
	pub fn organization_name(mut self, name: &str) -> Self {
		self.config.organization = name.into();
		self
	}
	/// Set the subject organizational unit (OU).
	pub fn organizational_unit(mut self, unit: &str) -> Self {
		self.config.organizational_unit = unit.into();
		self
	}
	/// Set the subject common name (CN).
	pub fn common_name(mut self, name: &str) -> Self {
		self.config.common_name = name.into();
		self
	}
	/// Number of days the certificate stays valid after generation.
	pub fn validity_days(mut self, days: u32) -> Self {
		self.config.validity_days = days;
		self
	}
	/// `SanTypes` that will be recorded as `subject_alt_names`.
	/// Replaces the previous list.
	pub fn subject_alternative_names(mut self, sans: Vec<SanType>) -> Self {
		self.config.subject_alt_names = sans;
		self
	}
	/// Size of the RSA key to generate.
	pub fn key_size(mut self, size: RsaKeySize) -> Self {
		self.config.key_size = size;
		self
	}
	/// Certificate template for the given serial, valid from `now`.
	///
	/// `now` is truncated to whole seconds, the precision X.509 encodes.
	pub fn params(
		&self,
		serial: SerialNumber,
		now: OffsetDateTime,
	) -> crate::Result<CertificateParams> {
		self.config.validate()?;

		let not_before = now - Duration::nanoseconds(i64::from(now.nanosecond()));
		let not_after = not_before + Duration::days(i64::from(self.config.validity_days));

		let mut distinguished_name = DistinguishedName::new();
		distinguished_name.push(DnType::OrganizationName, self.config.organization.as_str());
		distinguished_name.push(
			DnType::OrganizationalUnitName,
			self.config.organizational_unit.as_str(),
		);
		distinguished_name.push(DnType::CommonName, self.config.common_name.as_str());

		let mut params = CertificateParams::default();
		params.serial_number = Some(serial);
		params.distinguished_name = distinguished_name;
		params.not_before = not_before;
		params.not_after = not_after;
		params.is_ca = IsCa::NoCa;
		params.key_usages = vec![
			KeyUsagePurpose::KeyEncipherment,
			KeyUsagePurpose::DigitalSignature,
		];
		params.extended_key_usages = vec![ExtendedKeyUsagePurpose::ServerAuth];
		params.subject_alt_names = self.config.subject_alt_names.clone();
		Ok(params)
	}
	/// Generate the serial number and key pair, then self-sign.
	pub fn build(self) -> crate::Result<SelfSigned> {
		let serial = random_serial()?;
		debug!(serial = ?serial, "drew serial number");
		let params = self.params(serial, OffsetDateTime::now_utc())?;
		let key = RsaKey::generate(self.config.key_size)?;

		SelfSigned::sign(params, key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rcgen::DnValue;
	use std::net::{IpAddr, Ipv4Addr};
	use time::macros::datetime;

	fn serial() -> SerialNumber {
		SerialNumber::from_slice(&[0x7f; 16])
	}

	#[test]
	fn default_template() -> crate::Result<()> {
		let now = datetime!(2024-03-01 12:30:45.123456 UTC);
		let params = CertificateBuilder::new().params(serial(), now)?;

		assert_eq!(params.serial_number, Some(serial()));
		assert_eq!(params.not_before, datetime!(2024-03-01 12:30:45 UTC));
		assert_eq!(params.not_after - params.not_before, Duration::days(365));
		assert_eq!(params.is_ca, IsCa::NoCa);
		assert_eq!(
			params.key_usages,
			vec![
				KeyUsagePurpose::KeyEncipherment,
				KeyUsagePurpose::DigitalSignature
			]
		);
		assert_eq!(
			params.extended_key_usages,
			vec![ExtendedKeyUsagePurpose::ServerAuth]
		);
		assert_eq!(
			params.subject_alt_names,
			vec![SanType::IpAddress(IpAddr::V4(Ipv4Addr::LOCALHOST))]
		);
		Ok(())
	}
	#[test]
	fn subject_fields() -> crate::Result<()> {
		let now = OffsetDateTime::now_utc();
		let params = CertificateBuilder::new()
			.organization_name("Crab widgits SE")
			.organizational_unit("Ops")
			.common_name("crabs.crabs")
			.params(serial(), now)?;

		let dn: Vec<_> = params.distinguished_name.iter().collect();
		assert_eq!(dn.len(), 3);
		assert_eq!(
			params.distinguished_name.get(&DnType::OrganizationName),
			Some(&DnValue::Utf8String("Crab widgits SE".into()))
		);
		assert_eq!(
			params
				.distinguished_name
				.get(&DnType::OrganizationalUnitName),
			Some(&DnValue::Utf8String("Ops".into()))
		);
		assert_eq!(
			params.distinguished_name.get(&DnType::CommonName),
			Some(&DnValue::Utf8String("crabs.crabs".into()))
		);
		Ok(())
	}
	#[test]
	fn custom_validity() -> crate::Result<()> {
		let now = OffsetDateTime::now_utc();
		let params = CertificateBuilder::new()
			.validity_days(30)
			.params(serial(), now)?;
		assert_eq!(params.not_after - params.not_before, Duration::days(30));
		Ok(())
	}
	#[test]
	fn sans_replace_default() -> crate::Result<()> {
		let sans = vec![
			SanType::IpAddress("::1".parse().unwrap()),
			SanType::DnsName("localhost".try_into()?),
		];
		let params = CertificateBuilder::new()
			.subject_alternative_names(sans.clone())
			.params(serial(), OffsetDateTime::now_utc())?;
		assert_eq!(params.subject_alt_names, sans);
		Ok(())
	}
	#[test]
	fn invalid_config_is_rejected_before_key_generation() {
		let result = CertificateBuilder::new().validity_days(0).build();
		assert!(matches!(result, Err(crate::Error::InvalidConfig(_))));

		let result = CertificateBuilder::new()
			.subject_alternative_names(vec![])
			.build();
		assert!(matches!(result, Err(crate::Error::InvalidConfig(_))));
	}
}
