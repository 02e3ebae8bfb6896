//! Command Line argument parsing
#![allow(missing_docs)]

use std::{net::IpAddr, path::PathBuf};

use bpaf::Bpaf;
use rcgen::SanType;
use selfsigned_cert_gen::{
	CertificateConfig, RsaKeySize, DEFAULT_COMMON_NAME, DEFAULT_ORGANIZATION,
	DEFAULT_ORGANIZATIONAL_UNIT, DEFAULT_SAN, DEFAULT_VALIDITY_DAYS,
};

#[derive(Clone, Debug, Bpaf)]
#[bpaf(options)]
/// Self-signed TLS server certificate generator
pub struct Options {
	/// Output directory for generated files
	#[bpaf(short, long, argument("DIR"), fallback(PathBuf::from(".")), debug_fallback)]
	pub output: PathBuf,
	/// File name of the certificate
	#[bpaf(long, argument("NAME"), fallback("cert.pem".into()), display_fallback)]
	pub cert_file_name: String,
	/// File name of the RSA private key
	#[bpaf(long, argument("NAME"), fallback("key.pem".into()), display_fallback)]
	pub key_file_name: String,
	/// Subject organization (O)
	#[bpaf(long, argument("O"), fallback(DEFAULT_ORGANIZATION.into()), display_fallback)]
	pub organization_name: String,
	/// Subject organizational unit (OU)
	#[bpaf(long, argument("OU"), fallback(DEFAULT_ORGANIZATIONAL_UNIT.into()), display_fallback)]
	pub organizational_unit: String,
	/// Subject common name (CN)
	#[bpaf(long, argument("CN"), fallback(DEFAULT_COMMON_NAME.into()), display_fallback)]
	pub common_name: String,
	/// Days the certificate is valid, starting now
	#[bpaf(long, argument("DAYS"), fallback(DEFAULT_VALIDITY_DAYS), display_fallback)]
	pub days: u32,
	/// RSA key size: 2048, 3072 or 4096
	#[bpaf(long, argument("BITS"), fallback(2048), display_fallback)]
	pub key_bits: usize,
	/// Subject Alt Name (apply multiple times for multiple names/Ips, default 127.0.0.1)
	#[bpaf(long("san"), argument::<String>("SAN"), many, parse(parse_sans))]
	pub san: Vec<SanType>,
}

impl Options {
	/// Certificate configuration selected on the command line.
	pub fn config(&self) -> selfsigned_cert_gen::Result<CertificateConfig> {
		let subject_alt_names = if self.san.is_empty() {
			vec![SanType::IpAddress(DEFAULT_SAN)]
		} else {
			self.san.clone()
		};
		Ok(CertificateConfig {
			organization: self.organization_name.clone(),
			organizational_unit: self.organizational_unit.clone(),
			common_name: self.common_name.clone(),
			validity_days: self.days,
			subject_alt_names,
			key_size: RsaKeySize::try_from(self.key_bits)?,
		})
	}
}

/// Parse cli input into SanType. Try first `IpAddr`, if that fails
/// declare it to be a DnsName.
fn parse_sans(hosts: Vec<String>) -> Result<Vec<SanType>, rcgen::Error> {
	hosts.into_iter().map(parse_san).collect()
}

fn parse_san(host: String) -> Result<SanType, rcgen::Error> {
	if let Ok(ip) = host.parse::<IpAddr>() {
		Ok(SanType::IpAddress(ip))
	} else {
		Ok(SanType::DnsName(host.try_into()?))
	}
}
