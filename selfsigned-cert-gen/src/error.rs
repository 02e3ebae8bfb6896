use std::{error, fmt, io, path::PathBuf};

/// The error type of the certificate generator.
///
/// Every variant names the pipeline step that failed.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
	/// The certificate configuration was rejected before anything was generated
	InvalidConfig(String),
	/// The operating system random source failed while drawing the serial number
	Entropy(rand::Error),
	/// RSA key generation failed
	KeyGeneration(rsa::Error),
	/// The private key could not be serialized to PKCS#1 or PKCS#8 DER
	KeyEncoding(Box<dyn error::Error + Send + Sync>),
	/// Loading the key, building or signing the certificate failed
	Signing(rcgen::Error),
	/// Writing an output file failed
	Write {
		/// The file that could not be written
		path: PathBuf,
		/// The underlying I/O error
		source: io::Error,
	},
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		use self::Error::*;
		match self {
			InvalidConfig(reason) => write!(f, "invalid certificate configuration: {reason}")?,
			Entropy(e) => write!(f, "failed to generate serial number: {e}")?,
			KeyGeneration(e) => write!(f, "failed to generate RSA key pair: {e}")?,
			KeyEncoding(e) => write!(f, "failed to encode private key: {e}")?,
			Signing(e) => write!(f, "failed to create self-signed certificate: {e}")?,
			Write { path, source } => write!(f, "failed to write {}: {source}", path.display())?,
		};
		Ok(())
	}
}

impl error::Error for Error {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		match self {
			Error::InvalidConfig(_) => None,
			Error::Entropy(e) => Some(e),
			Error::KeyGeneration(e) => Some(e),
			Error::KeyEncoding(e) => Some(e.as_ref()),
			Error::Signing(e) => Some(e),
			Error::Write { source, .. } => Some(source),
		}
	}
}

impl From<rcgen::Error> for Error {
	fn from(e: rcgen::Error) -> Self {
		Error::Signing(e)
	}
}

impl From<rsa::pkcs1::Error> for Error {
	fn from(e: rsa::pkcs1::Error) -> Self {
		Error::KeyEncoding(Box::new(e))
	}
}

impl From<rsa::pkcs8::Error> for Error {
	fn from(e: rsa::pkcs8::Error) -> Self {
		Error::KeyEncoding(Box::new(e))
	}
}
