use std::{
	fs::{self, File},
	io::{self, Write},
	path::Path,
};

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::Error;

mod config;
pub use config::{
	CertificateConfig, DEFAULT_COMMON_NAME, DEFAULT_ORGANIZATION, DEFAULT_ORGANIZATIONAL_UNIT,
	DEFAULT_SAN, DEFAULT_VALIDITY_DAYS,
};
mod key;
pub use key::{RsaKey, RsaKeySize};
mod params;
pub use params::CertificateBuilder;
mod self_signed;
pub use self_signed::SelfSigned;
mod serial;
pub use serial::random_serial;

#[derive(Debug, Clone)]
/// Pem serialized Certificate and Pem serialized corresponding private key
pub struct PemCertifiedKey {
	/// `CERTIFICATE` PEM block
	pub cert_pem: String,
	/// `RSA PRIVATE KEY` PEM block
	pub private_key_pem: String,
}

impl PemCertifiedKey {
	/// Write the certificate and key to `dir/cert_file_name` and
	/// `dir/key_file_name`.
	///
	/// Either both files are written or neither is: each file is staged
	/// in a fresh temporary file in `dir` and renamed into place. The key
	/// is renamed first; if the certificate rename then fails, the new key
	/// is removed, so a key that existed before the call is lost while an
	/// existing certificate is left untouched.
	pub fn write(
		&self,
		dir: &Path,
		cert_file_name: &str,
		key_file_name: &str,
	) -> crate::Result<()> {
		fs::create_dir_all(dir).map_err(|source| Error::Write {
			path: dir.to_path_buf(),
			source,
		})?;

		let cert_path = dir.join(cert_file_name);
		let key_path = dir.join(key_file_name);

		// staged files are removed on drop unless persisted
		let cert_staged = stage(dir, &self.cert_pem, false)?;
		let key_staged = stage(dir, &self.private_key_pem, true)?;

		persist(key_staged, &key_path)?;
		if let Err(e) = persist(cert_staged, &cert_path) {
			remove_if_present(&key_path);
			return Err(e);
		}

		info!(cert = %cert_path.display(), key = %key_path.display(), "wrote certificate and key");
		Ok(())
	}
}

/// Write `contents` to a new, exclusively created temporary file in `dir`.
///
/// The file is created with mode `0600`; non-private files are widened
/// to `0644` once written.
fn stage(dir: &Path, contents: &str, private: bool) -> crate::Result<NamedTempFile> {
	let io_err = |source: io::Error| Error::Write {
		path: dir.to_path_buf(),
		source,
	};
	let mut staged = NamedTempFile::new_in(dir).map_err(io_err)?;
	staged.write_all(contents.as_bytes()).map_err(io_err)?;
	if !private {
		world_readable(staged.as_file()).map_err(io_err)?;
	}
	staged.as_file().sync_all().map_err(io_err)?;
	Ok(staged)
}

#[cfg(unix)]
fn world_readable(file: &File) -> io::Result<()> {
	use std::os::unix::fs::PermissionsExt;
	file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn world_readable(_file: &File) -> io::Result<()> {
	Ok(())
}

fn persist(staged: NamedTempFile, to: &Path) -> crate::Result<()> {
	staged.persist(to).map_err(|e| Error::Write {
		path: to.to_path_buf(),
		source: e.error,
	})?;
	Ok(())
}

fn remove_if_present(path: &Path) {
	match fs::remove_file(path) {
		Ok(()) => {},
		Err(e) if e.kind() == io::ErrorKind::NotFound => {},
		Err(e) => warn!(path = %path.display(), error = %e, "failed to clean up"),
	}
}
