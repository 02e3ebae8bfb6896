use rand::{rngs::OsRng, RngCore};
use rcgen::SerialNumber;

use crate::Error;

/// Length of generated serial numbers in bytes (128 bits of entropy)
pub const SERIAL_LEN: usize = 16;

/// Draw a serial number uniformly from `[0, 2^128)`.
///
/// The bytes are read as a big-endian unsigned integer; rcgen takes care of
/// the DER sign octet when the top bit is set.
pub fn random_serial() -> crate::Result<SerialNumber> {
	let mut bytes = [0u8; SERIAL_LEN];
	OsRng.try_fill_bytes(&mut bytes).map_err(Error::Entropy)?;
	Ok(SerialNumber::from_slice(&bytes))
}
