use std::process::ExitCode;

use selfsigned_cert_gen::{CertificateBuilder, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod args;

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.init();

	let opts = args::options().run();

	match run(&opts) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			error!("{e}");
			ExitCode::FAILURE
		},
	}
}

fn run(opts: &args::Options) -> Result<()> {
	let signed = CertificateBuilder::from_config(opts.config()?).build()?;
	info!(fingerprint = %signed.fingerprint(), "generated self-signed certificate");

	signed
		.serialize_pem()?
		.write(&opts.output, &opts.cert_file_name, &opts.key_file_name)
}
