// SPDX-License-Identifier: MPL-2.0
use skyventor::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "skyventor=info";

const HELP: &str = "\
SkyVentor currency converter

USAGE:
  skyventor [OPTIONS]

OPTIONS:
  --lang <ru|en|auto|LOCALE>  Language for this session
  --config-dir <DIR>          Directory holding settings.toml
  --backend-url <URL>         Conversion service base URL
  --log-level <FILTER>        Log filter (overrides RUST_LOG)
  -h, --help                  Print this help

COMMANDS (one per line on standard input):
  amount <x>, from <CODE>, to <CODE>, convert, swap,
  rates [FROM TO], rates from <CODE>, rates to <CODE>,
  theme <dark|light|auto>, lang <ru|en>,
  page <converter|rates|settings|about>, refresh, dismiss, quit
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        backend_url: args.opt_value_from_str("--backend-url")?,
        log_level: args.opt_value_from_str("--log-level")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments: {remaining:?}");
    }

    init_tracing(flags.log_level.as_deref());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(app::run(flags));
    // Standard input is read on a blocking thread that cannot be interrupted.
    runtime.shutdown_background();

    result.map_err(Into::into)
}

fn init_tracing(level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(level))
        .with_writer(std::io::stderr)
        .init();
}

/// `--log-level` wins over `RUST_LOG`; an unparsable value falls back to the default.
fn log_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_flag_is_used_when_valid() {
        assert_eq!(log_filter(Some("skyventor=debug")).to_string(), "skyventor=debug");
    }

    #[test]
    fn unparsable_log_level_falls_back_to_default() {
        assert_eq!(
            log_filter(Some("skyventor=loud")).to_string(),
            EnvFilter::new(DEFAULT_LOG_FILTER).to_string()
        );
    }
}
