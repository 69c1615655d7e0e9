// SPDX-License-Identifier: MPL-2.0
use site_footer::app::{self, Flags};
use site_footer::ui::theming::ThemeMode;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
site_footer

USAGE:
  site_footer [OPTIONS]

OPTIONS:
  --config-dir <DIR>              Directory holding settings.toml
  --theme <light|dark|system>     Theme override
  -h, --help                      Print this help

ENVIRONMENT:
  SITE_FOOTER_CONFIG_DIR          Config directory (overridden by --config-dir)
  RUST_LOG                        Log filter (default: site_footer=info)
";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("site_footer=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
    };

    let remaining = args.finish();
    if let Some(arg) = remaining.into_iter().next() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected argument: {}", arg.to_string_lossy()),
        });
    }

    Ok(flags)
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    init_tracing();

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
