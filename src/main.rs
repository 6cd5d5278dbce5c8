use std::process;

use totp::cmd::{self, code::run_code};
use totp::writer::OtpWriter;
use totp::Clock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "totp=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = cmd::command().get_matches();
    let mut writer = OtpWriter::new();

    let status = run_code(&matches, &Clock::new(), &mut writer);
    process::exit(status);
}
