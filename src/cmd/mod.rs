pub mod code;

use clap::{arg, command, Command};

pub const SECRET_ARG: &str = "secret";

/// `totp <SECRET>`: print the current code and the seconds it stays valid.
pub fn command() -> Command<'static> {
    command!()
        .about("Print the current time-based one-time password for a secret")
        .args(&[
            arg!([secret] "Base32-encoded shared secret, at least 16 characters").required(false),
        ])
}
