use clap::ArgMatches;

use super::SECRET_ARG;
use crate::totp::{GetTime, Totp};
use crate::writer::OutErr;

/// Runs the code command and returns the process exit status.
pub fn run_code<W, C>(args: &ArgMatches, clock: &C, writer: &mut W) -> i32
where
    W: OutErr,
    C: GetTime,
{
    let secret = match args.value_of(SECRET_ARG) {
        Some(secret) => secret,
        None => {
            writer.write_err("Missing secret\n");
            return 1;
        }
    };

    match Totp::new(secret) {
        Ok(totp) => {
            let code = totp.code_with(clock);
            writer.write(&format!("{}\n", code));
            0
        }
        Err(err) => {
            writer.write_err(&format!("{}\n", err));
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::constants::*;
    use crate::tests::mocks::*;
    use crate::tests::utils::get_cmd_args;

    #[test]
    fn prints_code_and_remaining_seconds() {
        let mut writer = MockOtpWriter::new();
        let clock = MockClock::new();

        let args = get_cmd_args(&vec!["totp", RFC_KEY]).unwrap();
        let status = run_code(&args, &clock, &mut writer);

        let expected = format!("{}\n", Totp::new(RFC_KEY).unwrap().code_at(MOCK_NOW));
        assert_eq!(status, 0);
        assert_eq!(String::from_utf8(writer.out).unwrap(), expected);
        assert_eq!(writer.err, Vec::new());
    }

    #[test]
    fn output_is_six_digits_then_seconds() {
        let mut writer = MockOtpWriter::new();

        let args = get_cmd_args(&vec!["totp", ALPHABET_KEY]).unwrap();
        run_code(&args, &MockClock::new(), &mut writer);

        let out = String::from_utf8(writer.out).unwrap();
        let parts: Vec<&str> = out.split_whitespace().collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 6);
        assert_eq!(parts[1], "30");
    }

    #[test]
    fn errors_on_missing_secret() {
        let mut writer = MockOtpWriter::new();

        let args = get_cmd_args(&vec!["totp"]).unwrap();
        let status = run_code(&args, &MockClock::new(), &mut writer);

        assert_eq!(status, 1);
        assert_eq!(writer.out, Vec::new());
        assert_eq!(String::from_utf8(writer.err).unwrap(), "Missing secret\n");
    }

    #[test]
    fn errors_on_short_secret() {
        let mut writer = MockOtpWriter::new();

        let args = get_cmd_args(&vec!["totp", "ABCDEFGH"]).unwrap();
        let status = run_code(&args, &MockClock::new(), &mut writer);

        assert_eq!(status, 1);
        assert_eq!(writer.out, Vec::new());
        assert_eq!(
            String::from_utf8(writer.err).unwrap(),
            "secret must be equal to or longer than 16 characters, got 8\n"
        );
    }

    #[test]
    fn errors_on_malformed_secret() {
        let mut writer = MockOtpWriter::new();

        let args = get_cmd_args(&vec!["totp", "abcdefghijklmnop"]).unwrap();
        let status = run_code(&args, &MockClock::new(), &mut writer);

        assert_eq!(status, 1);
        assert_eq!(writer.out, Vec::new());
        assert!(String::from_utf8(writer.err)
            .unwrap()
            .starts_with("secret is not a valid base32 encoding"));
    }

    #[test]
    fn rejects_extra_arguments() {
        let args = get_cmd_args(&vec!["totp", RFC_KEY, "extra"]);
        assert!(args.is_err());
    }
}
