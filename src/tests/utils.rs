use clap::ArgMatches;
use data_encoding::BASE32;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};

use crate::cmd::command;

pub fn get_cmd_args(arg_vec: &Vec<&str>) -> Result<ArgMatches, clap::Error> {
    command().try_get_matches_from(arg_vec)
}

// Random padded base32 secret of 10 to 40 bytes
pub fn generate_secret() -> String {
    let len = OsRng.gen_range(10..=40);
    let mut dest = vec![0u8; len];
    OsRng.fill_bytes(&mut dest);
    BASE32.encode(&dest)
}
