pub mod buffer_reader;
pub mod buffer_writer;
pub mod chronometer;
pub mod configuration;
pub mod error;
pub mod fixture;
pub mod hasher;
pub mod hex;
pub mod logger;
pub mod xor_cipher;

use self::{
    buffer_reader::BufferReader, buffer_writer::BufferWriter, chronometer::Chronometer, configuration::Configuration, error::Error,
    fixture::ArgumentBlock, logger::Logger,
};
use serde::Serialize;
use std::{
    io::{self, Write},
    process,
};

#[derive(Serialize)]
struct Summary {
    length: usize,
    sha256: String,
    #[serde(flatten)]
    arguments: ArgumentBlock,
}

fn run() -> Result<(), Error> {
    let configuration = Configuration::new()?;
    let logger = Logger::new(configuration.log());
    logger.log(format!("Configuration {}", configuration));

    let image = fixture::build();
    let arguments = if configuration.check() {
        let arguments = fixture::check(&image)?;
        let (start, end) = arguments.data_range()?;
        let expected = fixture::expected_after_kernel(&image)?;
        logger.log(format!("Fixture checked, kernel should leave data {}", hex::encode(&expected[start..end])));
        arguments
    } else {
        ArgumentBlock::from_image(&image)?
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(&image)?;
    stdout.flush()?;

    let summary = Summary {
        length: image.len(),
        sha256: hex::encode(hasher::sha256(&image)),
        arguments,
    };
    let summary = serde_json::to_string(&summary).map_err(|error| Error::new(format!("Invalid summary: {}", error)))?;
    logger.log(format!("Fixture written {}", summary));
    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}
