//! Measure what flushing after every write costs, and what stopping
//! those flushes gives back.
//!
//! Both runs mimic a serializer that flushes after each record it
//! writes. The first run lets the flushes through to a `BufWriter` over
//! a file; the second stops them and flushes once at the end.

use clap::{Arg, ArgMatches, Command};
use noflush::builder::StopFlush;
use noflush::FlushNow;
use rand::RngCore;
use std::fs::File;
use std::io::{BufWriter, Result, Write};
use std::time::{Duration, Instant};

fn matches() -> ArgMatches {
    Command::new("flush_per_write")
        .arg(
            Arg::new("records")
                .short('n')
                .help("Number of records to write.")
                .takes_value(true)
                .default_value("1000000"),
        )
        .arg(
            Arg::new("record-size")
                .short('s')
                .help("Size of one record in bytes.")
                .takes_value(true)
                .default_value("32"),
        )
        .get_matches()
}

/// Write `records` random records, flushing after each one the way a
/// flush-happy serializer would.
fn write_records<W: Write>(
    writer: &mut W,
    records: usize,
    record_size: usize,
) -> Result<Duration> {
    let mut rng = rand::thread_rng();
    let mut record = vec![0u8; record_size];
    let start = Instant::now();
    for _ in 0..records {
        rng.fill_bytes(record.as_mut_slice());
        writer.write_all(record.as_slice())?;
        writer.flush()?;
    }
    Ok(start.elapsed())
}

fn main() -> Result<()> {
    let matches = matches();
    let records: usize = matches
        .value_of("records")
        .unwrap()
        .parse()
        .expect("Invalid format for arg 'records'");
    let record_size: usize = matches
        .value_of("record-size")
        .unwrap()
        .parse()
        .expect("Invalid format for arg 'record-size'");

    let dir = tempfile::tempdir()?;

    let mut writer = BufWriter::new(File::create(dir.path().join("a"))?);
    let flushed = write_records(&mut writer, records, record_size)?;
    writer.flush()?;

    let mut writer =
        BufWriter::new(File::create(dir.path().join("b"))?).stop_flush();
    let stopped = write_records(&mut writer, records, record_size)?;
    writer.flush_now()?;

    println!("records: {} x {} bytes", records, record_size);
    println!("flush let through: {:?}", flushed);
    println!("flush stopped:     {:?}", stopped);
    Ok(())
}
