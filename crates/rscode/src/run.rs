use std::fs::File;
use std::io::{self, Read, Write};

use rscode_codec::{RecordReader, RecordWriter, Terminator};

use crate::config::{Config, Input, Source};
use crate::exit::{io_error, record_error, CliResult, SUCCESS};

pub fn run(config: Config) -> CliResult<i32> {
    let stdout = io::stdout();
    let mut writer = RecordWriter::new(stdout.lock(), config.codec.transcoder());

    match config.source {
        Source::Args(records) => {
            for record in &records {
                writer
                    .write_record(record)
                    .map_err(|err| record_error("write failed", err))?;
            }
            tracing::debug!(count = records.len(), "processed argument records");
        }
        Source::Stream(input) => {
            let stream = open_input(&input)?;
            let count = process_stream(stream, &mut writer, config.codec.input_terminator())?;
            tracing::debug!(count, "processed stream records");
        }
    }

    Ok(SUCCESS)
}

fn open_input(input: &Input) -> CliResult<Box<dyn Read>> {
    match input {
        Input::Stdin => Ok(Box::new(io::stdin().lock())),
        Input::File(path) => {
            let file = File::open(path)
                .map_err(|err| io_error(&format!("failed opening {}", path.display()), err))?;
            Ok(Box::new(file))
        }
    }
}

/// Transcode every record of `stream` into `writer`, one at a time.
///
/// Returns the number of records written.
fn process_stream<R: Read, W: Write>(
    stream: R,
    writer: &mut RecordWriter<W>,
    terminator: Terminator,
) -> CliResult<usize> {
    let mut reader = RecordReader::new(stream, terminator);
    let mut count = 0usize;
    while let Some(record) = reader
        .read_record()
        .map_err(|err| record_error("read failed", err))?
    {
        if !record.terminated {
            tracing::warn!("terminator missing on last input entry");
        }
        writer
            .write_record(&record.payload)
            .map_err(|err| record_error("write failed", err))?;
        count += 1;
    }
    Ok(count)
}
