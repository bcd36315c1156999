use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{PitwallError, analysis::AccelerationSample};

pub fn write_accelerations(
    file: &Path,
    samples: &[AccelerationSample],
) -> Result<(), PitwallError> {
    let output_file = File::create(file).map_err(|e| PitwallError::WriterError { source: e })?;
    let mut output_writer = BufWriter::new(output_file);
    for sample in samples {
        serde_json::to_writer(&mut output_writer, sample)
            .map_err(|e| PitwallError::WriterError { source: e.into() })?;
        writeln!(output_writer).map_err(|e| PitwallError::WriterError { source: e })?;
    }
    output_writer
        .flush()
        .map_err(|e| PitwallError::WriterError { source: e })?;
    Ok(())
}
