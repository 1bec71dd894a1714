//! Batch orchestration: record lines in, result lines out.
//!
//! The pipeline mirrors a reader, processor, writer job: the lawn is
//! parsed once from the first line, each following record line is
//! simulated independently against those bounds, and one result line is
//! written per record, in input order.

use crate::error::{Error, Result};
use crate::interpreter::MowerSimulator;
use crate::lawn::Lawn;
use crate::record::{MowerRecord, MowerResult};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// What to do with a record line that fails to parse.
///
/// The simulation core never sees malformed records; this is purely a
/// pipeline policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedRecordPolicy {
    /// Fail the whole run on the first bad record.
    #[default]
    Abort,
    /// Log the bad record and keep going.
    Skip,
}

/// Counts reported after a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records simulated and written.
    pub simulated: usize,
    /// Records dropped under [`MalformedRecordPolicy::Skip`].
    pub skipped: usize,
}

/// Batch pipeline driving a [`MowerSimulator`] over a record stream.
pub struct BatchPipeline {
    policy: MalformedRecordPolicy,
}

impl BatchPipeline {
    /// Creates a pipeline with the given malformed-record policy.
    pub fn new(policy: MalformedRecordPolicy) -> Self {
        Self { policy }
    }

    /// Runs the batch over `input`, writing one result line per record.
    ///
    /// The first line must hold the lawn bounds; a missing or
    /// unparsable first line fails the run before any mower is
    /// simulated. Every following non-blank line is one mower record.
    /// Records are independent, and output order matches input order.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<RunSummary> {
        let mut lines = input.lines();
        let first = lines
            .next()
            .transpose()?
            .ok_or_else(|| Error::MalformedLawnSpec("input is empty".to_string()))?;
        let lawn = Lawn::parse(&first)?;
        debug!("lawn bounds: {} x {}", lawn.width(), lawn.height());

        let simulator = MowerSimulator::new(lawn);
        let mut summary = RunSummary::default();

        // Record lines are numbered from 2; line 1 holds the lawn bounds.
        for (index, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let record = match MowerRecord::parse(&line) {
                Ok(record) => record,
                Err(err) => match self.policy {
                    MalformedRecordPolicy::Abort => return Err(err),
                    MalformedRecordPolicy::Skip => {
                        warn!("skipping line {}: {err}", index + 2);
                        summary.skipped += 1;
                        continue;
                    }
                },
            };

            let result =
                MowerResult::from(simulator.run(record.initial_state(), &record.commands));
            debug!("line {}: {record:?} ended at {result}", index + 2);
            writeln!(output, "{result}")?;
            summary.simulated += 1;
        }

        output.flush()?;
        Ok(summary)
    }

    /// Runs the batch from an input file to an output file, buffered
    /// both ways.
    pub fn run_file(&self, input: &Path, output: &Path) -> Result<RunSummary> {
        let reader = BufReader::new(File::open(input)?);
        let writer = BufWriter::new(File::create(output)?);
        self.run(reader, writer)
    }
}
