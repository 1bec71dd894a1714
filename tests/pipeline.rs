// tests/pipeline.rs
use mowitnow::{BatchPipeline, Error, MalformedRecordPolicy, Result, RunSummary};
use std::io::Cursor;

fn run_in_memory(policy: MalformedRecordPolicy, input: &str) -> (Result<RunSummary>, String) {
    let mut output = Vec::new();
    let summary = BatchPipeline::new(policy).run(Cursor::new(input), &mut output);
    (summary, String::from_utf8(output).unwrap())
}

#[test]
fn canonical_batch_run() {
    let input = "5 5\n1 2 N GAGAGAGAA\n3 3 E AADAADADDA\n";
    let (summary, output) = run_in_memory(MalformedRecordPolicy::Abort, input);

    assert_eq!(
        summary.unwrap(),
        RunSummary {
            simulated: 2,
            skipped: 0
        }
    );
    assert_eq!(output, "1 3 N\n5 1 E\n");
}

#[test]
fn output_preserves_input_order() {
    // Turn-only mowers keep their coordinates, so the output rows spell
    // out the input order.
    let input = "9 9\n0 1 N G\n0 2 N D\n0 3 N GG\n0 4 N DDDD\n";
    let (summary, output) = run_in_memory(MalformedRecordPolicy::Abort, input);

    assert_eq!(summary.unwrap().simulated, 4);
    assert_eq!(output, "0 1 W\n0 2 E\n0 3 S\n0 4 N\n");
}

#[test]
fn record_without_instructions_is_echoed_back() {
    let (summary, output) = run_in_memory(MalformedRecordPolicy::Abort, "5 5\n1 2 N\n");

    assert_eq!(summary.unwrap().simulated, 1);
    assert_eq!(output, "1 2 N\n");
}

#[test]
fn blank_lines_between_records_are_ignored() {
    let (summary, output) = run_in_memory(MalformedRecordPolicy::Abort, "5 5\n\n1 2 N A\n\n");

    assert_eq!(
        summary.unwrap(),
        RunSummary {
            simulated: 1,
            skipped: 0
        }
    );
    assert_eq!(output, "1 3 N\n");
}

#[test]
fn empty_input_fails_as_malformed_lawn() {
    let (summary, output) = run_in_memory(MalformedRecordPolicy::Abort, "");

    assert!(matches!(summary, Err(Error::MalformedLawnSpec(_))));
    assert!(output.is_empty());
}

#[test]
fn non_numeric_lawn_line_fails_the_run() {
    let (summary, output) = run_in_memory(MalformedRecordPolicy::Abort, "5 five\n1 2 N A\n");

    assert!(matches!(summary, Err(Error::MalformedLawnSpec(_))));
    assert!(output.is_empty());
}

#[test]
fn malformed_record_aborts_the_run_by_default() {
    let input = "5 5\n1 2 N A\nbogus record\n3 3 E A\n";
    let (summary, output) = run_in_memory(MalformedRecordPolicy::Abort, input);

    assert!(matches!(summary, Err(Error::MalformedMowerRecord(_))));
    // The record before the bad one was already written.
    assert_eq!(output, "1 3 N\n");
}

#[test]
fn malformed_record_is_dropped_under_skip_policy() {
    let input = "5 5\n1 2 N A\nbogus record\n3 3 E A\n";
    let (summary, output) = run_in_memory(MalformedRecordPolicy::Skip, input);

    assert_eq!(
        summary.unwrap(),
        RunSummary {
            simulated: 2,
            skipped: 1
        }
    );
    assert_eq!(output, "1 3 N\n4 3 E\n");
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("mowers.txt");
    let output_path = dir.path().join("mowers.out");
    std::fs::write(&input_path, "5 5\n1 2 N GAGAGAGAA\n3 3 E AADAADADDA\n").unwrap();

    let summary = BatchPipeline::new(MalformedRecordPolicy::Abort)
        .run_file(&input_path, &output_path)
        .unwrap();

    assert_eq!(summary.simulated, 2);
    assert_eq!(
        std::fs::read_to_string(&output_path).unwrap(),
        "1 3 N\n5 1 E\n"
    );
}
