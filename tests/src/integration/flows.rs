//! # Integration Test Flows
//!
//! End-to-end runs through the public API of `bloom-filters`:
//!
//! 1. **Generator → file → Dispatcher**: every query for an inserted token answers `Y`
//! 2. **Observed false positive rate**: a filter loaded to capacity stays near its target
//! 3. **Stream termination**: sentinel, missing file; blank and undecodable lines are skipped

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs::File;
    use std::io::{BufWriter, Cursor};
    use std::sync::Arc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use bloom_filters::{
        parse_line, BatchFileSource, BatchSource, BloomFilter, Dispatcher, InteractiveSource,
        Line, Metrics, Operation, OperationGenerator, StopReason,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Distinct alphabetic token for `index`, prefixed so that separate
    /// families never collide
    fn token(prefix: &str, mut index: usize) -> String {
        let mut out = String::from(prefix);
        loop {
            out.push((b'a' + (index % 26) as u8) as char);
            index /= 26;
            if index == 0 {
                break;
            }
        }
        out
    }

    fn run_batch_text(filter: BloomFilter, text: &str) -> (String, bloom_filters::RunSummary) {
        let mut dispatcher = Dispatcher::new(filter, Vec::new());
        let mut source = BatchSource::from_reader(Cursor::new(text.to_string()));
        let summary = dispatcher.run(&mut source).unwrap();
        let (_, out) = dispatcher.into_parts();
        (String::from_utf8(out).unwrap(), summary)
    }

    fn default_filter() -> BloomFilter {
        BloomFilter::new(1_000_000, 0.01).unwrap()
    }

    // =============================================================================
    // GENERATOR → FILE → DISPATCHER
    // =============================================================================

    #[test]
    fn test_generated_stream_has_no_false_negatives() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ops.txt");

        let mut writer = BufWriter::new(File::create(&path).unwrap());
        let stats = OperationGenerator::new(StdRng::seed_from_u64(2024))
            .generate(5_000, &mut writer)
            .unwrap();
        drop(writer);

        let metrics = Arc::new(Metrics::new());
        let mut source = BatchFileSource::open(&path).unwrap();
        let mut dispatcher =
            Dispatcher::new(default_filter(), Vec::new()).with_metrics(metrics.clone());
        let summary = dispatcher.run(&mut source).unwrap();
        let (_, out) = dispatcher.into_parts();

        assert_eq!(summary.stop_reason, StopReason::Sentinel);
        assert_eq!(summary.rejected, 0);
        assert_eq!(summary.inserts as usize, stats.inserts);
        assert_eq!(summary.queries as usize, stats.queries);

        // Replay the file to pair every query with its answer
        let text = std::fs::read_to_string(&path).unwrap();
        let answers: Vec<&str> = std::str::from_utf8(&out).unwrap().lines().collect();
        assert_eq!(answers.len(), stats.queries);

        let mut inserted = HashSet::new();
        let mut answer_index = 0;
        let mut expected_positives = 0;
        for line in text.lines() {
            match parse_line(line).unwrap() {
                Line::Operation(Operation::Insert(token)) => {
                    inserted.insert(token);
                }
                Line::Operation(Operation::Query(token)) => {
                    if inserted.contains(&token) {
                        expected_positives += 1;
                        assert_eq!(answers[answer_index], "Y", "False negative for {}", token);
                    }
                    answer_index += 1;
                }
                Line::Sentinel => break,
            }
        }
        assert!(expected_positives >= stats.existing_queries);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.elements_inserted as usize, stats.inserts);
        assert_eq!(snapshot.lookups_performed as usize, stats.queries);
        assert!(snapshot.lookups_positive as usize >= expected_positives);
    }

    // =============================================================================
    // OBSERVED FALSE POSITIVE RATE
    // =============================================================================

    #[test]
    fn test_false_positive_rate_near_target_at_capacity() {
        let capacity = 10_000;
        let target = 0.01;
        let mut filter = BloomFilter::new(capacity, target).unwrap();

        for i in 0..capacity {
            filter.insert(&token("in", i));
        }

        let probes = 10_000;
        let false_positives = (0..probes)
            .filter(|&i| filter.contains(&token("out", i)))
            .count();
        let observed = false_positives as f64 / probes as f64;

        assert!(
            observed < target * 3.0,
            "Observed FPR {} too far above target {}",
            observed,
            target
        );
        assert!(
            observed > target / 3.0,
            "Observed FPR {} too far below target {}",
            observed,
            target
        );
        assert!(filter.estimated_false_positive_rate() < target * 1.5);
    }

    #[test]
    fn test_overfilled_filter_keeps_no_false_negatives() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        let tokens: Vec<String> = (0..1_000).map(|i| token("over", i)).collect();
        for t in &tokens {
            filter.insert(t);
        }

        assert!(filter.is_over_capacity());
        assert!(tokens.iter().all(|t| filter.contains(t)));
    }

    // =============================================================================
    // STREAM TERMINATION AND MALFORMED INPUT
    // =============================================================================

    #[test]
    fn test_sentinel_stops_processing() {
        let (out, summary) = run_batch_text(default_filter(), "+ cat\n? cat\n#\n? dog\n+ dog\n");

        assert_eq!(out, "Y\n");
        assert_eq!(summary.stop_reason, StopReason::Sentinel);
        assert_eq!(summary.inserts, 1);
        assert_eq!(summary.queries, 1);
    }

    #[test]
    fn test_batch_skips_malformed_lines_silently() {
        let text = "+ cat\n+ 123\n? cat\n+ thistokeniswaytoolong\n* cat\n?cat\n? dog\n#\n";
        let (out, summary) = run_batch_text(default_filter(), text);

        assert_eq!(out, "Y\nN\n");
        assert_eq!(summary.rejected, 4);
        assert_eq!(summary.positives, 1);
    }

    #[test]
    fn test_batch_blank_line_is_skipped() {
        let (out, summary) = run_batch_text(default_filter(), "+ cat\n\n? cat\n#\n");

        assert_eq!(out, "Y\n");
        assert_eq!(summary.stop_reason, StopReason::Sentinel);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.inserts, 1);
    }

    #[test]
    fn test_batch_file_with_undecodable_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ops.txt");
        std::fs::write(&path, b"+ cat\n+ \xff\xfe\n? cat\n? \xc3\n#\n").unwrap();

        let mut source = BatchFileSource::open(&path).unwrap();
        let mut dispatcher = Dispatcher::new(default_filter(), Vec::new());
        let summary = dispatcher.run(&mut source).unwrap();
        let (_, out) = dispatcher.into_parts();

        assert_eq!(out, b"Y\n");
        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.stop_reason, StopReason::Sentinel);
    }

    #[test]
    fn test_interactive_reports_malformed_lines() {
        let mut dispatcher = Dispatcher::new(default_filter(), Vec::new());
        let mut source = InteractiveSource::new(Cursor::new("+ cat\n\n+ 123\n? cat\n#\n"));

        let summary = dispatcher.run(&mut source).unwrap();
        let (_, out) = dispatcher.into_parts();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.stop_reason, StopReason::Sentinel);
        assert_eq!(out.matches("Invalid format.").count(), 1, "Blank line is too short");
        assert_eq!(out.matches("Invalid input.").count(), 1);
        assert!(out.ends_with("Y\n"));
    }

    #[test]
    fn test_missing_file_is_an_empty_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let mut out = Vec::new();

        let mut source = BatchFileSource::open_or_empty(&path, &mut out).unwrap();
        let summary = {
            let mut dispatcher = Dispatcher::new(default_filter(), &mut out);
            dispatcher.run(&mut source).unwrap()
        };

        assert_eq!(summary.inserts + summary.queries, 0);
        assert_eq!(summary.stop_reason, StopReason::EndOfInput);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("Error: File {} not found\n", path.display()));
    }
}
