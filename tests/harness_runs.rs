use std::time::Duration;

use bibsort::{BenchConfig, BenchRunner, BibRecord, GeneralAlgorithm, NumericAlgorithm, read_bib};

fn record(title: &str, author: &str, year: &str, journal: &str) -> BibRecord {
    BibRecord::from_iter([
        ("title", title),
        ("author", author),
        ("year", year),
        ("journal", journal),
    ])
}

fn library() -> Vec<BibRecord> {
    vec![
        record(
            "Sorting networks and their applications",
            "Batcher, Kenneth E.",
            "1968",
            "AFIPS",
        ),
        record(
            "The art of computer programming",
            "Knuth, Donald E.",
            "1998",
            "Addison-Wesley",
        ),
        record(
            "An algorithm for the organization of information",
            "Adelson-Velsky, Georgy and Landis, Evgenii",
            "1962",
            "Doklady",
        ),
    ]
}

#[test]
fn default_run_fills_every_catalogue_cell() {
    let runner = BenchRunner::default();
    let results = runner.run(&library());

    // 4 numeric-only cells plus 8 comparison sorts over 4 fields.
    assert_eq!(results.len(), 36);
    for algorithm in NumericAlgorithm::ALL {
        let run = results.run(algorithm.label(), "year").expect("numeric cell");
        assert_eq!(run.items, 3);
    }
    for algorithm in GeneralAlgorithm::ALL {
        for field in ["title", "author", "year", "journal"] {
            let run = results.run(algorithm.label(), field).expect("general cell");
            assert_eq!(run.items, 3, "{} over {field}", algorithm.label());
        }
    }
}

#[test]
fn malformed_years_are_dropped_before_the_numeric_catalogue() {
    let mut records = library();
    records[1].insert("year", "19x8");

    let results = BenchRunner::default().run(&records);

    // Two usable years remain out of three records.
    for algorithm in NumericAlgorithm::ALL {
        let run = results.run(algorithm.label(), "year").expect("numeric cell");
        assert_eq!(run.items, 2, "{}", algorithm.label());
    }
    // The raw year column now mixes parseable and unparseable values, so the
    // comparison catalogue skips it; the other fields are unaffected.
    assert!(results.run(GeneralAlgorithm::Comb.label(), "year").is_none());
    assert!(results.run(GeneralAlgorithm::Comb.label(), "title").is_some());
    assert_eq!(results.len(), 4 + 8 * 3);
}

#[test]
fn numeric_catalogue_is_skipped_when_no_year_survives_cleaning() {
    let mut records = library();
    for entry in &mut records {
        entry.insert("year", "unknown");
    }

    let results = BenchRunner::default().run(&records);

    for algorithm in NumericAlgorithm::ALL {
        assert!(results.run(algorithm.label(), "year").is_none(), "{}", algorithm.label());
    }
    // The comparison catalogue still covers every field, year included:
    // "unknown" is text, so the column stays homogeneous.
    assert_eq!(results.len(), 32);
}

#[test]
fn mixed_type_fields_are_skipped_for_every_comparison_spec() {
    let mut records = library();
    records[0].insert("journal", "42");

    let results = BenchRunner::default().run(&records);

    for algorithm in GeneralAlgorithm::ALL {
        assert!(
            results.run(algorithm.label(), "journal").is_none(),
            "{} must skip the mixed journal column",
            algorithm.label()
        );
        assert!(results.run(algorithm.label(), "title").is_some());
    }
    assert_eq!(results.len(), 4 + 8 * 3);
}

#[test]
fn restricted_field_list_narrows_the_comparison_catalogue() {
    let mut config = BenchConfig::default();
    config.general_fields = vec!["title".to_string()];

    let results = BenchRunner::new(config).run(&library());

    assert_eq!(results.len(), 4 + 8);
    for algorithm in GeneralAlgorithm::ALL {
        assert!(results.run(algorithm.label(), "title").is_some());
        assert!(results.run(algorithm.label(), "author").is_none());
    }
}

#[test]
fn empty_library_produces_an_empty_result_table() {
    let results = BenchRunner::default().run(&[]);
    assert!(results.is_empty());
    assert!(results.ranking().is_empty());
    assert!(results.summary().is_none());
}

#[test]
fn durations_are_recorded_for_every_cell() {
    let results = BenchRunner::default().run(&library());
    for (algorithm, field, run) in results.iter() {
        assert!(
            run.duration < Duration::from_secs(5),
            "{algorithm} over {field} took implausibly long"
        );
    }
}

#[test]
fn parsed_bibtex_feeds_the_harness_end_to_end() {
    let source = br#"
@article{batcher1968,
  title = {Sorting networks and their applications},
  author = {Batcher, Kenneth E.},
  year = {1968},
  journal = {AFIPS}
}
@article{knuth1998,
  title = {The art of computer programming},
  author = {Knuth, Donald E.},
  year = {1998},
  journal = {Addison-Wesley}
}
"#;
    let records = read_bib(&source[..]).expect("well-formed source");
    assert_eq!(records.len(), 2);

    let results = BenchRunner::default().run(&records);
    assert_eq!(results.len(), 36);
    assert_eq!(results.run("Pigeonhole Sort", "year").expect("cell").items, 2);

    let report = results.to_report();
    let json = serde_json::to_string(&report).expect("report serializes");
    assert!(json.contains("Pigeonhole Sort"));
}
