use std::collections::HashMap;
use wca_ranks_engine::{build_ranks, write_ranks, Metric, YearRange};
use wca_ranks_testing::ExportFixture;

fn busy_export() -> ExportFixture {
    let mut export = ExportFixture::with_world();
    export
        .competition("Open2012", 2012)
        .competition("Open2014", 2014)
        .competition("Open2016", 2016)
        .competition("Open2018", 2018);

    let people = [
        ("p01", "USA"),
        ("p02", "USA"),
        ("p03", "Canada"),
        ("p04", "France"),
        ("p05", "France"),
        ("p06", "Germany"),
        ("p07", "Japan"),
        ("p08", "Japan"),
    ];
    let competitions = ["Open2012", "Open2014", "Open2016", "Open2018"];
    let events = ["333", "222", "444"];

    for (i, (person, country)) in people.iter().enumerate() {
        for (j, competition) in competitions.iter().enumerate() {
            for (k, event) in events.iter().enumerate() {
                // Deterministic spread with repeats, so ties occur
                let average = ((i * 7 + j * 13 + k * 5) % 11) as i64 * 100 - 100;
                let best = ((i * 3 + j * 5 + k * 11) % 9) as i64 * 50;
                export.result(competition, person, country, event, average, best);
            }
        }
    }
    export
}

#[test]
fn test_one_row_per_person_and_event_with_minimum() {
    let export = busy_export();
    let source = export.write();
    let range = YearRange::since(2014);

    for metric in Metric::ALL {
        let ranks = build_ranks(&source, metric, range).unwrap();

        let mut expected: HashMap<(String, String), i64> = HashMap::new();
        for competition_year in [2014, 2016, 2018] {
            let competition = format!("Open{competition_year}");
            for row in source.results().unwrap() {
                let value = metric.value(&row);
                if row.competition_id == competition && value > 0 {
                    let entry = expected
                        .entry((row.person_id.clone(), row.event_id.clone()))
                        .or_insert(value);
                    *entry = (*entry).min(value);
                }
            }
        }

        assert_eq!(ranks.len(), expected.len());
        for row in &ranks {
            assert!(row.best > 0);
            let key = (row.person_id.clone(), row.event_id.clone());
            assert_eq!(expected.get(&key), Some(&row.best), "{key:?}");
        }
    }
}

#[test]
fn test_output_sorted_and_scopes_nested() {
    let export = busy_export();
    let source = export.write();

    let ranks = build_ranks(&source, Metric::Average, YearRange::all()).unwrap();
    for pair in ranks.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!((a.event_id.as_str(), a.best) <= (b.event_id.as_str(), b.best));
    }

    // Continents group whole countries, so each narrower scope ranks a subset
    let mut rows_by_event: HashMap<&str, u32> = HashMap::new();
    for row in &ranks {
        *rows_by_event.entry(row.event_id.as_str()).or_default() += 1;
    }
    for row in &ranks {
        assert!(row.world_rank >= 1 && row.world_rank <= rows_by_event[row.event_id.as_str()]);
        assert!(row.continent_rank >= 1 && row.continent_rank <= row.world_rank);
        assert!(row.country_rank >= 1 && row.country_rank <= row.continent_rank);
    }
}

#[test]
fn test_widening_year_range_never_removes_rows() {
    let export = busy_export();
    let source = export.write();

    let narrow = YearRange::new(Some(2016), Some(2016));
    let wider = YearRange::since(2016);
    let widest = YearRange::all();

    for metric in Metric::ALL {
        let keys = |range| -> Vec<(String, String)> {
            let mut keys: Vec<_> = build_ranks(&source, metric, range)
                .unwrap()
                .into_iter()
                .map(|r| (r.person_id, r.event_id))
                .collect();
            keys.sort();
            keys
        };

        let narrow_keys = keys(narrow);
        let wider_keys = keys(wider);
        let widest_keys = keys(widest);

        assert!(narrow_keys.iter().all(|k| wider_keys.contains(k)));
        assert!(wider_keys.iter().all(|k| widest_keys.contains(k)));
    }
}

#[test]
fn test_rerun_produces_identical_bytes() {
    let export = busy_export();
    let source = export.write();
    let output_dir = export.output_dir();

    let first = write_ranks(&source, &output_dir, Metric::Single, YearRange::since(2014)).unwrap();
    let first_bytes = std::fs::read(&first.path).unwrap();

    let second = write_ranks(&source, &output_dir, Metric::Single, YearRange::since(2014)).unwrap();
    let second_bytes = std::fs::read(&second.path).unwrap();

    assert_eq!(first.path, second.path);
    assert_eq!(first_bytes, second_bytes);
}
