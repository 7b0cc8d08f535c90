use is_close::is_close;
use pacurve::chardata::read_char_data;
use pacurve::fit_char_file;
use pacurve::fitting::boundaries::adjust_max_values;
use pacurve::fitting::curve_fit::{
    par_power_curves, API_MAX_POWER, DEFAULT_INCREMENT, MAX_CURVE_SEGMENTS,
};
use pacurve::formats::curve_segments_string;
use std::path::Path;

const TEST_FILE: &str = "tests/test_files/SubgigPowerMapping.csv";

#[test]
fn loads_and_normalizes_the_subgig_sweep() {
    let data = read_char_data(Path::new(TEST_FILE)).expect("Test file not found");
    assert_eq!(data.power_levels.len(), data.output_powers.len());
    // the sweep tops out above the ceiling, so everything shifts down
    assert!(data.max_power > API_MAX_POWER);
    let top = data
        .output_powers
        .iter()
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    assert!(is_close!(top, API_MAX_POWER));
    assert!(data
        .output_powers
        .iter()
        .all(|p| *p <= API_MAX_POWER + 1e-9));
}

#[test]
fn fits_the_subgig_sweep_into_a_full_table() {
    let data = read_char_data(Path::new(TEST_FILE)).expect("Test file not found");
    let mut segments =
        par_power_curves(&data.power_levels, &data.output_powers, DEFAULT_INCREMENT)
            .expect("Could not fit curves");
    assert_eq!(segments.len(), MAX_CURVE_SEGMENTS);
    // the sweep covers every window, so no segment degrades to the sentinel
    assert!(segments.iter().all(|s| s.max_value > 0 && s.slope > 0));

    adjust_max_values(&mut segments);
    for pair in segments.windows(2) {
        assert!(pair[1].max_value <= pair[0].max_value);
    }
}

#[test]
fn rendered_table_round_trips_through_parsing() {
    let segments =
        fit_char_file(TEST_FILE, DEFAULT_INCREMENT).expect("Could not fit characterization file");
    let rendered = curve_segments_string(&segments);
    assert!(rendered.starts_with("{ {"));
    assert!(rendered.ends_with("} }"));

    let mut triples = vec![];
    for chunk in rendered.split('{') {
        let inner = match chunk.find('}') {
            Some(end) => chunk[..end].trim(),
            None => continue,
        };
        if inner.is_empty() {
            continue;
        }
        let values: Vec<i32> = inner
            .split(',')
            .map(|value| value.trim().parse().expect("Non-integer in rendered table"))
            .collect();
        triples.push(values);
    }
    assert_eq!(triples.len(), segments.len());
    for (triple, segment) in triples.iter().zip(segments.iter()) {
        assert_eq!(
            *triple,
            vec![segment.max_value, segment.slope, segment.intercept]
        );
    }
}
