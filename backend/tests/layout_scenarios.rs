mod support;

use commit_sky::layout::{
    arc_x_offset, grid_arcs_for_days, grid_lines, layout_forward, layout_inverse, segment_by_year,
    validate_records, year_labels, ArcLayout, LayoutConfig, LayoutInputError,
};
use commit_sky::models::Position3D;
use commit_sky::services::{build_heatmap, compute_sky_layout};

use support::{day, days_from, full_year, history};

const EPS: f64 = 1e-9;

#[test]
fn test_empty_history_everywhere() {
    let config = LayoutConfig::default();

    assert!(segment_by_year(&[]).is_empty());
    assert!(layout_forward(&[], &config).is_empty());
    for point in [
        Position3D::ORIGIN,
        Position3D::new(-180.0, 5.0, -500.0),
        Position3D::new(1e6, -1e6, 3.0),
    ] {
        assert!(layout_inverse(point, &[], &[], &config).is_none());
    }
    assert!(year_labels(&[], &config).is_empty());
}

#[test]
fn test_first_sunday_of_2023_anchor() {
    let records = vec![day("2023-01-01", 3), day("2023-01-02", 0)];
    let anchors = layout_forward(&records, &LayoutConfig::default());

    assert_eq!(anchors.len(), 1);
    assert!(!anchors.contains_key(&1));
    let anchor = anchors[&0];
    assert!((anchor.x + 180.0).abs() < EPS);
    assert!((anchor.y - 5.0).abs() < EPS);
    assert!((anchor.z + 500.0).abs() < EPS);
}

#[test]
fn test_single_year_is_centred() {
    let records = full_year(2023, &[1]);
    let config = LayoutConfig::default();
    assert_eq!(segment_by_year(&records).len(), 1);
    assert_eq!(arc_x_offset(0, 1, &config), 0.0);

    // Every Wednesday sits exactly on x = 0
    for (index, anchor) in layout_forward(&records, &config) {
        if records[index].weekday == 3 {
            assert_eq!(anchor.x, 0.0);
        }
    }
}

#[test]
fn test_two_years_are_one_arc_spacing_apart() {
    let mut records = full_year(2020, &[1]);
    records.extend(full_year(2021, &[1]));
    assert_eq!(records.len(), 366 + 365);

    let config = LayoutConfig::default();
    let segments = segment_by_year(&records);
    assert_eq!(segments.len(), 2);
    assert_eq!((segments[0].count, segments[1].count), (366, 365));

    let first = arc_x_offset(0, 2, &config);
    let second = arc_x_offset(1, 2, &config);
    assert!((config.arc_spacing() - 504.0).abs() < EPS);
    assert!((second - first - 504.0).abs() < EPS);

    // Half a spacing either side of the pair's midpoint
    let midpoint = (first + second) / 2.0;
    assert!((first - midpoint + 252.0).abs() < EPS);
    assert!((second - midpoint - 252.0).abs() < EPS);
}

#[test]
fn test_five_year_history_round_trip_and_labels() {
    let records = history(2024, 5);
    let config = LayoutConfig::default();
    let segments = segment_by_year(&records);
    assert_eq!(segments.iter().map(|s| s.year).collect::<Vec<_>>(), vec![2020, 2021, 2022, 2023, 2024]);

    let layout = ArcLayout::new(&records, &segments, &config);
    for (index, anchor) in layout.anchors() {
        assert_eq!(layout.locate(anchor), Some(index));
    }

    let labels = year_labels(&records, &config);
    for (arc_index, label) in labels.iter().enumerate() {
        assert!((label.position.x - arc_x_offset(arc_index, 5, &config)).abs() < EPS);
        assert!((label.position.z + config.arc_radius()).abs() < EPS);
    }
}

#[test]
fn test_apex_of_year_is_mid_year() {
    let records = days_from("2023-01-01", &[1; 365]);
    let config = LayoutConfig::default();
    let segments = segment_by_year(&records);

    let apex = Position3D::new(0.0, config.arc_base_height + config.arc_radius(), 0.0);
    let (index, record) = layout_inverse(apex, &records, &segments, &config).unwrap();
    assert_eq!(index, 182);
    assert_eq!(record.date.to_string(), "2023-07-02");
}

#[test]
fn test_unsorted_input_is_laid_out_and_reported() {
    let records = vec![day("2023-05-01", 1), day("2022-05-01", 2), day("2024-01-01", 3)];
    let config = LayoutConfig::default();

    assert!(matches!(
        validate_records(&records),
        Err(LayoutInputError::NonMonotonic { index: 1, .. })
    ));
    let segments = segment_by_year(&records);
    assert_eq!(segments.len(), 2);
    assert_eq!(layout_forward(&records, &config).len(), 3);

    let sky = compute_sky_layout(&records, &segments, &config);
    assert!(sky.input_warning.is_some());
}

#[test]
fn test_custom_geometry() {
    let config = LayoutConfig {
        day_spread: 10.0,
        arc_base_height: 0.0,
        year_arc_spacing_factor: 2.0,
        ..LayoutConfig::default()
    };
    let records = vec![day("2023-01-07", 1), day("2024-01-01", 1)];
    let anchors = layout_forward(&records, &config);

    // Saturday on the first of two arcs
    assert!((anchors[&0].x - (3.0 * 10.0 - 140.0)).abs() < EPS);
    assert!(anchors[&0].y.abs() < EPS);
    // Monday, single-day segment on the centre arc
    assert!((anchors[&1].x + 20.0).abs() < EPS);
}

#[test]
fn test_grid_covers_history() {
    let records = history(2024, 2);
    let config = LayoutConfig::default();
    let arcs = grid_arcs_for_days(records.len());
    assert_eq!(arcs, 2);
    assert_eq!(grid_lines(arcs, 7, &config).len(), 2 * grid_lines(1, 7, &config).len());
}

#[test]
fn test_heatmap_for_fetched_shape() {
    // 2023-01-03 was a Tuesday
    let heatmap = build_heatmap(&days_from("2023-01-03", &[0, 2, 5, 10, 11]));

    assert_eq!(heatmap.leading_blanks, 2);
    assert_eq!(heatmap.total_contributions, 28);
    assert_eq!(heatmap.max_count, 11);
    assert_eq!(heatmap.cells.iter().map(|c| c.level).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    assert_eq!(heatmap.cells[1].title, "2023-01-04: 2 contributions");
}
