use serde_json::json;
use stackbar::layout::{
    Axis, COLUMN_ORDER, ChartGeometry, ROW_ORDER, bars_track_template, compute_axis_ticks,
    nice_interval, outer_track_template, stack_track_template,
};
use stackbar::options::settings_for;
use stackbar::path::Tree;
use stackbar::surface::grid::parse_template;
use stackbar::{RawSeries, normalize};

#[test]
fn ticks_follow_the_measured_height() {
    let t = compute_axis_ticks(300.0, 5.0, 50.0).unwrap();
    assert_eq!(t.pixel_interval, 30.0);
    assert_eq!(t.tick_count, 11);
    assert_eq!(t.value_interval, 5.0);
}

#[test]
fn pixel_interval_is_rounded() {
    let t = compute_axis_ticks(100.0, 1.0, 3.0).unwrap();
    assert_eq!(t.pixel_interval, 33.0);
    assert_eq!(t.tick_count, 4);
}

#[test]
fn no_ticks_without_a_scale() {
    assert!(compute_axis_ticks(300.0, 5.0, 0.0).is_none());
    assert!(compute_axis_ticks(0.0, 5.0, 50.0).is_none());
    assert!(compute_axis_ticks(300.0, 0.0, 50.0).is_none());
    // Sub-pixel spacing.
    assert!(compute_axis_ticks(10.0, 1.0, 1000.0).is_none());
}

#[test]
fn nice_intervals() {
    assert_eq!(nice_interval(100.0), 10.0);
    assert_eq!(nice_interval(3.0), 0.5);
    assert_eq!(nice_interval(150.0), 20.0);
    assert_eq!(nice_interval(0.0), 0.0);
}

#[test]
fn bars_template_names_every_bar() {
    let t = bars_track_template(2, [0.5, 0.25, 1.0]);
    assert_eq!(
        t,
        "[gridlines-start] 0.5fr [bars-start] 1fr [bars-end] 0.25fr [bars-start] 1fr [bars-end] 1fr [gridlines-end]"
    );
    let parsed = parse_template(&t).unwrap();
    assert_eq!(parsed.sizes.len(), 5);
}

#[test]
fn bars_template_without_bars() {
    assert_eq!(
        bars_track_template(0, [0.5, 0.5, 0.5]),
        "[gridlines-start] 0.5fr 0.5fr [gridlines-end]"
    );
}

#[test]
fn stack_template_runs_top_down() {
    let t = stack_track_template(&[1.0, 2.0, 1.0], 4.0);
    assert_eq!(t, "[remainder] 25fr [segment-1] 50fr [segment-0] 25fr [baseline]");
}

#[test]
fn stack_template_with_zero_max() {
    let t = stack_track_template(&[0.0, 0.0], 0.0);
    assert_eq!(t, "[remainder] 0fr [segment-0] 0fr [baseline]");
}

#[test]
fn hidden_components_leave_no_track() {
    let data = normalize(&RawSeries::Single(vec![1.0]));
    let settings = settings_for(json!({ "title.draw": false }).as_object().unwrap()).unwrap();
    let rows = outer_track_template(&settings, &data, &ROW_ORDER, Axis::Rows);
    assert_eq!(rows, "[bars] 1fr [x-axis-labels] 30px [end]");
    let columns = outer_track_template(&settings, &data, &COLUMN_ORDER, Axis::Columns);
    assert_eq!(columns, "[y-axis-title] 30px [y-axis-labels] 50px [bars] 1fr [end]");
}

#[test]
fn legend_track_only_for_stacked_input() {
    let settings = settings_for(&Tree::new()).unwrap();
    let stacked = normalize(&RawSeries::Multi(vec![vec![1.0, 2.0]]));
    let rows = outer_track_template(&settings, &stacked, &ROW_ORDER, Axis::Rows);
    assert!(rows.contains("[legend] 30px"));
}

#[test]
fn geometry_is_planned_then_measured() {
    let settings = settings_for(&Tree::new()).unwrap();
    let data = normalize(&RawSeries::Single(vec![10.0, 50.0]));
    let plan = ChartGeometry::plan(&settings, &data);
    assert!(plan.ticks.is_none());
    assert_eq!(plan.stacks.len(), 2);
    assert_eq!(plan.value_interval, 5.0);

    let measured = plan.with_measured_height(300.0);
    let ticks = measured.ticks.unwrap();
    assert_eq!((ticks.pixel_interval, ticks.tick_count), (30.0, 11));
}

#[test]
fn configured_interval_wins() {
    let settings = settings_for(json!({ "gridlines.interval": 25 }).as_object().unwrap()).unwrap();
    let data = normalize(&RawSeries::Single(vec![100.0]));
    assert_eq!(ChartGeometry::plan(&settings, &data).value_interval, 25.0);
}
