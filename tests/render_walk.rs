use serde_json::{Value, json};
use stackbar::path::Tree;
use stackbar::{Error, NodeId, RawSeries, Scene, Surface, render_bar_chart};

fn opts(v: Value) -> Tree {
    v.as_object().cloned().unwrap()
}

fn draw(data: RawSeries, options: Value) -> (Scene, NodeId) {
    let mut scene = Scene::new(600.0, 400.0);
    let root = scene.root();
    let chart = render_bar_chart(&data, &opts(options), &mut scene, root).unwrap();
    (scene, chart)
}

fn texts(scene: &Scene, class: &str) -> Vec<String> {
    scene
        .find_by_class(class)
        .into_iter()
        .filter_map(|id| scene.node(id).and_then(|n| n.text.clone()))
        .collect()
}

fn rule<'a>(scene: &'a Scene, selector: &str, property: &str) -> Option<&'a str> {
    scene
        .rules()
        .iter()
        .find(|(s, _)| s == selector)
        .and_then(|(_, style)| style.get(property))
        .map(String::as_str)
}

#[test]
fn single_series_chart() {
    let (scene, chart) = draw(
        RawSeries::Single(vec![1.0, 2.0, 3.0]),
        json!({ "yAxisLabels.precision": 1 }),
    );
    assert_eq!(scene.parent(chart), Some(scene.root()));
    assert_eq!(scene.find_by_class("bar").len(), 3);
    assert_eq!(texts(&scene, "title"), vec!["Bar Chart"]);
    assert_eq!(texts(&scene, "x-axis-label"), vec!["1", "2", "3"]);
    assert_eq!(texts(&scene, "value"), vec!["1", "2", "3"]);
    assert!(scene.find_by_class("legend").is_empty());

    // Plot is 330px tall, auto interval 0.5 => 55px per tick.
    assert_eq!(
        texts(&scene, "y-axis-label"),
        vec!["0.0", "0.5", "1.0", "1.5", "2.0", "2.5", "3.0"]
    );
    let gridlines = scene.find_by_class("gridlines");
    assert_eq!(gridlines.len(), 1);
    let layer = scene.node(gridlines[0]).unwrap();
    assert_eq!(layer.attrs.get("data-interval").map(String::as_str), Some("55"));
    assert_eq!(layer.attrs.get("data-count").map(String::as_str), Some("7"));
}

#[test]
fn bars_are_laid_out_on_the_plot_grid() {
    let (scene, _) = draw(RawSeries::Single(vec![1.0, 2.0, 3.0]), json!({}));
    let bars = scene.find_by_class("bar");
    // 520px wide plot, 5fr of columns => 104px per fr.
    let first = scene.rect(bars[0]).unwrap();
    assert_eq!((first.x, first.y, first.width, first.height), (132.0, 40.0, 104.0, 330.0));

    let segments: Vec<_> = scene
        .find_by_class("segment")
        .into_iter()
        .filter(|id| !scene.node(*id).unwrap().has_class("remainder"))
        .collect();
    let tallest = scene.measure(segments[2]).unwrap();
    assert!((tallest.height - 330.0).abs() < 1e-6);
    let shortest = scene.measure(segments[0]).unwrap();
    assert!((shortest.height - 110.0).abs() < 0.01);
}

#[test]
fn gridlines_paint_behind_bars() {
    let (scene, _) = draw(RawSeries::Single(vec![1.0]), json!({}));
    let grid = scene.find_by_class("gridlines")[0];
    let bar = scene.find_by_class("bar")[0];
    let z = |id| scene.computed_style(id).get("z-index").cloned();
    assert_eq!(z(grid).as_deref(), Some("0"));
    assert_eq!(z(bar).as_deref(), Some("1"));
}

#[test]
fn empty_data_has_no_ticks() {
    let (scene, chart) = draw(RawSeries::Single(vec![]), json!({}));
    assert!(scene.contains(chart));
    assert!(scene.find_by_class("bar").is_empty());
    assert!(scene.find_by_class("gridlines").is_empty());
    assert!(scene.find_by_class("y-axis-label").is_empty());
}

#[test]
fn all_zero_data_has_no_ticks_or_values() {
    let (scene, _) = draw(RawSeries::Multi(vec![vec![0.0, 0.0]]), json!({}));
    assert!(scene.find_by_class("gridlines").is_empty());
    assert!(scene.find_by_class("value").is_empty());
}

#[test]
fn colors_cycle_through_a_short_palette() {
    let palette = ["#111111", "#222222", "#333333", "#444444"];
    let (scene, _) = draw(
        RawSeries::Single(vec![1.0; 6]),
        json!({ "bars.colors": palette }),
    );
    let slots: Vec<Option<&str>> = (0..6)
        .map(|i| rule(&scene, &format!(".series-color-{i}"), "background-color"))
        .collect();
    assert_eq!(
        slots,
        vec![
            Some(palette[0]),
            Some(palette[1]),
            Some(palette[2]),
            Some(palette[3]),
            Some(palette[0]),
            Some(palette[1]),
        ]
    );
}

#[test]
fn stacked_colors_cycle_by_position_in_the_bar() {
    let palette = ["#111111", "#222222", "#333333", "#444444"];
    let (scene, _) = draw(
        RawSeries::Multi(vec![vec![1.0; 6]]),
        json!({ "bars.colors": palette }),
    );
    let colors: Vec<Option<String>> = scene
        .find_by_class("segment")
        .into_iter()
        .filter(|id| !scene.node(*id).unwrap().has_class("remainder"))
        .map(|id| scene.computed_style(id).get("background-color").cloned())
        .collect();
    let expected: Vec<Option<String>> = [0, 1, 2, 3, 0, 1]
        .iter()
        .map(|slot| Some(palette[*slot].to_string()))
        .collect();
    assert_eq!(colors, expected);
}

#[test]
fn stacked_segments_share_colors_by_position() {
    let (scene, _) = draw(RawSeries::Multi(vec![vec![1.0, 2.0], vec![3.0]]), json!({}));
    assert_eq!(scene.find_by_class("series-color-0").len(), 3); // two segments + swatch
    assert_eq!(scene.find_by_class("series-color-1").len(), 3);
    assert!(rule(&scene, ".series-color-2", "background-color").is_none());
}

#[test]
fn legend_only_for_stacked_input() {
    let (scene, _) = draw(
        RawSeries::Multi(vec![vec![1.0, 2.0, 3.0]]),
        json!({ "legend.text": ["North", "South"] }),
    );
    assert_eq!(scene.find_by_class("legend-item").len(), 3);
    assert_eq!(texts(&scene, "legend-label"), vec!["North", "South", "Series 3"]);
}

#[test]
fn short_and_zero_segments_get_no_value_label() {
    let (scene, _) = draw(RawSeries::Multi(vec![vec![100.0, 1.0, 0.0]]), json!({}));
    assert_eq!(texts(&scene, "value"), vec!["100"]);
}

#[test]
fn value_labels_follow_precision_and_locale() {
    let (scene, _) = draw(
        RawSeries::Single(vec![1234.5]),
        json!({ "values.precision": 1, "chart.locale": "de", "values.position": "bottom" }),
    );
    let labels = scene.find_by_class("value");
    assert_eq!(texts(&scene, "value"), vec!["1.234,5"]);
    assert!(scene.node(labels[0]).unwrap().has_class("align-bottom"));
}

#[test]
fn hidden_chart_mounts_an_empty_container() {
    let (scene, chart) = draw(RawSeries::Single(vec![1.0]), json!({ "chart.draw": false }));
    assert!(scene.children(chart).is_empty());
    assert_eq!(
        scene.computed_style(chart).get("display").map(String::as_str),
        Some("none")
    );
}

#[test]
fn hidden_axis_labels_fall_back_to_the_plot_height() {
    let (scene, _) = draw(
        RawSeries::Single(vec![10.0]),
        json!({ "yAxisLabels.draw": false }),
    );
    assert!(scene.find_by_class("y-axis-labels").is_empty());
    assert_eq!(scene.find_by_class("gridlines").len(), 1);
}

#[test]
fn unknown_mount_is_an_error() {
    let (big, _) = draw(RawSeries::Single(vec![1.0, 2.0]), json!({}));
    let foreign = big.ids().last().unwrap();

    let mut small = Scene::new(100.0, 100.0);
    let err = render_bar_chart(&RawSeries::Single(vec![1.0]), &Tree::new(), &mut small, foreign)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownNode(id) if id == foreign));
    assert_eq!(small.len(), 1);
}
