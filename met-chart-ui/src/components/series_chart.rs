//! SVG chart component for one or more series.
//!
//! Scales are rebuilt from the data extent on every render; the component
//! re-renders only when its props change (props compare by value). An empty
//! series list renders an empty plot area rather than failing.

use dioxus::prelude::*;
use met_chart::path::{area_path, line_path, range_path};
use met_chart::scale::{AxisScale, BandScale, LinearScale, ScaleKind, TimeScale};
use met_chart::sort::sort_for_axis;
use met_core::series::Series;

/// Trace colors, assigned per series in order.
const COLORS: [&str; 6] = [
    "#1976D2", "#E64A19", "#388E3C", "#7B1FA2", "#F9A825", "#00838F",
];

const MARGIN_TOP: f64 = 16.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 28.0;
const MARGIN_LEFT: f64 = 44.0;

/// Props for SeriesChart
#[derive(Props, Clone, PartialEq)]
pub struct SeriesChartProps {
    /// Series to plot, one trace each
    pub series: Vec<Series>,
    /// Declared x-axis scale kind
    pub kind: ScaleKind,
    /// Category order for ordinal axes; empty falls back to order of
    /// first appearance in the data
    #[props(default)]
    pub domain: Vec<String>,
    #[props(default = 680)]
    pub width: u32,
    #[props(default = 360)]
    pub height: u32,
    /// Names of series drawn as filled areas instead of plain lines
    #[props(default)]
    pub area_series: Vec<String>,
    /// Draw the min/max uncertainty band behind each trace that has bounds
    #[props(default = false)]
    pub show_range: bool,
}

struct Trace {
    name: String,
    color: &'static str,
    line: String,
    area: Option<String>,
    range: Option<String>,
}

struct YTick {
    grid_y: f64,
    label_y: f64,
    label: String,
}

struct XTick {
    x: f64,
    label: String,
}

/// Renders series as inline SVG: axis ticks, optional uncertainty bands,
/// and one line or area trace per series.
#[component]
pub fn SeriesChart(props: SeriesChartProps) -> Element {
    let inner_w = f64::from(props.width) - MARGIN_LEFT - MARGIN_RIGHT;
    let inner_h = f64::from(props.height) - MARGIN_TOP - MARGIN_BOTTOM;

    // y scale over the padded value extent (bounds included)
    let (lo, hi) = Series::value_extent(&props.series).unwrap_or((0.0, 1.0));
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    let y = LinearScale::new((lo - pad, hi + pad), (inner_h, 0.0));

    let domain = if props.domain.is_empty() {
        collect_categories(&props.series)
    } else {
        props.domain.clone()
    };
    let x = build_x_axis(&props.series, props.kind, &domain, inner_w);

    let y_ticks: Vec<YTick> = y
        .ticks(5)
        .iter()
        .map(|v| {
            let grid_y = y.scale(*v);
            YTick {
                grid_y,
                label_y: grid_y + 4.0,
                label: fmt_tick(*v),
            }
        })
        .collect();
    let x_ticks: Vec<XTick> = x_tick_labels(&x, &domain)
        .into_iter()
        .map(|(px, label)| XTick { x: px, label })
        .collect();
    let tick_mark_y = inner_h + 4.0;
    let tick_label_y = inner_h + 16.0;
    let transform = format!("translate({},{})", MARGIN_LEFT, MARGIN_TOP);

    let traces: Vec<Trace> = props
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let points = sort_for_axis(&s.points, props.kind, &domain);
            let has_bounds = points.iter().any(|p| p.min.is_some() || p.max.is_some());
            Trace {
                name: s.name.clone(),
                color: COLORS[i % COLORS.len()],
                line: line_path(&points, &x, &y),
                area: props
                    .area_series
                    .iter()
                    .any(|n| *n == s.name)
                    .then(|| area_path(&points, &x, &y)),
                range: (props.show_range && has_bounds)
                    .then(|| range_path(&points, &x, &y)),
            }
        })
        .collect();

    rsx! {
        div {
            div {
                style: "display: flex; gap: 16px; font-size: 12px; margin-bottom: 4px;",
                for trace in traces.iter() {
                    span {
                        style: "color: {trace.color}; font-weight: bold;",
                        "{trace.name}"
                    }
                }
            }
            svg {
                width: "{props.width}",
                height: "{props.height}",
                view_box: "0 0 {props.width} {props.height}",
                g {
                    transform: "{transform}",

                    // y grid lines and labels
                    for tick in y_ticks.iter() {
                        line {
                            x1: "0", x2: "{inner_w}", y1: "{tick.grid_y}", y2: "{tick.grid_y}",
                            stroke: "#eeeeee",
                        }
                        text {
                            x: "-8", y: "{tick.label_y}",
                            text_anchor: "end", font_size: "10", fill: "#666",
                            "{tick.label}"
                        }
                    }

                    // x axis line, ticks and labels
                    line {
                        x1: "0", x2: "{inner_w}", y1: "{inner_h}", y2: "{inner_h}",
                        stroke: "#999999",
                    }
                    for tick in x_ticks.iter() {
                        line {
                            x1: "{tick.x}", x2: "{tick.x}",
                            y1: "{inner_h}", y2: "{tick_mark_y}",
                            stroke: "#999999",
                        }
                        text {
                            x: "{tick.x}", y: "{tick_label_y}",
                            text_anchor: "middle", font_size: "10", fill: "#666",
                            "{tick.label}"
                        }
                    }

                    // uncertainty bands behind, then areas, then lines
                    for trace in traces.iter() {
                        if let Some(range) = &trace.range {
                            path { d: "{range}", fill: "{trace.color}", opacity: "0.15" }
                        }
                    }
                    for trace in traces.iter() {
                        if let Some(area) = &trace.area {
                            path { d: "{area}", fill: "{trace.color}", opacity: "0.25" }
                        }
                    }
                    for trace in traces.iter() {
                        if !trace.line.is_empty() {
                            path {
                                d: "{trace.line}",
                                fill: "none",
                                stroke: "{trace.color}",
                                stroke_width: "1.5",
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Categories in order of first appearance across all series.
fn collect_categories(series: &[Series]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for s in series {
        for p in &s.points {
            if let Some(c) = p.name.as_category() {
                if !categories.iter().any(|existing| existing == c) {
                    categories.push(c.to_string());
                }
            }
        }
    }
    categories
}

fn build_x_axis(
    series: &[Series],
    kind: ScaleKind,
    domain: &[String],
    inner_w: f64,
) -> AxisScale {
    match kind {
        ScaleKind::Time => {
            let (t0, t1) = Series::time_extent(series).unwrap_or_else(|| {
                let epoch = chrono::DateTime::UNIX_EPOCH;
                (epoch, epoch + chrono::Duration::hours(1))
            });
            AxisScale::Time(TimeScale::new((t0, t1), (0.0, inner_w)))
        }
        ScaleKind::Ordinal => {
            AxisScale::Band(BandScale::new(domain.to_vec(), (0.0, inner_w)))
        }
        ScaleKind::Linear => {
            let mut extent: Option<(f64, f64)> = None;
            for s in series {
                for p in &s.points {
                    if let Some(v) = p.name.as_number() {
                        extent = Some(match extent {
                            Some((a, b)) => (a.min(v), b.max(v)),
                            None => (v, v),
                        });
                    }
                }
            }
            let (a, b) = extent.unwrap_or((0.0, 1.0));
            AxisScale::Linear(LinearScale::new((a, b), (0.0, inner_w)))
        }
    }
}

/// Tick pixel positions and labels for the x axis.
fn x_tick_labels(x: &AxisScale, domain: &[String]) -> Vec<(f64, String)> {
    match x {
        AxisScale::Time(scale) => scale
            .ticks(6)
            .iter()
            .map(|t| (scale.scale(*t), time_tick_label(*t)))
            .collect(),
        AxisScale::Band(scale) => domain
            .iter()
            .filter_map(|c| scale.center(c).map(|px| (px, c.clone())))
            .collect(),
        AxisScale::Linear(scale) => scale
            .ticks(6)
            .iter()
            .map(|v| (scale.scale(*v), fmt_tick(*v)))
            .collect(),
    }
}

/// Date at midnight, hour otherwise.
fn time_tick_label(t: chrono::DateTime<chrono::Utc>) -> String {
    use chrono::Timelike;
    if t.hour() == 0 && t.minute() == 0 {
        t.format("%d %b").to_string()
    } else {
        t.format("%Hh").to_string()
    }
}

fn fmt_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use met_core::series::{PointKey, SeriesPoint};

    #[test]
    fn test_collect_categories_first_appearance_order() {
        let series = vec![Series {
            name: "Precipitation".to_string(),
            points: vec![
                SeriesPoint::new(PointKey::Category("Feb".to_string()), 1.0),
                SeriesPoint::new(PointKey::Category("Jan".to_string()), 2.0),
                SeriesPoint::new(PointKey::Category("Feb".to_string()), 3.0),
            ],
        }];
        assert_eq!(collect_categories(&series), vec!["Feb", "Jan"]);
    }

    #[test]
    fn test_fmt_tick() {
        assert_eq!(fmt_tick(20.0), "20");
        assert_eq!(fmt_tick(0.5), "0.5");
        assert_eq!(fmt_tick(-3.0), "-3");
    }

    #[test]
    fn test_time_tick_label() {
        let midnight = chrono::Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap();
        assert_eq!(time_tick_label(midnight), "14 Mar");
        let noon = chrono::Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        assert_eq!(time_tick_label(noon), "12h");
    }
}
