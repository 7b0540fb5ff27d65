use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::format::{format_currency, format_date};
use shared::{CategoryBreakdown, DailyActivity, MonthlyTrend};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_WIDTH: u32 = 480;
const CANVAS_HEIGHT: u32 = 280;

const PRIMARY: RGBColor = RGBColor(102, 126, 234);

const PALETTE: [RGBColor; 8] = [
    RGBColor(102, 126, 234),
    RGBColor(240, 147, 251),
    RGBColor(255, 154, 158),
    RGBColor(72, 187, 120),
    RGBColor(246, 173, 85),
    RGBColor(79, 209, 197),
    RGBColor(196, 113, 237),
    RGBColor(160, 174, 192),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartKind {
    /// Line over monthly totals
    Trend,
    /// Pie of spend per category
    Breakdown,
    /// Bars of daily totals
    Daily,
}

/// One labelled value, in drawing order
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

pub fn trend_points(trends: &[MonthlyTrend]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = trends
        .iter()
        .filter(|trend| trend.total.is_finite())
        .map(|trend| ChartPoint::new(trend.month.clone(), trend.total))
        .collect();
    points.sort_by(|a, b| a.label.cmp(&b.label));
    points
}

/// Pie slices; empty or negative categories cannot be drawn and are left out
pub fn breakdown_points(breakdown: &[CategoryBreakdown]) -> Vec<ChartPoint> {
    breakdown
        .iter()
        .filter(|item| item.total.is_finite() && item.total > 0.0)
        .map(|item| ChartPoint::new(item.category.clone(), item.total))
        .collect()
}

/// Oldest day first, labelled with the short en-IN date
pub fn daily_points(activity: &[DailyActivity]) -> Vec<ChartPoint> {
    let mut days: Vec<&DailyActivity> = activity
        .iter()
        .filter(|day| day.total.is_finite())
        .collect();
    days.sort_by(|a, b| a.date.cmp(&b.date));
    days.into_iter()
        .map(|day| ChartPoint::new(format_date(&day.date), day.total))
        .collect()
}

/// Y range from zero to just above the largest value
pub fn value_axis(points: &[ChartPoint]) -> std::ops::Range<f64> {
    let max = points
        .iter()
        .map(|point| point.value)
        .fold(0.0_f64, f64::max);
    let min = points
        .iter()
        .map(|point| point.value)
        .fold(0.0_f64, f64::min);
    let span = (max - min).max(1.0);
    (min - if min < 0.0 { span * 0.1 } else { 0.0 })..(max + span * 0.1)
}

#[derive(Properties, PartialEq)]
pub struct AnalyticsChartProps {
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

pub struct AnalyticsChart {
    canvas_ref: NodeRef,
}

impl Component for AnalyticsChart {
    type Message = ();
    type Properties = AnalyticsChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // Redrawn from rendered()
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let props = ctx.props();
        if !props.points.is_empty() {
            self.draw(props.kind, &props.points);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if ctx.props().points.is_empty() {
            return html! {
                <div class="chart-empty">
                    <p>{"No data to chart yet"}</p>
                </div>
            };
        }

        html! {
            <div class="chart-content">
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="analytics-chart-canvas"
                    width={CANVAS_WIDTH.to_string()}
                    height={CANVAS_HEIGHT.to_string()}
                ></canvas>
            </div>
        }
    }
}

impl AnalyticsChart {
    fn draw(&self, kind: ChartKind, points: &[ChartPoint]) {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let drawn = match kind {
            ChartKind::Trend => draw_trend(&root, points),
            ChartKind::Breakdown => draw_breakdown(&root, points),
            ChartKind::Daily => draw_daily(&root, points),
        };
        if drawn.is_none() {
            gloo::console::warn!("Failed to draw chart", format!("{:?}", kind));
        }

        let _ = root.present();
    }
}

type Area = DrawingArea<CanvasBackend, plotters::coord::Shift>;

fn label_at(points: &[ChartPoint], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > f64::EPSILON || index < 0.0 {
        return String::new();
    }
    points
        .get(index as usize)
        .map(|point| point.label.clone())
        .unwrap_or_default()
}

fn draw_trend(root: &Area, points: &[ChartPoint]) -> Option<()> {
    let x_max = (points.len().max(2) - 1) as f64;
    let mut chart = ChartBuilder::on(root)
        .margin(12)
        .x_label_area_size(35)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.25..x_max + 0.25, value_axis(points))
        .ok()?;

    chart
        .configure_mesh()
        .x_labels(points.len().min(12))
        .x_label_formatter(&|x| label_at(points, *x))
        .y_label_formatter(&|v| format_currency(*v))
        .label_style(("sans-serif", 11, &PRIMARY))
        .axis_style(&RGBColor(230, 230, 230))
        .bold_line_style(&RGBColor(245, 245, 245))
        .light_line_style(&RGBColor(250, 250, 250))
        .draw()
        .ok()?;

    chart
        .draw_series(LineSeries::new(
            points.iter().enumerate().map(|(i, point)| (i as f64, point.value)),
            PRIMARY.stroke_width(3),
        ))
        .ok()?;

    chart
        .draw_series(
            points
                .iter()
                .enumerate()
                .map(|(i, point)| Circle::new((i as f64, point.value), 4, PRIMARY.filled())),
        )
        .ok()?;

    Some(())
}

fn draw_breakdown<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    points: &[ChartPoint],
) -> Option<()> {
    let (width, height) = root.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = f64::from(width.min(height)) * 0.32;

    let sizes: Vec<f64> = points.iter().map(|point| point.value).collect();
    let colors: Vec<RGBColor> = (0..points.len())
        .map(|i| PALETTE[i % PALETTE.len()])
        .collect();
    let labels: Vec<String> = points.iter().map(|point| point.label.clone()).collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 12).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 11).into_font().color(&WHITE));
    root.draw(&pie).ok()?;

    Some(())
}

fn draw_daily(root: &Area, points: &[ChartPoint]) -> Option<()> {
    let mut chart = ChartBuilder::on(root)
        .margin(12)
        .x_label_area_size(35)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5..points.len() as f64 - 0.5, value_axis(points))
        .ok()?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(points.len().min(10))
        .x_label_formatter(&|x| label_at(points, *x))
        .y_label_formatter(&|v| format_currency(*v))
        .label_style(("sans-serif", 11, &PRIMARY))
        .axis_style(&RGBColor(230, 230, 230))
        .bold_line_style(&RGBColor(245, 245, 245))
        .draw()
        .ok()?;

    chart
        .draw_series(points.iter().enumerate().map(|(i, point)| {
            let x = i as f64;
            Rectangle::new([(x - 0.35, 0.0), (x + 0.35, point.value)], PRIMARY.filled())
        }))
        .ok()?;

    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters_backend::{BackendColor, BackendCoord, BackendTextStyle, DrawingErrorKind};
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;

    /// Backend that keeps drawn text and ignores pixels, so no font lookup happens
    struct TextRecorder {
        texts: Rc<RefCell<Vec<String>>>,
    }

    impl DrawingBackend for TextRecorder {
        type ErrorType = Infallible;

        fn get_size(&self) -> (u32, u32) {
            (CANVAS_WIDTH, CANVAS_HEIGHT)
        }

        fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<Infallible>> {
            Ok(())
        }

        fn present(&mut self) -> Result<(), DrawingErrorKind<Infallible>> {
            Ok(())
        }

        fn draw_pixel(
            &mut self,
            _point: BackendCoord,
            _color: BackendColor,
        ) -> Result<(), DrawingErrorKind<Infallible>> {
            Ok(())
        }

        fn estimate_text_size<TStyle: BackendTextStyle>(
            &self,
            text: &str,
            _style: &TStyle,
        ) -> Result<(u32, u32), DrawingErrorKind<Infallible>> {
            Ok((text.len() as u32 * 6, 12))
        }

        fn draw_text<TStyle: BackendTextStyle>(
            &mut self,
            text: &str,
            _style: &TStyle,
            _pos: BackendCoord,
        ) -> Result<(), DrawingErrorKind<Infallible>> {
            self.texts.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_breakdown_pie_draws_labels_and_percentages() {
        let texts = Rc::new(RefCell::new(Vec::new()));
        let root = TextRecorder { texts: texts.clone() }.into_drawing_area();
        let points = vec![ChartPoint::new("Food", 300.0), ChartPoint::new("Rent", 100.0)];

        assert!(draw_breakdown(&root, &points).is_some());
        let texts = texts.borrow();
        assert!(texts.iter().any(|text| text == "Food"));
        assert!(texts.iter().any(|text| text == "Rent"));
        assert!(texts.iter().any(|text| text == "75.0%"));
    }

    #[test]
    fn test_trend_points_are_in_month_order() {
        let trends = vec![
            MonthlyTrend { month: "2024-06".to_string(), total: 300.0 },
            MonthlyTrend { month: "2024-04".to_string(), total: 100.0 },
            MonthlyTrend { month: "2024-05".to_string(), total: f64::NAN },
        ];
        let points = trend_points(&trends);
        assert_eq!(
            points,
            vec![ChartPoint::new("2024-04", 100.0), ChartPoint::new("2024-06", 300.0)]
        );
    }

    #[test]
    fn test_breakdown_skips_empty_categories() {
        let breakdown = vec![
            CategoryBreakdown { category: "Food".to_string(), total: 450.0, count: 3 },
            CategoryBreakdown { category: "Travel".to_string(), total: 0.0, count: 0 },
        ];
        let points = breakdown_points(&breakdown);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "Food");
    }

    #[test]
    fn test_daily_points_use_short_dates() {
        let activity = vec![
            DailyActivity { date: "2024-06-10".to_string(), total: 20.0 },
            DailyActivity { date: "2024-06-02".to_string(), total: 75.5 },
        ];
        let points = daily_points(&activity);
        assert_eq!(points[0], ChartPoint::new("2/6/2024", 75.5));
        assert_eq!(points[1].label, "10/6/2024");
    }

    #[test]
    fn test_value_axis_starts_at_zero() {
        let axis = value_axis(&[ChartPoint::new("a", 100.0), ChartPoint::new("b", 50.0)]);
        assert_eq!(axis.start, 0.0);
        assert!(axis.end > 100.0);

        let empty = value_axis(&[]);
        assert_eq!(empty.start, 0.0);
        assert!(empty.end > 0.0);
    }

    #[test]
    fn test_label_lookup_only_on_whole_positions() {
        let points = vec![ChartPoint::new("2024-05", 1.0), ChartPoint::new("2024-06", 2.0)];
        assert_eq!(label_at(&points, 1.0), "2024-06");
        assert_eq!(label_at(&points, 0.5), "");
        assert_eq!(label_at(&points, 5.0), "");
        assert_eq!(label_at(&points, -1.0), "");
    }
}
