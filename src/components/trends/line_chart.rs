use plotly::common::{Fill, Line, LineShape, Marker, Mode, Orientation, Title};
use plotly::layout::{Axis, Legend, RangeMode};
use plotly::{Layout, Scatter};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::plot;
use crate::api_client::trends::AgeCountRow;
use crate::chart_data;

const DIV_ID: &str = "chart-vaccination-trend";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub vaccinated: Vec<AgeCountRow>,
    pub not_vaccinated: Vec<AgeCountRow>,
}

fn series_trace(
    rows: &[AgeCountRow],
    name: &str,
    line_color: &'static str,
    fill_color: &'static str,
    point_color: &'static str,
) -> String {
    let (xs, ys) = chart_data::line_points(rows);
    log::debug!("Line series '{}': {} points", name, xs.len());

    let trace = Scatter::new(xs, ys)
        .mode(Mode::LinesMarkers)
        .name(name)
        .line(
            Line::new()
                .color(line_color)
                .width(3.0)
                .shape(LineShape::Spline)
                .smoothing(1.0),
        )
        .fill(Fill::ToZeroY)
        .fill_color(fill_color)
        .marker(Marker::new().size(7).color(point_color));

    serde_json::to_string(&trace).unwrap_or_else(|_| "{}".to_string())
}

/// Vaccinated vs. not-vaccinated counts by age as two filled spline traces.
#[function_component(LineChart)]
pub fn line_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let vaccinated = props.vaccinated.clone();
    let not_vaccinated = props.not_vaccinated.clone();

    use_effect_with(
        (container_ref.clone(), vaccinated, not_vaccinated),
        move |(container_ref, vaccinated, not_vaccinated)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(DIV_ID);

                let traces = vec![
                    series_trace(
                        vaccinated,
                        "Vaccinated",
                        "rgba(56, 189, 248, 1)",
                        "rgba(56, 189, 248, 0.35)",
                        "#0ea5e9",
                    ),
                    series_trace(
                        not_vaccinated,
                        "Not Vaccinated",
                        "rgba(244, 114, 182, 1)",
                        "rgba(244, 114, 182, 0.35)",
                        "#ec4899",
                    ),
                ];

                let layout = Layout::new()
                    .title(Title::with_text("Vaccination Trend by Age"))
                    .x_axis(Axis::new().title(Title::with_text("Age (Years)")))
                    .y_axis(
                        Axis::new()
                            .title(Title::with_text("Number of People"))
                            .range_mode(RangeMode::ToZero),
                    )
                    .legend(Legend::new().orientation(Orientation::Horizontal).y(-0.2))
                    .show_legend(true)
                    .height(420);
                let layout_json =
                    serde_json::to_string(&layout).unwrap_or_else(|_| "{}".to_string());

                let config_json =
                    serde_json::json!({"responsive": true, "displayModeBar": false}).to_string();

                plot::draw(DIV_ID, &traces, &layout_json, &config_json);
            }
            || ()
        },
    );

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="mb-2">
                    <h2 class="card-title text-lg">{"Vaccination Analytics"}</h2>
                    <p class="text-sm text-gray-500">
                        {"Comparison of vaccinated vs not vaccinated across age groups"}
                    </p>
                </div>
                <div ref={container_ref} style="width:100%; height:420px;"></div>
            </div>
        </div>
    }
}
