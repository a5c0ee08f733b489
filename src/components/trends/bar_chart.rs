use plotly::common::{Marker, Orientation, Title};
use plotly::layout::{Axis, BarMode, DragMode, Legend};
use plotly::{Bar, Layout};
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

use super::plot;
use crate::api_client::trends::GenderAgeRow;
use crate::chart_data::{dense_counts, AgeRange, MAX_AGE};

const DIV_ID: &str = "chart-age-gender";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SeriesToggles {
    male: bool,
    female: bool,
    others: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct BarSeries {
    name: &'static str,
    color: &'static str,
    counts: Vec<i64>,
}

/// Clip the three dense series to the selected range and keep only the
/// toggled-on ones. Toggling one series never touches the others' data.
fn bar_series(
    toggles: SeriesToggles,
    male: &[i64],
    female: &[i64],
    others: &[i64],
    range: &AgeRange,
) -> Vec<BarSeries> {
    let mut series = Vec::new();
    if toggles.male {
        series.push(BarSeries {
            name: "Males",
            color: "rgba(56, 189, 248, 0.9)",
            counts: range.clip(male).to_vec(),
        });
    }
    if toggles.female {
        series.push(BarSeries {
            name: "Females",
            color: "rgba(244, 114, 182, 0.9)",
            counts: range.clip(female).to_vec(),
        });
    }
    if toggles.others {
        series.push(BarSeries {
            name: "Others",
            color: "rgba(129, 140, 248, 0.95)",
            counts: range.clip(others).to_vec(),
        });
    }
    series
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub male: Vec<GenderAgeRow>,
    pub female: Vec<GenderAgeRow>,
    pub others: Vec<GenderAgeRow>,
}

/// Participants by age and gender as grouped bars, with linked min/max age
/// sliders and per-gender visibility toggles. Panning and wheel zoom come
/// from the plotly config.
#[function_component(BarChart)]
pub fn bar_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let range = use_state(AgeRange::new);
    let show_male = use_state(|| true);
    let show_female = use_state(|| true);
    let show_others = use_state(|| true);

    let toggles = SeriesToggles {
        male: *show_male,
        female: *show_female,
        others: *show_others,
    };

    {
        let male = props.male.clone();
        let female = props.female.clone();
        let others = props.others.clone();
        let deps = (container_ref.clone(), male, female, others, *range, toggles);

        use_effect_with(deps, move |(container_ref, male, female, others, range, toggles)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(DIV_ID);

                let male_dense = dense_counts(male);
                let female_dense = dense_counts(female);
                let others_dense = dense_counts(others);
                let labels = range.labels();

                let traces: Vec<String> =
                    bar_series(*toggles, &male_dense, &female_dense, &others_dense, range)
                        .into_iter()
                        .map(|series| {
                            let trace = Bar::new(labels.clone(), series.counts)
                                .name(series.name)
                                .marker(Marker::new().color(series.color));
                            serde_json::to_string(&trace).unwrap_or_else(|_| "{}".to_string())
                        })
                        .collect();

                log::debug!(
                    "Bar chart: {} visible series, ages {}-{}",
                    traces.len(),
                    range.min(),
                    range.max()
                );

                let layout = Layout::new()
                    .title(Title::with_text("Participants by Age & Gender"))
                    .bar_mode(BarMode::Group)
                    .drag_mode(DragMode::Pan)
                    .x_axis(Axis::new().title(Title::with_text("Age (Years)")))
                    .y_axis(Axis::new().title(Title::with_text("Number of People")))
                    .legend(Legend::new().orientation(Orientation::Horizontal).y(-0.2))
                    .show_legend(true)
                    .height(430);
                let layout_json =
                    serde_json::to_string(&layout).unwrap_or_else(|_| "{}".to_string());

                let config_json = serde_json::json!({
                    "responsive": true,
                    "scrollZoom": true,
                    "displayModeBar": false
                })
                .to_string();

                plot::draw(DIV_ID, &traces, &layout_json, &config_json);
            }
            || ()
        });
    }

    let on_min_input = {
        let range = range.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<i64>() {
                let mut next = *range;
                next.set_min(value);
                range.set(next);
            }
        })
    };

    let on_max_input = {
        let range = range.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<i64>() {
                let mut next = *range;
                next.set_max(value);
                range.set(next);
            }
        })
    };

    let toggle_pill = |label: &'static str,
                       handle: &UseStateHandle<bool>,
                       active_classes: &'static str| {
        let enabled = **handle;
        let handle = handle.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            log::trace!("Toggling series '{}': {} -> {}", label, *handle, !*handle);
            handle.set(!*handle);
        });
        let classes = if enabled {
            classes!("btn", "btn-xs", "rounded-full", active_classes)
        } else {
            classes!("btn", "btn-xs", "btn-outline", "rounded-full")
        };
        html! {
            <button type="button" class={classes} onclick={onclick}>{ label }</button>
        }
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-2 mb-2">
                    <div>
                        <h2 class="card-title text-lg">{"Demographic Distribution"}</h2>
                        <p class="text-sm text-gray-500">
                            {"Age-wise comparison across male, female and others"}
                        </p>
                    </div>
                    <div class="flex flex-wrap gap-2">
                        { toggle_pill("Males", &show_male, "btn-info text-white") }
                        { toggle_pill("Females", &show_female, "btn-secondary text-white") }
                        { toggle_pill("Others", &show_others, "btn-accent text-white") }
                    </div>
                </div>

                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-3 mb-4">
                    <div class="text-xs text-gray-500">
                        <span class="font-semibold">{"Age Range: "}</span>
                        { format!("{} – {} years", range.min(), range.max()) }
                    </div>
                    <div class="flex flex-col md:flex-row gap-3">
                        <label class="flex flex-col text-xs text-gray-600">
                            <span class="mb-1 font-medium">{"Min Age"}</span>
                            <input
                                type="range"
                                min="1"
                                max={MAX_AGE.to_string()}
                                value={range.min().to_string()}
                                oninput={on_min_input}
                                class="range range-info range-xs w-44"
                            />
                        </label>
                        <label class="flex flex-col text-xs text-gray-600">
                            <span class="mb-1 font-medium">{"Max Age"}</span>
                            <input
                                type="range"
                                min="1"
                                max={MAX_AGE.to_string()}
                                value={range.max().to_string()}
                                oninput={on_max_input}
                                class="range range-accent range-xs w-44"
                            />
                        </label>
                    </div>
                </div>

                <div ref={container_ref} style="width:100%; height:430px;"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense_with(age: usize, count: i64) -> Vec<i64> {
        let mut counts = vec![0i64; MAX_AGE];
        counts[age - 1] = count;
        counts
    }

    #[test]
    fn all_toggles_on_yields_three_series_in_order() {
        let toggles = SeriesToggles { male: true, female: true, others: true };
        let range = AgeRange::new();
        let series = bar_series(
            toggles,
            &dense_with(10, 1),
            &dense_with(20, 2),
            &dense_with(30, 3),
            &range,
        );
        let names: Vec<_> = series.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Males", "Females", "Others"]);
    }

    #[test]
    fn toggling_one_off_removes_exactly_that_series() {
        let male = dense_with(10, 1);
        let female = dense_with(20, 2);
        let others = dense_with(30, 3);
        let range = AgeRange::new();

        let all = bar_series(
            SeriesToggles { male: true, female: true, others: true },
            &male,
            &female,
            &others,
            &range,
        );
        let without_female = bar_series(
            SeriesToggles { male: true, female: false, others: true },
            &male,
            &female,
            &others,
            &range,
        );

        let names: Vec<_> = without_female.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Males", "Others"]);
        // Remaining series keep exactly the data they had before
        assert_eq!(without_female[0], all[0]);
        assert_eq!(without_female[1], all[2]);
    }

    #[test]
    fn series_are_clipped_to_the_selected_range() {
        let mut range = AgeRange::new();
        range.set_min(1);
        range.set_max(10);

        let series = bar_series(
            SeriesToggles { male: true, female: false, others: false },
            &dense_with(5, 12),
            &vec![0; MAX_AGE],
            &vec![0; MAX_AGE],
            &range,
        );
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].counts.len(), 10);
        assert_eq!(series[0].counts[4], 12);
    }

    #[test]
    fn all_toggles_off_yields_no_series() {
        let range = AgeRange::new();
        let series = bar_series(
            SeriesToggles { male: false, female: false, others: false },
            &vec![0; MAX_AGE],
            &vec![0; MAX_AGE],
            &vec![0; MAX_AGE],
            &range,
        );
        assert!(series.is_empty());
    }
}
