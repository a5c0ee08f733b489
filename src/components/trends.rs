pub mod bar_chart;
pub mod data_table;
pub mod line_chart;
mod plot;

use yew::prelude::*;

use crate::api_client::records::{get_records, CensusRecord};
use crate::api_client::trends::{
    get_female_by_age, get_male_by_age, get_not_vaccinated_by_age, get_others_by_age,
    get_vaccinated_by_age,
};
use crate::common::error::ErrorDisplay;
use crate::common::fetch_hook::{use_fetch_with_refetch, FetchState};
use crate::common::fetch_render::FetchRender;
use crate::common::loading::LoadingSpinner;
use self::bar_chart::BarChart;
use self::data_table::DataTable;
use self::line_chart::LineChart;

/// Analytics page. Fires five independent fetches on mount; each section
/// owns its state and shows its own loading/error UI, so one failing
/// endpoint never blanks the others.
#[function_component(Trends)]
pub fn trends() -> Html {
    log::trace!("Trends page rendering");

    let (records_state, refetch_records) = use_fetch_with_refetch(get_records);
    let (vaccinated_state, refetch_vaccinated) = use_fetch_with_refetch(get_vaccinated_by_age);
    let (not_vaccinated_state, refetch_not_vaccinated) =
        use_fetch_with_refetch(get_not_vaccinated_by_age);
    let (male_state, refetch_male) = use_fetch_with_refetch(get_male_by_age);
    let (female_state, refetch_female) = use_fetch_with_refetch(get_female_by_age);
    let (others_state, refetch_others) = use_fetch_with_refetch(get_others_by_age);

    let retry_line = {
        let refetch_vaccinated = refetch_vaccinated.clone();
        let refetch_not_vaccinated = refetch_not_vaccinated.clone();
        Callback::from(move |_| {
            refetch_vaccinated.emit(());
            refetch_not_vaccinated.emit(());
        })
    };

    let retry_bar = {
        let refetch_male = refetch_male.clone();
        let refetch_female = refetch_female.clone();
        let refetch_others = refetch_others.clone();
        Callback::from(move |_| {
            refetch_male.emit(());
            refetch_female.emit(());
            refetch_others.emit(());
        })
    };

    let line_section = match (&*vaccinated_state, &*not_vaccinated_state) {
        (FetchState::Error(err), _) | (_, FetchState::Error(err)) => html! {
            <ErrorDisplay message={err.clone()} on_retry={Some(retry_line)} />
        },
        (FetchState::Success(vaccinated), FetchState::Success(not_vaccinated)) => html! {
            <LineChart
                vaccinated={vaccinated.clone()}
                not_vaccinated={not_vaccinated.clone()}
            />
        },
        _ => html! { <LoadingSpinner /> },
    };

    let bar_section = match (&*male_state, &*female_state, &*others_state) {
        (FetchState::Error(err), _, _)
        | (_, FetchState::Error(err), _)
        | (_, _, FetchState::Error(err)) => html! {
            <ErrorDisplay message={err.clone()} on_retry={Some(retry_bar)} />
        },
        (FetchState::Success(male), FetchState::Success(female), FetchState::Success(others)) => {
            html! {
                <BarChart
                    male={male.clone()}
                    female={female.clone()}
                    others={others.clone()}
                />
            }
        }
        _ => html! { <LoadingSpinner /> },
    };

    html! {
        <div class="max-w-6xl mx-auto space-y-6">
            <FetchRender<Vec<CensusRecord>>
                state={(*records_state).clone()}
                on_retry={Some(refetch_records)}
                loading_text={Some("Loading census records...".to_string())}
                render={Callback::from(|records: Vec<CensusRecord>| html! {
                    <DataTable records={records} />
                })}
            />

            { line_section }
            { bar_section }
        </div>
    }
}
