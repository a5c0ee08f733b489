use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api_client::records::{create_record, Gender, NewRecord};
use crate::common::toast::ToastContext;

/// Outcome of one submit attempt. Replaces the usual single success flag so
/// validation failures and network failures stay distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved,
    Invalid(String),
    Failed(String),
}

fn outcome_of(post_result: Result<(), String>) -> SubmitOutcome {
    match post_result {
        Ok(()) => SubmitOutcome::Saved,
        Err(err) => SubmitOutcome::Failed(err),
    }
}

/// Validate the raw field values and assemble the POST payload.
///
/// The vaccination select is tri-state ("" until a choice is made) and the
/// date input carries `YYYY-MM-DD`; the payload serializes it as an ISO-8601
/// midnight UTC timestamp.
pub fn build_record(
    name: &str,
    vaccinated_choice: &str,
    birthdate: &str,
    gender: Option<Gender>,
) -> Result<NewRecord, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Please enter a name".to_string());
    }

    let is_vaccinated = match vaccinated_choice {
        "true" => true,
        "false" => false,
        _ => return Err("Please select a vaccination status".to_string()),
    };

    let gender = gender.ok_or_else(|| "Please select a gender".to_string())?;

    let date = NaiveDate::parse_from_str(birthdate, "%Y-%m-%d")
        .map_err(|_| "Please pick a valid birthdate".to_string())?;

    Ok(NewRecord {
        name: name.to_string(),
        is_vaccinated,
        birthdate: format!("{}T00:00:00.000Z", date.format("%Y-%m-%d")),
        gender,
    })
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[function_component(RecordForm)]
pub fn record_form() -> Html {
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider missing from tree");

    let name = use_state(String::new);
    let vaccinated = use_state(String::new);
    let birthdate = use_state(today);
    let gender = use_state(|| None::<Gender>);
    let is_submitting = use_state(|| false);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_vaccinated_change = {
        let vaccinated = vaccinated.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            vaccinated.set(select.value());
        })
    };

    let on_birthdate_input = {
        let birthdate = birthdate.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            birthdate.set(input.value());
        })
    };

    let select_gender = |choice: Gender| {
        let gender = gender.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("Gender selected: {}", choice.as_str());
            gender.set(Some(choice));
        })
    };

    let onsubmit = {
        let name = name.clone();
        let vaccinated = vaccinated.clone();
        let birthdate = birthdate.clone();
        let gender = gender.clone();
        let is_submitting = is_submitting.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            log::debug!(
                "Submitting census record: name='{}', vaccinated='{}', birthdate='{}', gender={:?}",
                *name, *vaccinated, *birthdate, *gender
            );

            let record = build_record(&name, &vaccinated, &birthdate, *gender);

            is_submitting.set(true);

            let name = name.clone();
            let vaccinated = vaccinated.clone();
            let birthdate = birthdate.clone();
            let gender = gender.clone();
            let is_submitting = is_submitting.clone();
            let toast_ctx = toast_ctx.clone();

            spawn_local(async move {
                let outcome = match record {
                    Err(msg) => SubmitOutcome::Invalid(msg),
                    Ok(record) => outcome_of(create_record(&record).await),
                };

                match outcome {
                    SubmitOutcome::Saved => {
                        log::info!("Census record saved");
                        toast_ctx.show_success("Record saved".to_string());
                        // Reset the form to its defaults
                        name.set(String::new());
                        vaccinated.set(String::new());
                        birthdate.set(today());
                        gender.set(None);
                    }
                    SubmitOutcome::Invalid(msg) => {
                        log::warn!("Form validation failed: {}", msg);
                        toast_ctx.show_warning(msg);
                    }
                    SubmitOutcome::Failed(err) => {
                        toast_ctx.show_error(format!("Could not save record: {}", err));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let gender_pill = |choice: Gender, active_classes: &'static str| {
        let selected = *gender == Some(choice);
        let classes = if selected {
            classes!("btn", "btn-sm", "rounded-full", active_classes)
        } else {
            classes!("btn", "btn-sm", "btn-outline", "rounded-full")
        };
        html! {
            <button type="button" class={classes} onclick={select_gender(choice)}>
                { choice.label() }
            </button>
        }
    };

    html! {
        <div class="flex justify-center py-10">
            <div class="card bg-base-100 shadow-xl w-full max-w-xl">
                <div class="card-body">
                    <div class="text-center mb-4">
                        <h2 class="text-3xl font-extrabold">{"Census Management"}</h2>
                        <p class="text-sm text-gray-500 mt-2">
                            {"Record vaccination details and analyze trends effortlessly."}
                        </p>
                    </div>

                    <form onsubmit={onsubmit} class="space-y-4">
                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">{"Full Name"}</span>
                            </label>
                            <input
                                type="text"
                                id="name"
                                class="input input-bordered w-full"
                                placeholder="e.g., Larry Page"
                                value={(*name).clone()}
                                oninput={on_name_input}
                                required={true}
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="is-vaccinated">
                                <span class="label-text">{"Vaccination Status"}</span>
                            </label>
                            <select
                                id="is-vaccinated"
                                class="select select-bordered w-full"
                                value={(*vaccinated).clone()}
                                onchange={on_vaccinated_change}
                                required={true}
                            >
                                <option value="" selected={vaccinated.is_empty()}>{"Select an option"}</option>
                                <option value="true" selected={*vaccinated == "true"}>{"Yes, Vaccinated"}</option>
                                <option value="false" selected={*vaccinated == "false"}>{"No, Not Vaccinated"}</option>
                            </select>
                        </div>

                        <div class="form-control">
                            <label class="label" for="birthdate">
                                <span class="label-text">{"Birthdate"}</span>
                            </label>
                            <input
                                type="date"
                                id="birthdate"
                                class="input input-bordered w-full"
                                value={(*birthdate).clone()}
                                oninput={on_birthdate_input}
                                required={true}
                            />
                        </div>

                        <div class="form-control">
                            <span class="label-text mb-2">{"Gender"}</span>
                            <div class="flex flex-wrap gap-2">
                                { gender_pill(Gender::Male, "btn-info text-white") }
                                { gender_pill(Gender::Female, "btn-secondary text-white") }
                                { gender_pill(Gender::Others, "btn-accent text-white") }
                            </div>
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary w-full mt-2"
                            disabled={*is_submitting}
                        >
                            {if *is_submitting {
                                html! { <span class="loading loading-spinner loading-sm"></span> }
                            } else {
                                html! { <i class="fas fa-check"></i> }
                            }}
                            {" Submit Record"}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_fields_build_the_payload() {
        let record =
            build_record("Larry Page", "true", "1998-09-03", Some(Gender::Male)).unwrap();
        assert_eq!(record.name, "Larry Page");
        assert!(record.is_vaccinated);
        assert_eq!(record.birthdate, "1998-09-03T00:00:00.000Z");
        assert_eq!(record.gender, Gender::Male);
    }

    #[test]
    fn name_is_trimmed_and_required() {
        assert!(build_record("  ", "true", "2000-01-01", Some(Gender::Female)).is_err());
        let record =
            build_record("  Ada  ", "false", "2000-01-01", Some(Gender::Female)).unwrap();
        assert_eq!(record.name, "Ada");
        assert!(!record.is_vaccinated);
    }

    #[test]
    fn unset_vaccination_choice_is_rejected() {
        let err = build_record("Ada", "", "2000-01-01", Some(Gender::Others)).unwrap_err();
        assert!(err.contains("vaccination"));
    }

    #[test]
    fn missing_gender_is_rejected() {
        let err = build_record("Ada", "true", "2000-01-01", None).unwrap_err();
        assert!(err.contains("gender"));
    }

    #[test]
    fn bad_date_is_rejected() {
        assert!(build_record("Ada", "true", "not-a-date", Some(Gender::Male)).is_err());
        assert!(build_record("Ada", "true", "2000-13-40", Some(Gender::Male)).is_err());
    }

    #[test]
    fn post_result_maps_to_tagged_outcome() {
        assert_eq!(outcome_of(Ok(())), SubmitOutcome::Saved);
        assert_eq!(
            outcome_of(Err("HTTP error: 500".to_string())),
            SubmitOutcome::Failed("HTTP error: 500".to_string())
        );
    }
}
