use chrono::{DateTime, NaiveDate};
use yew::prelude::*;

use crate::api_client::records::CensusRecord;

/// Format an ISO-8601 birthdate as a long localized date, e.g.
/// "September 3, 1998". Returns `None` when the value does not parse.
fn format_birthdate(raw: &str) -> Option<String> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.format("%B %-d, %Y").to_string());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%B %-d, %Y").to_string())
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Badge class per gender; unrecognized values get the neutral style.
fn gender_badge_class(gender: &str) -> &'static str {
    match gender.to_lowercase().as_str() {
        "male" => "badge-info",
        "female" => "badge-secondary",
        "others" => "badge-accent",
        _ => "badge-ghost",
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub records: Vec<CensusRecord>,
}

#[function_component(DataTable)]
pub fn data_table(props: &Props) -> Html {
    let records = &props.records;

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-2 mb-2">
                    <div>
                        <h2 class="card-title text-lg">{"Census Records"}</h2>
                        <p class="text-sm text-gray-500">
                            {"List of all participants with vaccination status, birthdate and gender."}
                        </p>
                    </div>
                    <div class="text-xs text-gray-500">
                        <span class="font-semibold">{"Total Records: "}</span>
                        { records.len() }
                    </div>
                </div>

                <div class="overflow-x-auto max-h-96">
                    <table class="table table-zebra table-pin-rows">
                        <thead>
                            <tr>
                                <th>{"#"}</th>
                                <th>{"Name"}</th>
                                <th>{"Vaccination Status"}</th>
                                <th>{"Birthdate"}</th>
                                <th>{"Gender"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {if records.is_empty() {
                                html! {
                                    <tr>
                                        <td colspan="5" class="text-center text-gray-400 py-10">
                                            {"No records found. Add some census data to see it here."}
                                        </td>
                                    </tr>
                                }
                            } else {
                                html! {
                                    { for records.iter().enumerate().map(|(i, record)| {
                                        let name = if record.name.is_empty() {
                                            "-".to_string()
                                        } else {
                                            record.name.clone()
                                        };
                                        let birthdate = record
                                            .birthdate
                                            .as_deref()
                                            .and_then(format_birthdate)
                                            .unwrap_or_else(|| "-".to_string());
                                        let (vacc_class, vacc_label) = if record.is_vaccinated {
                                            ("badge-success", "Vaccinated")
                                        } else {
                                            ("badge-error", "Not Vaccinated")
                                        };
                                        let gender = if record.gender.is_empty() {
                                            html! { {"-"} }
                                        } else {
                                            html! {
                                                <span class={classes!("badge", "badge-sm", gender_badge_class(&record.gender))}>
                                                    { capitalize(&record.gender) }
                                                </span>
                                            }
                                        };

                                        html! {
                                            <tr class="hover">
                                                <td class="text-xs text-gray-500">{ i + 1 }</td>
                                                <td class="font-medium">{ name }</td>
                                                <td>
                                                    <span class={classes!("badge", "badge-sm", vacc_class)}>
                                                        { vacc_label }
                                                    </span>
                                                </td>
                                                <td class="whitespace-nowrap">{ birthdate }</td>
                                                <td>{ gender }</td>
                                            </tr>
                                        }
                                    })}
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_timestamp_as_long_date() {
        assert_eq!(
            format_birthdate("1998-09-03T00:00:00.000Z").as_deref(),
            Some("September 3, 1998")
        );
        assert_eq!(
            format_birthdate("2001-12-25T10:30:00+05:30").as_deref(),
            Some("December 25, 2001")
        );
    }

    #[test]
    fn formats_plain_date_and_rejects_garbage() {
        assert_eq!(
            format_birthdate("2000-01-05").as_deref(),
            Some("January 5, 2000")
        );
        assert_eq!(format_birthdate("yesterday"), None);
        assert_eq!(format_birthdate(""), None);
    }

    #[test]
    fn gender_badge_classes_cover_known_and_unknown_values() {
        assert_eq!(gender_badge_class("male"), "badge-info");
        assert_eq!(gender_badge_class("Female"), "badge-secondary");
        assert_eq!(gender_badge_class("others"), "badge-accent");
        assert_eq!(gender_badge_class("unspecified"), "badge-ghost");
        assert_eq!(gender_badge_class(""), "badge-ghost");
    }

    #[test]
    fn capitalize_handles_empty_and_lowercase() {
        assert_eq!(capitalize("male"), "Male");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("others"), "Others");
    }
}
