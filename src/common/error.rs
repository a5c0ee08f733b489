use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Error panel for a dashboard section whose fetch failed. The census
/// backend is a free-tier deployment that cold-starts, so failures are
/// usually transient and worth a reload.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Section failed to load: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-10 gap-3">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-plug-circle-xmark text-2xl"></i>
                <div class="flex flex-col gap-1">
                    <span class="font-semibold">{"Could not reach the census backend"}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
            {match &props.on_retry {
                Some(on_retry) => {
                    let on_retry = on_retry.clone();
                    html! {
                        <button
                            class="btn btn-primary btn-sm"
                            onclick={Callback::from(move |_| {
                                log::debug!("Reloading failed section");
                                on_retry.emit(());
                            })}
                        >
                            <i class="fas fa-rotate-right"></i>
                            {" Reload Section"}
                        </button>
                    }
                }
                None => html! {},
            }}
        </div>
    }
}
