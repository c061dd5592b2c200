use common::PredictionResult;
use dashboard::{ResultTone, probability_summary};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub result: PredictionResult,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let result = &props.result;
    let alert_class = match ResultTone::for_label(result.predicted_label) {
        ResultTone::Success => "alert alert-success",
        ResultTone::Warning => "alert alert-warning",
        ResultTone::Failure => "alert alert-error",
    };

    html! {
        <div class={alert_class}>
            <div class="flex flex-col gap-1">
                <span class="font-semibold">{"Prediction result"}</span>
                <span>{format!("Status: {}", result.predicted_status)}</span>
                <span>{format!("Label: {}", result.predicted_label)}</span>
                {match result.probabilities() {
                    Some(probabilities) => html! {
                        <span class="text-sm">
                            {format!("Probabilities: {}", probability_summary(probabilities))}
                        </span>
                    },
                    None => html! {},
                }}
            </div>
        </div>
    }
}
