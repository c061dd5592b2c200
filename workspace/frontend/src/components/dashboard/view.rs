use std::rc::Rc;

use common::FeatureCatalog;
use dashboard::{DashboardAction, DashboardState, FormState, PredictionClient, sample_history};
use yew::prelude::*;

use super::chart::HistoryChart;
use super::form::PredictionForm;
use super::result::ResultPanel;
use crate::api_client::get_frontend_settings;
use crate::components::error::ErrorAlert;
use crate::settings;
use crate::transport::GlooTransport;

/// Reducer wrapper so async completions land on the latest state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStore(pub DashboardState);

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::trace!("Dashboard action: {:?}", action);
        Rc::new(DashboardStore(self.0.clone().apply(action)))
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let store = use_reducer(|| {
        let endpoint = settings::get_settings().prediction_endpoint;
        DashboardStore(DashboardState::new(FormState::default(), endpoint))
    });
    let history = use_state(sample_history);

    // Pull the runtime endpoint and field list from the server once
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_frontend_settings().await {
                    Ok(server) => {
                        let endpoint = settings::get_settings()
                            .prediction_endpoint
                            .or(server.prediction_endpoint);
                        let catalog = (!server.feature_fields.is_empty())
                            .then(|| FeatureCatalog::from_fields(server.feature_fields));
                        store.dispatch(DashboardAction::Configure { endpoint, catalog });
                    }
                    Err(e) => {
                        log::warn!("Using local settings, server settings unavailable: {}", e);
                    }
                }
            });
            || ()
        });
    }

    let on_edit = {
        let store = store.clone();
        Callback::from(move |(field, raw): (String, String)| {
            store.dispatch(DashboardAction::Edit { field, raw });
        })
    };

    let on_reset = {
        let store = store.clone();
        Callback::from(move |_: ()| {
            log::debug!("Form reset to defaults");
            store.dispatch(DashboardAction::Reset);
        })
    };

    let on_submit = {
        let store = store.clone();
        Callback::from(move |_: ()| {
            let state = &store.0;
            let features = state.form.values().clone();
            let client = PredictionClient::new(state.endpoint.clone(), GlooTransport);

            if client.endpoint().is_some() {
                store.dispatch(DashboardAction::Begin);
            }

            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = client.predict(&features).await;
                store.dispatch(DashboardAction::Finish(outcome));
            });
        })
    };

    let state = &store.0;

    html! {
        <div class="container mx-auto p-4 flex flex-col gap-6">
            <h1 class="text-3xl font-bold">{"Wind Turbine Predictive Maintenance"}</h1>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <PredictionForm
                    catalog={state.form.catalog().clone()}
                    values={state.form.values().clone()}
                    busy={state.busy}
                    submit_label={state.submit_label()}
                    on_edit={on_edit}
                    on_reset={on_reset}
                    on_submit={on_submit}
                />

                <div class="flex flex-col gap-6">
                    {if let Some(error) = &state.error {
                        html! { <ErrorAlert message={error.clone()} /> }
                    } else {
                        html! {}
                    }}

                    {if let Some(result) = &state.result {
                        html! { <ResultPanel result={result.clone()} /> }
                    } else {
                        html! {}
                    }}

                    <HistoryChart points={(*history).clone()} />
                </div>
            </div>
        </div>
    }
}
