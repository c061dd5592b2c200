use common::{FeatureCatalog, FeatureVector};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionFormProps {
    pub catalog: FeatureCatalog,
    pub values: FeatureVector,
    pub busy: bool,
    pub submit_label: &'static str,
    /// Emits `(field name, raw input)` on every keystroke.
    pub on_edit: Callback<(String, String)>,
    pub on_reset: Callback<()>,
    pub on_submit: Callback<()>,
}

#[function_component(PredictionForm)]
pub fn prediction_form(props: &PredictionFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::debug!("Prediction form submitted");
            on_submit.emit(());
        })
    };

    let onreset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Sensor features"}</h2>
                <form {onsubmit} class="flex flex-col gap-4">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                        {for props.catalog.fields().iter().map(|field| {
                            let name = field.name.clone();
                            let on_edit = props.on_edit.clone();
                            let oninput = Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                on_edit.emit((name.clone(), input.value()));
                            });
                            let value = props
                                .values
                                .get(&field.name)
                                .unwrap_or(field.default);

                            html! {
                                <div class="form-control" key={field.name.clone()}>
                                    <label class="label" for={field.name.clone()}>
                                        <span class="label-text">{&field.label}</span>
                                    </label>
                                    <input
                                        id={field.name.clone()}
                                        name={field.name.clone()}
                                        type="number"
                                        step="any"
                                        class="input input-bordered input-sm w-full"
                                        value={value.to_string()}
                                        {oninput}
                                    />
                                </div>
                            }
                        })}
                    </div>

                    <div class="card-actions justify-end">
                        <button type="button" class="btn btn-ghost" onclick={onreset} disabled={props.busy}>
                            {"Reset"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={props.busy}>
                            {if props.busy {
                                html! { <span class="loading loading-spinner loading-sm"></span> }
                            } else {
                                html! {}
                            }}
                            {props.submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
