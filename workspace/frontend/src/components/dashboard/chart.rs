use common::HistoryPoint;
use dashboard::chart::history_figure;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

#[derive(Properties, PartialEq)]
pub struct HistoryChartProps {
    pub points: Vec<HistoryPoint>,
}

#[function_component(HistoryChart)]
pub fn history_chart(props: &HistoryChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with((chart_ref.clone(), props.points.clone()), move |(chart_ref, points)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let figure = history_figure(points);
            let div_id = element.id();

            match (to_js(&figure.data), to_js(&figure.layout), to_js(&figure.config)) {
                (Ok(data), Ok(layout), Ok(config)) if !div_id.is_empty() => {
                    newPlot(&div_id, data, layout, config);
                    log::debug!("Rendered history chart with {} points", points.len());
                }
                (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                    log::error!("Failed to convert chart figure: {}", e);
                }
                _ => {}
            }
        }
        || ()
    });

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Historical sensor data"}</h2>
                <div ref={chart_ref} id="chart-sensor-history" class="chart-container" style="height: 320px;"></div>
            </div>
        </div>
    }
}
