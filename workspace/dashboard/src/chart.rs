use common::HistoryPoint;
use serde_json::{Value, json};

const TEMPERATURE_COLOR: &str = "#8884d8";
const VIBRATION_COLOR: &str = "#82ca9d";

/// Plotly traces, layout and config for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFigure {
    pub data: Value,
    pub layout: Value,
    pub config: Value,
}

/// Dual-axis line chart: temperature on the left axis, vibration on the right.
pub fn history_figure(points: &[HistoryPoint]) -> ChartFigure {
    let names: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
    let temperature: Vec<f64> = points.iter().map(|p| p.temperature).collect();
    let vibration: Vec<f64> = points.iter().map(|p| p.vibration).collect();

    let data = json!([
        {
            "x": names,
            "y": temperature,
            "type": "scatter",
            "mode": "lines+markers",
            "name": "Temperature",
            "yaxis": "y",
            "line": {"color": TEMPERATURE_COLOR, "shape": "spline"},
            "marker": {"size": 4}
        },
        {
            "x": names,
            "y": vibration,
            "type": "scatter",
            "mode": "lines",
            "name": "Vibration",
            "yaxis": "y2",
            "line": {"color": VIBRATION_COLOR, "shape": "spline"}
        }
    ]);

    let layout = json!({
        "margin": {"t": 10, "r": 60, "l": 60, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false},
        "yaxis": {
            "title": {"text": "Temperature (°C)"},
            "showgrid": true,
            "gridcolor": "#eee"
        },
        "yaxis2": {
            "title": {"text": "Vibration (g)"},
            "overlaying": "y",
            "side": "right",
            "showgrid": false
        },
        "showlegend": true,
        "legend": {"orientation": "h", "y": -0.2}
    });

    let config = json!({"responsive": true, "displayModeBar": false});

    ChartFigure { data, layout, config }
}
