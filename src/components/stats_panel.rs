use crate::util::{format_combo, format_score};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub score: u64,
    pub high_score: u64,
    pub combo: u32,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let combo_color = if props.combo > 1 { "#f0883e" } else { "#8b949e" };
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"⚪"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Score"}</span>
                <span id="score" style={format!("{} color:#58a6ff;", value_style)}>{ format_score(props.score) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"🏆"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"High Score"}</span>
                <span id="high-score" style={format!("{} color:#d4af37;", value_style)}>{ format_score(props.high_score) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:{};", icon_style, combo_color)}>{"⚡"}</span>
                <span style={format!("{} color:{};", label_style, combo_color)}>{"Combo"}</span>
                <span id="combo" style={format!("{} color:{};", value_style, combo_color)}>{ format_combo(props.combo) }</span>
            </div>
        </div>
    }
}
