use super::legend::LegendRow;
use crate::model::Variant;
use yew::prelude::*;

/// Glow colour the board uses for each visual tag.
pub fn glow_color(tag: &str) -> &'static str {
    match tag {
        "avoid-click" => "#f85149",
        "shiny-pokemon" => "#d4af37",
        _ => "#2ea043",
    }
}

#[function_component]
pub fn LegendPanel() -> Html {
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:170px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
        <LegendRow color={glow_color(Variant::Normal.visual_tag())} label="Catch it" />
        <LegendRow color={glow_color(Variant::Shiny.visual_tag())} label="Shiny / Legendary bonus" />
        <LegendRow color={glow_color(Variant::Hazard.visual_tag())} label="Zubat: game over" />
    </div>}
}
