use crate::config::Difficulty;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub running: bool,
    pub difficulty: Difficulty,
    pub on_start: Callback<()>,
    pub on_difficulty: Callback<Difficulty>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let start_cb = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let start_label = if props.running { "Game Running..." } else { "Start Game" };
    let difficulty_buttons = Difficulty::ALL.iter().map(|&level| {
        let cb = props.on_difficulty.clone();
        let onclick = Callback::from(move |_| cb.emit(level));
        let active = level == props.difficulty;
        let style = if active {
            "flex:1; background:#1f6feb; border:1px solid #58a6ff; color:#fff;"
        } else {
            "flex:1;"
        };
        html! {
            <button id={format!("{}-btn", level)} class={classes!("difficulty-btn", active.then_some("active"))} style={style} onclick={onclick}>
                { level.label() }
            </button>
        }
    });
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px;">
        <button id="start-btn" onclick={start_cb} disabled={props.running}>{ start_label }</button>
        <div style="display:flex; gap:6px;">{ for difficulty_buttons }</div>
        <div style="font-size:11px; opacity:0.7;">{ format!("A Pokémon every {:.1}s", props.difficulty.cadence_ms() as f64 / 1000.0) }</div>
    </div>}
}
