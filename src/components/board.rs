use super::legend_panel::glow_color;
use crate::model::SlotId;
use crate::state::{HoleView, InputSource};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    pub holes: Vec<HoleView>,
    pub on_activate: Callback<(SlotId, InputSource)>,
}

/// Columns for a roughly square board.
fn columns(slots: usize) -> usize {
    let mut cols = 1;
    while cols * cols < slots {
        cols += 1;
    }
    cols
}

#[function_component]
pub fn Board(props: &BoardProps) -> Html {
    let holes = props.holes.iter().enumerate().map(|(slot, hole)| {
        let onclick = {
            let cb = props.on_activate.clone();
            Callback::from(move |_: MouseEvent| cb.emit((slot, InputSource::Pointer)))
        };
        let ontouchstart = {
            let cb = props.on_activate.clone();
            Callback::from(move |e: TouchEvent| {
                e.prevent_default();
                cb.emit((slot, InputSource::Touch));
            })
        };
        let sprite_style = match &hole.image {
            Some(url) => format!(
                "position:absolute; left:10%; width:80%; height:80%; bottom:4px; transition:bottom 0.12s; background:url({}) center/contain no-repeat; border-radius:50%; box-shadow:0 0 14px 4px {};",
                url,
                glow_color(&hole.tag)
            ),
            None => "position:absolute; left:10%; width:80%; height:80%; bottom:-90%; transition:bottom 0.12s;".to_string(),
        };
        let message = match &hole.message {
            Some((text, _)) => html! {
                <div class="catch-message" style="position:absolute; top:-18px; left:50%; transform:translateX(-50%); white-space:nowrap; font-size:12px; font-weight:600; color:#2ea043;">{ text.clone() }</div>
            },
            None => html! {},
        };
        let tag = (!hole.tag.is_empty()).then(|| hole.tag.clone());
        html! {
            <div class={classes!("hole", hole.is_up().then_some("up"), tag)}
                style="position:relative; width:110px; height:110px; border-radius:50%; background:radial-gradient(circle at 50% 70%, #3d2b1f 55%, #1d140e 70%); overflow:visible; cursor:pointer; user-select:none;"
                onclick={onclick}
                ontouchstart={ontouchstart}>
                <div class="pokemon" style={sprite_style}></div>
                { message }
            </div>
        }
    });
    let grid = format!(
        "display:grid; grid-template-columns:repeat({}, 110px); gap:18px; padding:24px; background:rgba(22,27,34,0.6); border:1px solid #30363d; border-radius:16px;",
        columns(props.holes.len())
    );
    html! { <div id="game-board" style={grid}>{ for holes }</div> }
}
