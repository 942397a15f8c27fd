use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub start: Callback<()>,
    pub hide_intro: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let hide_cb = props.hide_intro.clone();
    let hide_btn = Callback::from(move |_| hide_cb.emit(()));
    let start_cb = props.start.clone();
    let start_btn = Callback::from(move |_| start_cb.emit(()));
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4; z-index:10;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff; text-align:center;">{"Poké Whack"}</h2>
            <p style="margin:4px 0 10px 0; text-align:center; opacity:0.85;">{"Catch them before they duck back down."}</p>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Click or tap a Pokémon to catch it. Points scale with your combo."}</li>
                <li>{"Three catches in a row raise the combo (up to 5x). Three seconds without a catch, or a Pokémon escaping, resets it."}</li>
                <li>{"Catch the same Pokémon three times in a row for a streak bonus."}</li>
                <li>{"Shiny Pokémon are worth double; Legendaries are worth 100."}</li>
                <li>{"Never catch a Zubat: it ends the game."}</li>
            </ul>
            <div style="display:flex; gap:12px; justify-content:center; margin-top:8px;">
                <button onclick={start_btn}>{"Start"}</button>
                <button onclick={hide_btn}>{"Close"}</button>
            </div>
        </div>
    }
}
