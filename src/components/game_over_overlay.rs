use crate::util::format_score;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    /// Final score; `None` hides the overlay.
    pub final_score: Option<u64>,
    pub high_score: u64,
    pub play_again: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    let Some(score) = props.final_score else {
        return html! {};
    };
    let play_again_cb = props.play_again.clone();
    let play_again_btn = Callback::from(move |_| play_again_cb.emit(()));
    let new_best = score > 0 && score >= props.high_score;
    html! {
        <div id="game-over-screen" class="show" style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px; z-index:20;">
            <h2 style="margin:0 0 12px 0; color:#f85149;">{"Game Over"}</h2>
            <p style="margin:4px 0;">{"You caught a Zubat!"}</p>
            <p style="margin:4px 0;">{"Final Score: "}<span id="final-score">{ format_score(score) }</span></p>
            { if new_best { html!{ <p style="margin:4px 0; color:#d4af37;">{"New High Score!"}</p> } } else { html!{} } }
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button id="play-again-btn" onclick={play_again_btn}>{"Play Again"}</button>
            </div>
        </div>
    }
}
