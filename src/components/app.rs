use super::{
    board::Board, controls_panel::ControlsPanel, game_over_overlay::GameOverOverlay,
    intro_overlay::IntroOverlay, legend_panel::LegendPanel,
    notification_banner::NotificationBanner, stats_panel::StatsPanel,
};
use crate::catalog::Catalog;
use crate::config::{Difficulty, GameConfig};
use crate::model::SlotId;
use crate::session::Game;
use crate::state::{BoardView, InputSource, TouchGate};
use crate::web::{self, WebHost, storage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

/// Host clock resolution for timers and banner expiry.
const TICK_MS: i32 = 16;

#[function_component(App)]
pub fn app() -> Html {
    let force = use_force_update();
    let settings = use_mut_ref(storage::load_settings);
    let config = GameConfig {
        difficulty: settings.borrow().difficulty,
        ..GameConfig::default()
    };
    let view = use_mut_ref(|| BoardView::new(config.board_slots));
    let gate = use_mut_ref(TouchGate::default);
    let show_intro = use_state(|| true);
    let game: Rc<RefCell<Game<WebHost>>> = {
        let view = view.clone();
        let force = force.clone();
        use_mut_ref(move || {
            let redraw = Callback::from(move |_: ()| force.force_update());
            let seed = js_sys::Date::now() as u64;
            log::info!("board ready with seed {seed}");
            Game::with_seed(config, Catalog::standard(), WebHost::new(view, redraw), seed)
        })
    };

    // Drive the game clock
    {
        let game = game.clone();
        let view = view.clone();
        let force = force.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let tick = Closure::wrap(Box::new(move || {
                let now = web::now_ms();
                let expired = view.borrow_mut().prune(now);
                game.borrow_mut().advance(now);
                if expired {
                    force.force_update();
                }
            }) as Box<dyn FnMut()>);
            let tick_id = window.as_ref().and_then(|w| {
                w.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    TICK_MS,
                )
                .ok()
            });
            move || {
                if let (Some(w), Some(id)) = (window, tick_id) {
                    w.clear_interval_with_handle(id);
                }
                drop(tick);
            }
        });
    }

    let on_activate = {
        let game = game.clone();
        let view = view.clone();
        let gate = gate.clone();
        Callback::from(move |(slot, source): (SlotId, InputSource)| {
            let now = web::now_ms();
            if !gate.borrow_mut().admit(source, slot, now) {
                return;
            }
            view.borrow_mut().prune(now);
            let outcome = game.borrow_mut().activate(slot, now);
            log::debug!("slot {slot}: {outcome:?}");
        })
    };
    let on_start = {
        let game = game.clone();
        let view = view.clone();
        let show_intro = show_intro.clone();
        Callback::from(move |_: ()| {
            show_intro.set(false);
            let now = web::now_ms();
            view.borrow_mut().prune(now);
            game.borrow_mut().start(now);
        })
    };
    let on_difficulty = {
        let game = game.clone();
        let settings = settings.clone();
        let force = force.clone();
        Callback::from(move |level: Difficulty| {
            game.borrow_mut().set_difficulty(level, web::now_ms());
            {
                let mut s = settings.borrow_mut();
                s.difficulty = level;
                storage::save_settings(&s);
            }
            force.force_update();
        })
    };
    let hide_intro = {
        let show_intro = show_intro.clone();
        Callback::from(move |_: ()| show_intro.set(false))
    };

    let v = view.borrow().clone();
    let difficulty = settings.borrow().difficulty;
    let banner = v.banner.as_ref().map(|b| b.text.clone());
    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; display:flex; align-items:center; justify-content:center; background:#0d1117; color:#c9d1d9; font-family:sans-serif; overflow:hidden;">
            <Board holes={v.holes.clone()} on_activate={on_activate} />
            <StatsPanel score={v.score} high_score={v.high_score} combo={v.combo} />
            <ControlsPanel running={v.running} difficulty={difficulty} on_start={on_start.clone()} on_difficulty={on_difficulty} />
            <NotificationBanner text={banner} />
            <LegendPanel />
            <IntroOverlay show={*show_intro && !v.running && v.game_over.is_none()} start={on_start.clone()} hide_intro={hide_intro} />
            <GameOverOverlay final_score={v.game_over} high_score={v.high_score} play_again={on_start} />
        </div>
    }
}
