use yew_poke_whack::components::App;

fn main() {
    let _ = console_log::init_with_level(log::Level::Info);
    yew::Renderer::<App>::new().render();
}
