use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NotificationBannerProps {
    pub text: Option<String>,
}

#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    let Some(text) = &props.text else {
        return html! {};
    };
    html! {<div id="event-notification" class="show" style="position:absolute; top:12px; left:50%; transform:translateX(-50%); background:rgba(22,27,34,0.95); border:1px solid #d4af37; color:#d4af37; border-radius:8px; padding:8px 18px; font-size:20px; font-weight:600; z-index:5;">
        { text.clone() }
    </div>}
}
