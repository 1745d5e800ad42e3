use super::router::use_router;
use crate::state::RouteId;
use yew::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let router = use_router();
    let to = |route: RouteId| {
        let router = router.clone();
        Callback::from(move |_: MouseEvent| router.go(route))
    };
    let button_style = "background:none; border:none; font-size:28px; cursor:pointer;";
    html! {<div style="padding:16px; background:#fff; box-shadow:0 2px 6px rgba(0,0,0,0.12);">
        <div style="display:flex; justify-content:space-around; align-items:center;">
            <button style={button_style} onclick={to(RouteId::Profile)} title="Profile">{"👤"}</button>
            <button style={button_style} onclick={to(RouteId::Home)} title="Home">{"🔥"}</button>
            <button style={button_style} onclick={to(RouteId::Messages)} title="Messages">{"💬"}</button>
        </div>
    </div>}
}
