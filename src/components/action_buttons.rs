use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActionButtonsProps {
    pub on_next: Callback<()>,
}

// Nope and like both just move to the next card.
#[function_component]
pub fn ActionButtons(props: &ActionButtonsProps) -> Html {
    let nope_cb = {
        let cb = props.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let like_cb = {
        let cb = props.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let circle = "width:80px; height:80px; border-radius:9999px; border:none; background:#fff; box-shadow:0 4px 12px rgba(0,0,0,0.15); font-size:36px; cursor:pointer;";
    html! {<div style="display:flex; justify-content:space-around;">
        <button style={format!("{} color:#ef4444;", circle)} onclick={nope_cb} title="Nope">{"✕"}</button>
        <button style={format!("{} color:#22c55e;", circle)} onclick={like_cb} title="Like">{"✓"}</button>
    </div>}
}
