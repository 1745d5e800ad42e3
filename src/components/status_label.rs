use crate::model::MatchStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusLabelProps {
    pub status: MatchStatus,
}

#[function_component]
pub fn StatusLabel(props: &StatusLabelProps) -> Html {
    html! {<div style="position:absolute; top:16px; left:0; right:0; display:flex; justify-content:center; z-index:10;">
        <div style={format!("background:{}; padding:4px 16px; border-radius:9999px; box-shadow:0 4px 10px rgba(0,0,0,0.3);", props.status.color())}>
            <span style="color:#fff; font-weight:700;">{ props.status.label() }</span>
        </div>
    </div>}
}
