use super::router::use_router;
use crate::model::contacts;
use crate::state::{Params, RouteId, PROJECT_ID, SHOW_CHAT};
use yew::prelude::*;

#[function_component(MessagesView)]
pub fn messages_view() -> Html {
    let router = use_router();
    let list = use_memo((), |_| contacts());

    let rows = list.iter().map(|c| {
        let onclick = {
            let router = router.clone();
            let id = c.id;
            Callback::from(move |_: MouseEvent| {
                router.navigate(
                    RouteId::ProjectDetails,
                    Params::new().with(PROJECT_ID, id).with(SHOW_CHAT, true),
                );
            })
        };
        let badge = if c.unread_count > 0 {
            html! {<span style="background:#3b82f6; color:#fff; border-radius:9999px; width:20px; height:20px; display:flex; align-items:center; justify-content:center; font-size:12px;">{ c.unread_count }</span>}
        } else {
            html! {}
        };
        html! {<div key={c.id} {onclick} style="padding:16px; border-bottom:1px solid #e5e7eb; display:flex; align-items:center; cursor:pointer; background:#fff;">
            <div style="width:48px; height:48px; background:#d1d5db; border-radius:9999px; margin-right:12px; flex-shrink:0;"></div>
            <div style="flex:1; min-width:0;">
                <div style="display:flex; justify-content:space-between;">
                    <span style="font-weight:700;">{ c.name.clone() }</span>
                    <span style="font-size:12px; color:#6b7280;">{ c.last_message_time.clone() }</span>
                </div>
                <div style="display:flex; justify-content:space-between; gap:8px;">
                    <span style="color:#4b5563; font-size:14px; white-space:nowrap; overflow:hidden; text-overflow:ellipsis;">{ c.last_message.clone() }</span>
                    { badge }
                </div>
            </div>
        </div>}
    });

    html! {<div style="display:flex; flex-direction:column; height:100%;">
        <div style="padding:16px; background:#fff; box-shadow:0 1px 3px rgba(0,0,0,0.1);">
            <span style="font-size:20px; font-weight:700;">{"Messages"}</span>
        </div>
        <div style="flex:1; overflow:auto;">
            { for rows }
        </div>
    </div>}
}
