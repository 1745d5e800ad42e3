use super::router::use_router;
use crate::model::current_user;
use crate::state::RouteId;
use yew::prelude::*;

#[function_component(ProfileView)]
pub fn profile_view() -> Html {
    let router = use_router();
    let user = use_memo((), |_| current_user());

    // Neither route has a screen yet; both currently land on Home.
    let create_cb = {
        let router = router.clone();
        Callback::from(move |_: MouseEvent| router.go(RouteId::CreateProject))
    };
    let settings_cb = {
        let router = router.clone();
        Callback::from(move |_: MouseEvent| router.go(RouteId::Settings))
    };

    let card = "background:#fff; border-radius:12px; box-shadow:0 4px 10px rgba(0,0,0,0.1);";
    let chip = "background:#dbeafe; color:#1e40af; padding:4px 8px; border-radius:4px;";
    html! {<div style="padding:16px; display:flex; flex-direction:column; gap:16px;">
        <div style={format!("{} padding:24px;", card)}>
            <div style="display:flex; align-items:center; margin-bottom:16px;">
                <div style="width:80px; height:80px; background:#d1d5db; border-radius:9999px; margin-right:16px;"></div>
                <div style="display:flex; flex-direction:column;">
                    <span style="font-size:20px; font-weight:700;">{ user.name.clone() }</span>
                    <span style="color:#4b5563;">{ user.headline.clone() }</span>
                </div>
            </div>
            <div style="margin-bottom:16px;">
                <div style="font-weight:700; margin-bottom:4px;">{"About me"}</div>
                <div style="color:#374151;">{ user.about.clone() }</div>
            </div>
            <div style="margin-bottom:16px;">
                <div style="font-weight:700; margin-bottom:4px;">{"Skills"}</div>
                <div style="display:flex; flex-wrap:wrap; gap:8px;">
                    { for user.skills.iter().map(|s| html!{ <span key={s.clone()} style={chip}>{ s.clone() }</span> }) }
                </div>
            </div>
            <div>
                <div style="font-weight:700; margin-bottom:4px;">{"Availability"}</div>
                <div style="color:#374151;">{ user.availability.clone() }</div>
            </div>
        </div>
        <div onclick={create_cb} style={format!("{} padding:16px; display:flex; align-items:center; cursor:pointer;", card)}>
            <span style="width:40px; height:40px; background:#3b82f6; color:#fff; border-radius:9999px; display:flex; align-items:center; justify-content:center; margin-right:16px; font-size:20px;">{"+"}</span>
            <span style="font-weight:700;">{"Create new project"}</span>
        </div>
        <div onclick={settings_cb} style={format!("{} padding:16px; display:flex; align-items:center; cursor:pointer;", card)}>
            <span style="width:40px; height:40px; background:#e5e7eb; border-radius:9999px; display:flex; align-items:center; justify-content:center; margin-right:16px; font-size:20px;">{"⚙️"}</span>
            <span style="font-weight:700;">{"Settings"}</span>
        </div>
    </div>}
}
