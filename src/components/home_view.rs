use super::{action_buttons::ActionButtons, profile_card::ProfileCard, router::use_router};
use crate::model::profile_items;
use crate::state::{Deck, Params, RouteId, PROJECT_ID};
use yew::prelude::*;

#[function_component(HomeView)]
pub fn home_view() -> Html {
    let router = use_router();
    let items = use_memo((), |_| profile_items());
    let deck = use_state(|| Deck::new(items.len()));

    let Some(current) = deck.current().and_then(|i| items.get(i)).cloned() else {
        return html! {<div style="padding:32px; text-align:center; color:#6b7280;">{"No projects to show right now."}</div>};
    };

    let on_next = {
        let deck = deck.clone();
        Callback::from(move |_: ()| deck.set(deck.advance()))
    };
    let open_details = {
        let router = router.clone();
        let id = current.id;
        Callback::from(move |_: MouseEvent| {
            router.navigate(RouteId::ProjectDetails, Params::new().with(PROJECT_ID, id));
        })
    };

    html! {<>
        <div style="display:flex; justify-content:center; padding:16px;">
            <div onclick={open_details} style="width:100%; display:flex; justify-content:center;">
                // keyed per turn so the next card starts with a fresh touch session and gallery
                <ProfileCard key={format!("{}-{}", deck.turn, current.id)} profile={current.clone()} on_next={on_next.clone()} />
            </div>
        </div>
        <div style="margin-top:auto; margin-bottom:40px;">
            <ActionButtons on_next={on_next} />
        </div>
    </>}
}
