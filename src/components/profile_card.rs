use super::{image_gallery::ImageGallery, profile_info::ProfileInfo, status_label::StatusLabel};
use crate::model::ProfileItem;
use crate::state::{Direction, SwipeConfig, TouchSession};
use crate::util::clog;
use web_sys::TouchEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileCardProps {
    pub profile: ProfileItem,
    /// Fired once per swipe that ends past the threshold, either direction.
    pub on_next: Callback<()>,
    #[prop_or_default]
    pub config: SwipeConfig,
}

// Only the first contact point is read; extra fingers are ignored.
fn first_client_x(e: &TouchEvent) -> Option<f64> {
    e.touches().item(0).map(|t| t.client_x() as f64)
}

#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let session = use_mut_ref(|| TouchSession::with_config(props.config.clone()));
    let trigger = use_force_update();

    let on_touch_start = {
        let session = session.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(x) = first_client_x(&e) else { return };
            if session.borrow_mut().touch_start(x, e.touches().length()) {
                trigger.force_update();
            }
        })
    };
    let on_touch_move = {
        let session = session.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(x) = first_client_x(&e) else { return };
            if session.borrow_mut().move_to(x) {
                trigger.force_update();
            } else {
                clog("touchmove without touchstart ignored");
            }
        })
    };
    let on_touch_end = {
        let session = session.clone();
        let trigger = trigger.clone();
        let on_next = props.on_next.clone();
        let id = props.profile.id;
        Callback::from(move |e: TouchEvent| {
            let was_active = session.borrow().active;
            let committed = session.borrow_mut().touch_end(e.touches().length());
            if let Some(dir) = committed {
                clog(&format!("swipe {:?} on card {}", dir, id));
                on_next.emit(());
            }
            if was_active && !session.borrow().active {
                trigger.force_update();
            }
        })
    };
    let on_touch_cancel = {
        let session = session.clone();
        let trigger = trigger.clone();
        Callback::from(move |_: TouchEvent| {
            session.borrow_mut().cancel();
            trigger.force_update();
        })
    };

    let s = session.borrow();
    let card_style = format!(
        "position:relative; width:100%; max-width:384px; background:#fff; border-radius:12px; overflow:hidden; box-shadow:0 10px 25px rgba(0,0,0,0.25); touch-action:pan-y; user-select:none; {}",
        s.transform().to_style()
    );
    let overlay = match (s.locked_direction, s.overlay_label()) {
        (Direction::Right, Some(label)) => html! {
            <div style="position:absolute; top:20px; left:20px; z-index:20; transform:rotate(-30deg); border:4px solid #22c55e; padding:8px; border-radius:8px;">
                <span style="color:#22c55e; font-weight:700; font-size:30px;">{ label }</span>
            </div>
        },
        (Direction::Left, Some(label)) => html! {
            <div style="position:absolute; top:20px; right:20px; z-index:20; transform:rotate(30deg); border:4px solid #ef4444; padding:8px; border-radius:8px;">
                <span style="color:#ef4444; font-weight:700; font-size:30px;">{ label }</span>
            </div>
        },
        _ => html! {},
    };
    let p = &props.profile;

    html! {
        <div style={card_style}
            ontouchstart={on_touch_start}
            ontouchmove={on_touch_move}
            ontouchend={on_touch_end}
            ontouchcancel={on_touch_cancel}>
            { overlay }
            <div style="position:relative; height:384px; background:#d1d5db;">
                <StatusLabel status={p.status} />
                <ImageGallery images={p.images.clone()} />
                <div style="position:absolute; left:0; right:0; bottom:0; padding:16px; z-index:10;">
                    <ProfileInfo name={p.name.clone()} age={p.age} bio={p.bio.clone()} />
                </div>
            </div>
        </div>
    }
}
