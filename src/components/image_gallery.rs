use crate::state::ImageCursor;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageGalleryProps {
    pub images: Vec<String>,
}

#[function_component(ImageGallery)]
pub fn image_gallery(props: &ImageGalleryProps) -> Html {
    let cursor = use_state(|| ImageCursor::new(props.images.len()));

    // Gallery taps must not bubble up to the card's open-details tap.
    let prev_cb = {
        let cursor = cursor.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cursor.set(cursor.prev());
        })
    };
    let next_cb = {
        let cursor = cursor.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cursor.set(cursor.next());
        })
    };
    let dots = (0..props.images.len()).map(|i| {
        let cursor_dot = cursor.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cursor_dot.set(cursor_dot.select(i));
        });
        let bg = if cursor.is_active(i) { "#fff" } else { "#9ca3af" };
        html! { <span key={i} {onclick} style={format!("width:8px; height:8px; margin:0 4px; border-radius:9999px; background:{}; cursor:pointer;", bg)}></span> }
    });
    let src = props.images.get(cursor.index).cloned().unwrap_or_default();
    let nav_button = "width:40px; height:40px; border:none; border-radius:9999px; background:rgba(255,255,255,0.5); color:#fff; font-size:22px; cursor:pointer;";

    html! {<>
        <div style="position:absolute; inset:0; overflow:hidden;">
            <img src={src} draggable="false" style="width:100%; height:100%; object-fit:cover;" />
            <div style="position:absolute; left:0; right:0; bottom:0; height:128px; background:linear-gradient(to top, #000, transparent); opacity:0.7;"></div>
        </div>
        <div style="position:absolute; top:0; bottom:0; left:8px; display:flex; align-items:center;">
            <button style={nav_button} onclick={prev_cb}>{"<"}</button>
        </div>
        <div style="position:absolute; top:0; bottom:0; right:8px; display:flex; align-items:center;">
            <button style={nav_button} onclick={next_cb}>{">"}</button>
        </div>
        <div style="position:absolute; bottom:16px; left:0; right:0; display:flex; justify-content:center;">
            { for dots }
        </div>
    </>}
}
