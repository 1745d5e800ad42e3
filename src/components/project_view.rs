use super::router::use_router;
use crate::model::{find_project, projects, push_message, seed_thread};
use crate::state::RouteId;
use crate::util::{clock_label, clog};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Details,
    Chat,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectViewProps {
    pub project_id: u64,
    /// Open on the chat tab instead of details.
    pub show_chat: bool,
}

#[function_component(ProjectView)]
pub fn project_view(props: &ProjectViewProps) -> Html {
    let router = use_router();
    let catalog = use_memo((), |_| projects());
    let tab = use_state(|| if props.show_chat { Tab::Chat } else { Tab::Details });
    let draft = use_state(String::new);
    let thread = use_state(seed_thread);

    let Some(project) = find_project(&catalog, props.project_id).cloned() else {
        return html! {};
    };

    let back_cb = {
        let router = router.clone();
        Callback::from(move |_: MouseEvent| router.go(RouteId::Home))
    };
    let interest_cb = {
        let router = router.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message("You've shown interest in this project!");
            }
            router.go(RouteId::Messages);
        })
    };
    let tab_cb = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };
    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let send = {
        let draft = draft.clone();
        let thread = thread.clone();
        let id = project.profile.id;
        move || {
            let mut next = (*thread).clone();
            if push_message(&mut next, &draft, clock_label()) {
                clog(&format!("local message on project {}", id));
                thread.set(next);
                draft.set(String::new());
            }
        }
    };
    let send_click = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send())
    };
    let send_key = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            send();
        }
    });

    let tab_style = |t: Tab| {
        if *tab == t {
            "flex:1; padding:12px 0; text-align:center; border-bottom:2px solid #3b82f6; font-weight:700; cursor:pointer;"
        } else {
            "flex:1; padding:12px 0; text-align:center; cursor:pointer;"
        }
    };
    let chips = |items: &[String], style: &'static str| -> Html {
        items
            .iter()
            .map(|t| html! { <span key={t.clone()} style={style}>{ t.clone() }</span> })
            .collect()
    };

    let content = match *tab {
        Tab::Details => html! {<div style="padding:16px;">
            <div style="margin-bottom:16px; height:192px; background:#e5e7eb; border-radius:8px; overflow:hidden;">
                <img src={project.profile.images.first().cloned().unwrap_or_default()} style="width:100%; height:100%; object-fit:cover;" />
            </div>
            <div style="background:#fff; border-radius:8px; box-shadow:0 1px 4px rgba(0,0,0,0.12); padding:16px; margin-bottom:16px; display:flex; flex-direction:column; gap:12px;">
                <span style="font-weight:700; font-size:18px;">{ project.profile.name.clone() }</span>
                <span style="color:#374151;">{ project.description.clone() }</span>
                <div>
                    <div style="font-weight:700; margin-bottom:4px;">{"Tech stack:"}</div>
                    <div style="display:flex; flex-wrap:wrap; gap:8px;">
                        { chips(&project.tech_stack, "background:#dbeafe; color:#1e40af; padding:4px 8px; border-radius:4px;") }
                    </div>
                </div>
                <div>
                    <div style="font-weight:700; margin-bottom:4px;">{"Looking for:"}</div>
                    <div style="display:flex; flex-wrap:wrap; gap:8px;">
                        { chips(&project.looking_for, "background:#dcfce7; color:#166534; padding:4px 8px; border-radius:4px;") }
                    </div>
                </div>
                <div><b>{"Time commitment: "}</b><span style="color:#374151;">{ project.time_commitment.clone() }</span></div>
                <div><b>{"Team size: "}</b><span style="color:#374151;">{ format!("{} people", project.team_size) }</span></div>
                <div><b>{"Contact: "}</b><span style="color:#374151;">{ project.contact_person.clone() }</span></div>
            </div>
            <div style="display:flex; gap:12px;">
                <button onclick={back_cb.clone()} style="flex:1; background:#e5e7eb; border:none; border-radius:8px; padding:12px; font-weight:700;">{"Back"}</button>
                <button onclick={interest_cb} style="flex:1; background:#3b82f6; color:#fff; border:none; border-radius:8px; padding:12px; font-weight:700;">{"Express interest"}</button>
            </div>
        </div>},
        Tab::Chat => html! {<div style="display:flex; flex-direction:column; height:100%;">
            <div style="flex:1; padding:16px; overflow:auto; display:flex; flex-direction:column; gap:8px;">
                { for thread.iter().enumerate().map(|(i, m)| {
                    let style = if m.from_me {
                        "background:#3b82f6; color:#fff; border-radius:8px; padding:12px; max-width:320px; margin-left:auto;"
                    } else {
                        "background:#e5e7eb; border-radius:8px; padding:12px; max-width:320px;"
                    };
                    html! {<div key={i} style={style}>
                        <span>{ m.text.clone() }</span>
                        { if m.time.is_empty() { html!{} } else { html!{ <div style="font-size:10px; opacity:0.7; text-align:right;">{ m.time.clone() }</div> } } }
                    </div>}
                }) }
            </div>
            <div style="padding:16px; border-top:1px solid #e5e7eb; display:flex;">
                <input
                    style="flex:1; background:#f3f4f6; border:none; border-radius:9999px; padding:8px 16px;"
                    placeholder="Write a message..."
                    value={(*draft).clone()}
                    oninput={on_input}
                    onkeydown={send_key} />
                <button onclick={send_click} style="margin-left:8px; width:40px; height:40px; background:#3b82f6; color:#fff; border:none; border-radius:9999px;">{"→"}</button>
            </div>
        </div>},
    };

    html! {<div style="display:flex; flex-direction:column; height:100%;">
        <div style="background:#fff; padding:16px; display:flex; align-items:center; box-shadow:0 1px 3px rgba(0,0,0,0.1);">
            <button onclick={back_cb} style="width:32px; height:32px; background:none; border:none; font-size:20px; cursor:pointer;">{"<"}</button>
            <span style="margin-left:16px; font-size:18px; font-weight:700; flex:1;">{ project.profile.name.clone() }</span>
        </div>
        <div style="display:flex; border-bottom:1px solid #e5e7eb; background:#fff;">
            <div style={tab_style(Tab::Details)} onclick={tab_cb(Tab::Details)}>{"Details"}</div>
            <div style={tab_style(Tab::Chat)} onclick={tab_cb(Tab::Chat)}>{"Chat"}</div>
        </div>
        <div style="flex:1; overflow:auto;">
            { content }
        </div>
    </div>}
}
