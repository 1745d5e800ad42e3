use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileInfoProps {
    pub name: String,
    pub age: u32,
    pub bio: String,
}

#[function_component(ProfileInfo)]
pub fn profile_info(props: &ProfileInfoProps) -> Html {
    let shadow = "color:#fff; text-shadow:0 2px 4px rgba(0,0,0,0.8);";
    html! {<div style="display:flex; flex-direction:column; z-index:10;">
        <div style="display:flex; align-items:baseline; gap:8px;">
            <span style={format!("{} font-size:20px; font-weight:700;", shadow)}>{ props.name.clone() }</span>
            <span style={format!("{} font-size:18px;", shadow)}>{ props.age }</span>
        </div>
        <span style={format!("{} margin-top:4px;", shadow)}>{ props.bio.clone() }</span>
    </div>}
}
