use super::{
    navbar::Navbar,
    router::{AppRouter, RouterProvider},
};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <RouterProvider>
            <div style="display:flex; flex-direction:column; width:100%; min-height:100vh; background:#f3f4f6; font-family:sans-serif;">
                <Navbar />
                <div style="display:flex; flex-direction:column; flex:1;">
                    <AppRouter />
                </div>
            </div>
        </RouterProvider>
    }
}
