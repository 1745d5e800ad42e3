use super::{
    home_view::HomeView, messages_view::MessagesView, profile_view::ProfileView,
    project_view::ProjectView,
};
use crate::state::{Params, RouteId, RouteState, RouterAction, Screen};
use crate::util::clog;
use yew::prelude::*;

// Shared navigation handle: screens read `state` and move on via `navigate`.
#[derive(Clone, PartialEq)]
pub struct RouterContext {
    pub state: RouteState,
    pub on_navigate: Callback<(RouteId, Params)>,
}

impl RouterContext {
    pub fn navigate(&self, route: RouteId, params: Params) {
        self.on_navigate.emit((route, params));
    }

    /// Navigate with an empty params bag.
    pub fn go(&self, route: RouteId) {
        self.navigate(route, Params::default());
    }
}

impl Default for RouterContext {
    fn default() -> Self {
        Self {
            state: RouteState::default(),
            on_navigate: Callback::noop(),
        }
    }
}

/// Outside a `RouterProvider` this yields Home with a navigate that does nothing.
#[hook]
pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct RouterProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RouterProvider)]
pub fn router_provider(props: &RouterProviderProps) -> Html {
    let route_state = use_reducer(RouteState::default);

    let on_navigate = {
        let route_state = route_state.clone();
        Callback::from(move |(route, params): (RouteId, Params)| {
            let next = RouteState {
                current_route: route,
                params,
            };
            clog(&format!("navigate {}", next.log_line()));
            route_state.dispatch(RouterAction::Navigate {
                route: next.current_route,
                params: next.params,
            });
        })
    };

    let ctx = RouterContext {
        state: (*route_state).clone(),
        on_navigate,
    };

    html! { <ContextProvider<RouterContext> context={ctx}>{ props.children.clone() }</ContextProvider<RouterContext>> }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    let router = use_router();
    let screen = Screen::resolve(&router.state);
    let key = screen.key();
    match screen {
        Screen::Home => html! { <HomeView key={key} /> },
        Screen::Profile => html! { <ProfileView key={key} /> },
        Screen::Messages => html! { <MessagesView key={key} /> },
        Screen::ProjectDetails {
            project_id,
            show_chat,
        } => html! { <ProjectView key={key} {project_id} {show_chat} /> },
    }
}
