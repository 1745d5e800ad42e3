//! Flat, history-less navigation state.
//!
//! One [`RouteState`] lives for the whole app. It only changes through
//! [`RouterAction::Navigate`], which replaces route and params wholesale.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RouteId {
    #[default]
    Home,
    Profile,
    Messages,
    ProjectDetails,
    Settings,
    CreateProject,
}

pub const PROJECT_ID: &str = "projectId";
pub const SHOW_CHAT: &str = "showChat";

/// Opaque key/value bag handed along with a navigation. The router never
/// inspects it; screens read keys by convention and bring their own defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn u64_or(&self, key: &str, default: u64) -> u64 {
        self.get(key).and_then(Value::as_u64).unwrap_or(default)
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteState {
    pub current_route: RouteId,
    pub params: Params,
}

impl RouteState {
    /// One-line JSON snapshot for the navigation log.
    pub fn log_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Clone, Debug)]
pub enum RouterAction {
    Navigate { route: RouteId, params: Params },
}

impl Reducible for RouteState {
    type Action = RouterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // no transition table: any route is reachable from any other
            RouterAction::Navigate { route, params } => Rc::new(RouteState {
                current_route: route,
                params,
            }),
        }
    }
}

/// What actually gets mounted for a route, with its params already decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Profile,
    Messages,
    ProjectDetails { project_id: u64, show_chat: bool },
}

impl Screen {
    /// Total mapping; routes without a screen of their own land on Home.
    pub fn resolve(state: &RouteState) -> Self {
        match state.current_route {
            RouteId::Home => Screen::Home,
            RouteId::Profile => Screen::Profile,
            RouteId::Messages => Screen::Messages,
            RouteId::ProjectDetails => Screen::ProjectDetails {
                project_id: state.params.u64_or(PROJECT_ID, 1),
                show_chat: state.params.bool_or(SHOW_CHAT, false),
            },
            RouteId::Settings | RouteId::CreateProject => Screen::Home,
        }
    }

    /// Remount key: changes whenever the screen or its decoded params change.
    pub fn key(&self) -> String {
        match self {
            Screen::Home => "home".to_string(),
            Screen::Profile => "profile".to_string(),
            Screen::Messages => "messages".to_string(),
            Screen::ProjectDetails {
                project_id,
                show_chat,
            } => format!("project-{}-{}", project_id, show_chat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigate(state: RouteState, route: RouteId, params: Params) -> Rc<RouteState> {
        Rc::new(state).reduce(RouterAction::Navigate { route, params })
    }

    #[test]
    fn starts_on_home_with_empty_params() {
        let s = RouteState::default();
        assert_eq!(s.current_route, RouteId::Home);
        assert!(s.params.is_empty());
        assert_eq!(Screen::resolve(&s), Screen::Home);
    }

    #[test]
    fn navigate_replaces_route_and_params() {
        let p = Params::new().with(PROJECT_ID, 2);
        let s = navigate(RouteState::default(), RouteId::ProjectDetails, p.clone());
        assert_eq!(s.current_route, RouteId::ProjectDetails);
        assert_eq!(s.params, p);
        assert_eq!(s.params.u64_or(PROJECT_ID, 1), 2);
    }

    #[test]
    fn omitted_params_clear_previous_ones() {
        let s = navigate(
            RouteState::default(),
            RouteId::ProjectDetails,
            Params::new().with(PROJECT_ID, 3).with(SHOW_CHAT, true),
        );
        let s = navigate((*s).clone(), RouteId::Home, Params::default());
        assert_eq!(s.current_route, RouteId::Home);
        assert!(s.params.is_empty());
    }

    #[test]
    fn navigate_always_produces_fresh_state() {
        let first = Rc::new(RouteState::default());
        let second = first.clone().reduce(RouterAction::Navigate {
            route: RouteId::Home,
            params: Params::default(),
        });
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn unmapped_routes_render_home() {
        for route in [RouteId::Settings, RouteId::CreateProject] {
            let s = navigate(RouteState::default(), route, Params::default());
            assert_eq!(Screen::resolve(&s), Screen::Home);
        }
    }

    #[test]
    fn project_screen_decodes_params_with_defaults() {
        let s = navigate(RouteState::default(), RouteId::ProjectDetails, Params::default());
        assert_eq!(
            Screen::resolve(&s),
            Screen::ProjectDetails {
                project_id: 1,
                show_chat: false
            }
        );

        let s = navigate(
            RouteState::default(),
            RouteId::ProjectDetails,
            Params::new().with(PROJECT_ID, 3).with(SHOW_CHAT, true),
        );
        assert_eq!(
            Screen::resolve(&s),
            Screen::ProjectDetails {
                project_id: 3,
                show_chat: true
            }
        );
    }

    #[test]
    fn ill_typed_params_fall_back() {
        let p = Params::new().with(PROJECT_ID, "two").with(SHOW_CHAT, 1);
        assert_eq!(p.u64_or(PROJECT_ID, 1), 1);
        assert!(!p.bool_or(SHOW_CHAT, false));
        assert_eq!(p.get(PROJECT_ID), Some(&Value::from("two")));
    }

    #[test]
    fn screen_key_changes_with_params() {
        let a = Screen::ProjectDetails { project_id: 1, show_chat: false };
        let b = Screen::ProjectDetails { project_id: 1, show_chat: true };
        assert_ne!(a.key(), b.key());
        assert_eq!(Screen::Home.key(), "home");
    }

    #[test]
    fn log_line_is_a_json_snapshot() {
        let s = navigate(
            RouteState::default(),
            RouteId::ProjectDetails,
            Params::new().with(PROJECT_ID, 2),
        );
        assert_eq!(
            s.log_line(),
            r#"{"currentRoute":"ProjectDetails","params":{"projectId":2}}"#
        );
    }

    #[test]
    fn params_serialize_as_plain_object() {
        let p = Params::new().with(PROJECT_ID, 2).with(SHOW_CHAT, true);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"projectId":2,"showChat":true}"#);
    }
}
