pub mod deck;
pub mod gallery;
pub mod router;
pub mod swipe;

pub use deck::Deck;
pub use gallery::ImageCursor;
pub use router::{Params, RouteId, RouteState, RouterAction, Screen, PROJECT_ID, SHOW_CHAT};
pub use swipe::{Direction, SwipeConfig, TouchSession};
