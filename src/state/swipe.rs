//! Swipe gesture state for a single card.
//!
//! A [`TouchSession`] turns a stream of touch positions into a swipe
//! direction and, on release, into a commit decision. It never touches the
//! DOM; the card component feeds it `touches[0].clientX` and renders from it.

#[derive(Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal offset (px) beyond which a drag locks a direction.
    pub threshold: f64,
    /// Degrees of card rotation per px of offset.
    pub rotation_factor: f64,
    /// CSS transition applied while the card is not being dragged.
    pub release_transition: String,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            rotation_factor: 0.1,
            release_transition: "transform 0.3s ease".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
}

impl Direction {
    /// Strictly beyond the threshold counts; exactly on it does not.
    pub fn from_offset(offset_x: f64, threshold: f64) -> Self {
        if offset_x > threshold {
            Direction::Right
        } else if offset_x < -threshold {
            Direction::Left
        } else {
            Direction::None
        }
    }

    pub fn is_locked(self) -> bool {
        !matches!(self, Direction::None)
    }

    /// Stamp drawn over the card while dragging.
    pub fn overlay_label(self) -> Option<&'static str> {
        match self {
            Direction::Right => Some("LIKE"),
            Direction::Left => Some("NOPE"),
            Direction::None => None,
        }
    }
}

/// Visual transform of the card for the current offset.
#[derive(Clone, Debug, PartialEq)]
pub struct CardTransform {
    pub translate_x: f64,
    pub rotate_deg: f64,
    /// Easing applies only when the finger is up.
    pub transition: Option<String>,
}

impl CardTransform {
    pub fn to_style(&self) -> String {
        format!(
            "transform:translateX({}px) rotate({}deg); transition:{};",
            self.translate_x,
            self.rotate_deg,
            self.transition.as_deref().unwrap_or("none")
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TouchSession {
    pub active: bool,
    pub start_x: f64,
    pub current_offset_x: f64,
    pub locked_direction: Direction,
    config: SwipeConfig,
}

impl Default for TouchSession {
    fn default() -> Self {
        Self::with_config(SwipeConfig::default())
    }
}

impl TouchSession {
    pub fn with_config(config: SwipeConfig) -> Self {
        Self {
            active: false,
            start_x: 0.0,
            current_offset_x: 0.0,
            locked_direction: Direction::None,
            config,
        }
    }

    /// Idle -> Tracking. A start while already tracking re-anchors the session.
    pub fn start(&mut self, x: f64) {
        self.active = true;
        self.start_x = x;
        self.current_offset_x = 0.0;
        self.locked_direction = Direction::None;
    }

    /// `touchstart` handler: only the first finger down opens a session.
    /// `contacts` is the number of fingers on the surface, this one included.
    pub fn touch_start(&mut self, first_x: f64, contacts: u32) -> bool {
        if self.active || contacts != 1 {
            return false;
        }
        self.start(first_x);
        true
    }

    /// `touchend` handler: the gesture finishes once the last finger lifts.
    pub fn touch_end(&mut self, remaining: u32) -> Option<Direction> {
        if remaining > 0 {
            return None;
        }
        self.end()
    }

    /// Returns false (and leaves state untouched) when no session is active.
    pub fn move_to(&mut self, x: f64) -> bool {
        if !self.active {
            return false;
        }
        let diff = x - self.start_x;
        self.current_offset_x = diff;
        // recomputed from the full offset on every move, never incrementally
        self.locked_direction = Direction::from_offset(diff, self.config.threshold);
        true
    }

    /// Tracking -> Idle. Yields the committed direction when the drag ended
    /// past the threshold; the session is reset either way.
    pub fn end(&mut self) -> Option<Direction> {
        if !self.active {
            return None;
        }
        let committed = self.locked_direction;
        self.reset();
        committed.is_locked().then_some(committed)
    }

    /// Interrupted gesture: reset without committing.
    pub fn cancel(&mut self) {
        if self.active {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.active = false;
        self.current_offset_x = 0.0;
        self.locked_direction = Direction::None;
    }

    pub fn transform(&self) -> CardTransform {
        CardTransform {
            translate_x: self.current_offset_x,
            rotate_deg: self.current_offset_x * self.config.rotation_factor,
            transition: (!self.active).then(|| self.config.release_transition.clone()),
        }
    }

    pub fn overlay_label(&self) -> Option<&'static str> {
        self.locked_direction.overlay_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn swipe(session: &mut TouchSession, from: f64, moves: &[f64]) -> Option<Direction> {
        session.start(from);
        for x in moves {
            session.move_to(*x);
        }
        session.end()
    }

    #[test]
    fn right_swipe_shows_like_and_commits_once() {
        let mut s = TouchSession::default();
        s.start(100.0);
        assert!(s.move_to(160.0));
        assert_eq!(s.locked_direction, Direction::Right);
        assert_eq!(s.overlay_label(), Some("LIKE"));
        assert_eq!(s.end(), Some(Direction::Right));
        assert_eq!(s.current_offset_x, 0.0);
        assert_eq!(s.locked_direction, Direction::None);
        assert!(!s.active);
        // a second end is out of order and commits nothing
        assert_eq!(s.end(), None);
    }

    #[test]
    fn short_drag_resets_without_commit() {
        let mut s = TouchSession::default();
        s.start(100.0);
        s.move_to(120.0);
        assert_eq!(s.locked_direction, Direction::None);
        assert_eq!(s.overlay_label(), None);
        assert_eq!(s.end(), None);
        assert_eq!(s.current_offset_x, 0.0);
        assert!(!s.active);
    }

    #[test]
    fn left_swipe_shows_nope() {
        let mut s = TouchSession::default();
        s.start(200.0);
        s.move_to(120.0);
        assert_eq!(s.overlay_label(), Some("NOPE"));
        assert_eq!(s.end(), Some(Direction::Left));
    }

    #[test]
    fn direction_follows_last_move_only() {
        let mut s = TouchSession::default();
        assert_eq!(swipe(&mut s, 100.0, &[200.0, 90.0]), None);
        assert_eq!(swipe(&mut s, 100.0, &[20.0, 100.0, 151.0]), Some(Direction::Right));
    }

    #[test]
    fn exact_threshold_is_not_a_swipe() {
        assert_eq!(Direction::from_offset(50.0, 50.0), Direction::None);
        assert_eq!(Direction::from_offset(-50.0, 50.0), Direction::None);
        assert_eq!(Direction::from_offset(50.5, 50.0), Direction::Right);
    }

    #[test]
    fn events_without_start_are_ignored() {
        let mut s = TouchSession::default();
        let before = s.clone();
        assert!(!s.move_to(500.0));
        assert_eq!(s.end(), None);
        s.cancel();
        assert_eq!(s, before);
    }

    #[test]
    fn cancel_never_commits() {
        let mut s = TouchSession::default();
        s.start(0.0);
        s.move_to(300.0);
        s.cancel();
        assert!(!s.active);
        assert_eq!(s.locked_direction, Direction::None);
        assert_eq!(s.end(), None);
    }

    #[test]
    fn restart_reanchors_origin() {
        let mut s = TouchSession::default();
        s.start(0.0);
        s.move_to(80.0);
        s.start(80.0);
        assert_eq!(s.current_offset_x, 0.0);
        assert_eq!(s.locked_direction, Direction::None);
        s.move_to(100.0);
        assert_eq!(s.end(), None);
    }

    #[test]
    fn second_finger_down_keeps_the_drag() {
        let mut s = TouchSession::default();
        assert!(s.touch_start(100.0, 1));
        s.move_to(180.0);
        assert!(!s.touch_start(180.0, 2));
        assert_eq!(s.start_x, 100.0);
        assert_eq!(s.current_offset_x, 80.0);
        assert_eq!(s.locked_direction, Direction::Right);
        assert_eq!(s.touch_end(0), Some(Direction::Right));
    }

    #[test]
    fn second_finger_up_does_not_finish_the_gesture() {
        let mut s = TouchSession::default();
        s.touch_start(100.0, 1);
        s.move_to(120.0);
        assert_eq!(s.touch_end(1), None);
        assert!(s.active);
        assert!(s.move_to(30.0));
        assert_eq!(s.locked_direction, Direction::Left);
        assert_eq!(s.touch_end(0), Some(Direction::Left));
        assert!(!s.active);
    }

    #[test]
    fn two_fingers_at_once_open_nothing() {
        let mut s = TouchSession::default();
        let before = s.clone();
        assert!(!s.touch_start(100.0, 2));
        assert_eq!(s, before);
        assert_eq!(s.touch_end(0), None);
    }

    #[test]
    fn transform_tracks_offset_and_easing() {
        let mut s = TouchSession::default();
        s.start(100.0);
        s.move_to(140.0);
        let t = s.transform();
        assert_eq!(t.translate_x, 40.0);
        assert!((t.rotate_deg - 4.0).abs() < 1e-9);
        assert_eq!(t.transition, None);
        assert!(t.to_style().contains("transition:none"));

        s.end();
        let t = s.transform();
        assert_eq!(t.translate_x, 0.0);
        assert_eq!(t.transition.as_deref(), Some("transform 0.3s ease"));
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let mut s = TouchSession::with_config(SwipeConfig {
            threshold: 10.0,
            ..SwipeConfig::default()
        });
        assert_eq!(swipe(&mut s, 0.0, &[11.0]), Some(Direction::Right));
    }

    proptest! {
        #[test]
        fn commit_iff_final_offset_beyond_threshold(
            start in -1000.0f64..1000.0,
            moves in proptest::collection::vec(-1000.0f64..1000.0, 1..12),
        ) {
            let mut s = TouchSession::default();
            let last = *moves.last().unwrap();
            let diff = last - start;
            let outcome = swipe(&mut s, start, &moves);
            if diff > 50.0 {
                prop_assert_eq!(outcome, Some(Direction::Right));
            } else if diff < -50.0 {
                prop_assert_eq!(outcome, Some(Direction::Left));
            } else {
                prop_assert_eq!(outcome, None);
            }
            prop_assert!(!s.active);
            prop_assert_eq!(s.current_offset_x, 0.0);
            prop_assert_eq!(s.locked_direction, Direction::None);
        }

        #[test]
        fn moves_without_start_never_mutate(xs in proptest::collection::vec(-1000.0f64..1000.0, 0..12)) {
            let mut s = TouchSession::default();
            let before = s.clone();
            for x in xs {
                prop_assert!(!s.move_to(x));
            }
            prop_assert_eq!(s.end(), None);
            prop_assert_eq!(s, before);
        }
    }
}
