//! Pieces of the deck demo: sample cards, a text renderer and a host loop
//! that plays scripted drags against a deck in real time.

use std::time::Duration;

use swipedeck_core::{Clock, Runtime, RuntimeHandle};
use swipedeck_ui::{
    Card, CardRenderer, CardStyle, Deck, DeckFrame, GestureHandler, SwipeDecision,
};
use web_time::Instant;

/// Stop pumping a settle that runs this many frames; a 250ms fly-out or a
/// snap-back spring needs a few dozen.
pub const MAX_SETTLE_FRAMES: usize = 600;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: u32,
    pub name: &'static str,
    pub age: u8,
}

impl Card for Profile {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

pub fn sample_profiles() -> Vec<Profile> {
    [("Ada", 36), ("Grace", 45), ("Linus", 28), ("Barbara", 52), ("Ken", 61)]
        .into_iter()
        .enumerate()
        .map(|(id, (name, age))| Profile {
            id: id as u32,
            name,
            age,
        })
        .collect()
}

/// Renders each card as a one-line label.
pub struct TextRenderer;

impl CardRenderer<Profile> for TextRenderer {
    type View = String;

    fn render_card(&self, card: &Profile) -> String {
        format!("{}, {}", card.name, card.age)
    }

    fn render_no_more_cards(&self) -> String {
        "No more profiles".to_string()
    }
}

/// One line per frame: the active card's transform and the stack depth.
pub fn describe_frame<K>(frame: &DeckFrame<K, String>) -> String {
    match frame {
        DeckFrame::Exhausted(view) => format!("[{view}]"),
        DeckFrame::Cards(cards) => {
            let stacked = cards.len().saturating_sub(1);
            match cards.first() {
                Some(card) => match card.style {
                    CardStyle::Active(style) => format!(
                        "[{}] x={:7.1} y={:6.1} rot={:6.1}  (+{stacked} behind)",
                        card.view, style.x, style.y, style.rotation_degrees
                    ),
                    CardStyle::Stacked { top_offset } => {
                        format!("[{}] stacked at {top_offset}", card.view)
                    }
                },
                None => String::from("[]"),
            }
        }
    }
}

/// Wall clock backed by `web_time`, so the same loop runs on wasm.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebClock;

impl Clock for WebClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_nanos(&self, since: Instant) -> u64 {
        Instant::now()
            .checked_duration_since(since)
            .unwrap_or_default()
            .as_nanos() as u64
    }
}

/// A drag to `(dx, dy)` delivered in `steps` move samples, one per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedDrag {
    pub dx: f32,
    pub dy: f32,
    pub steps: usize,
}

impl ScriptedDrag {
    pub const fn new(dx: f32, dy: f32, steps: usize) -> Self {
        Self { dx, dy, steps }
    }
}

/// Drags for a 400px wide deck of [`sample_profiles`].
pub const DEMO_SCRIPT: &[ScriptedDrag] = &[
    ScriptedDrag::new(180.0, 20.0, 8),
    ScriptedDrag::new(60.0, -15.0, 6),
    ScriptedDrag::new(-220.0, 35.0, 8),
    ScriptedDrag::new(-40.0, 0.0, 4),
    ScriptedDrag::new(260.0, -10.0, 10),
    ScriptedDrag::new(-150.0, 0.0, 6),
    ScriptedDrag::new(300.0, 0.0, 6),
    ScriptedDrag::new(200.0, 0.0, 4),
];

/// Drives a [`Runtime`] from a [`Clock`], sleeping `frame_interval`
/// between frames.
pub struct DemoHost<K: Clock> {
    runtime: Runtime,
    clock: K,
    started: K::Instant,
    frame_interval: Duration,
    frames: usize,
}

impl<K: Clock> DemoHost<K> {
    pub fn new(clock: K, frame_interval: Duration) -> Self {
        let started = clock.now();
        Self {
            runtime: Runtime::default(),
            clock,
            started,
            frame_interval,
            frames: 0,
        }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    /// Frames run so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Wait one frame interval, then run a frame at the clock's time.
    pub fn frame(&mut self) -> u64 {
        if !self.frame_interval.is_zero() {
            std::thread::sleep(self.frame_interval);
        }
        let frame_time = self.clock.elapsed_nanos(self.started);
        self.runtime.run_frame(frame_time);
        self.frames += 1;
        frame_time
    }

    /// Play `drag` against `deck`, then pump frames until it settles.
    /// `on_frame` sees the deck after every frame.
    pub fn perform<C, R>(
        &mut self,
        deck: &mut Deck<C, R>,
        drag: &ScriptedDrag,
        mut on_frame: impl FnMut(&Deck<C, R>),
    ) -> Option<SwipeDecision>
    where
        C: Card + 'static,
        R: CardRenderer<C>,
    {
        if !deck.on_gesture_start() {
            log::info!("drag {drag:?} refused: no active card");
            return deck.on_gesture_release(drag.dx, drag.dy);
        }

        let steps = drag.steps.max(1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            deck.on_gesture_move(drag.dx * fraction, drag.dy * fraction);
            self.frame();
            on_frame(&*deck);
        }
        let decision = deck.on_gesture_release(drag.dx, drag.dy);

        let mut settle_frames = 0;
        while self.runtime.needs_frame() {
            if settle_frames == MAX_SETTLE_FRAMES {
                log::warn!("deck still animating after {settle_frames} frames");
                break;
            }
            self.frame();
            settle_frames += 1;
            on_frame(&*deck);
        }
        log::debug!("{decision:?} settled in {settle_frames} frames");
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use swipedeck_ui::DeckOptions;

    /// Advances a fixed step every time a frame reads it.
    #[derive(Default)]
    struct SteppingClock {
        nanos: AtomicU64,
    }

    impl Clock for SteppingClock {
        type Instant = u64;

        fn now(&self) -> u64 {
            self.nanos.load(Ordering::Relaxed)
        }

        fn elapsed_nanos(&self, since: u64) -> u64 {
            let now = self.nanos.fetch_add(16_000_000, Ordering::Relaxed) + 16_000_000;
            now - since
        }
    }

    #[test]
    fn demo_script_swipes_through_every_profile() {
        let mut host = DemoHost::new(SteppingClock::default(), Duration::ZERO);
        let decisions = Rc::new(RefCell::new(Vec::new()));
        let liked = Rc::clone(&decisions);
        let passed = Rc::clone(&decisions);
        let mut deck = Deck::new(
            host.runtime_handle(),
            sample_profiles(),
            TextRenderer,
            DeckOptions::new(400.0),
        )
        .expect("valid deck")
        .on_swipe_right(move |card: &Profile| liked.borrow_mut().push(format!("+{}", card.name)))
        .on_swipe_left(move |card: &Profile| passed.borrow_mut().push(format!("-{}", card.name)));

        let mut lines = Vec::new();
        let mut outcomes = Vec::new();
        for drag in DEMO_SCRIPT {
            outcomes.push(host.perform(&mut deck, drag, |deck| {
                lines.push(describe_frame(&deck.frame()))
            }));
        }

        assert_eq!(
            *decisions.borrow(),
            vec!["+Ada", "-Grace", "+Linus", "-Barbara", "+Ken"]
        );
        assert_eq!(outcomes.last(), Some(&None), "deck was already empty");
        assert!(deck.is_exhausted());
        assert_eq!(lines.last().map(String::as_str), Some("[No more profiles]"));
        assert!(host.frames() > DEMO_SCRIPT.len());
    }

    #[test]
    fn describes_the_active_card() {
        let runtime = Runtime::default();
        let deck = Deck::new(
            runtime.handle(),
            sample_profiles(),
            TextRenderer,
            DeckOptions::new(400.0),
        )
        .expect("valid deck");

        let line = describe_frame(&deck.frame());

        assert!(line.starts_with("[Ada, 36]"));
        assert!(line.ends_with("(+4 behind)"));
    }
}
