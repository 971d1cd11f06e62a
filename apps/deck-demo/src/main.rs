use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use deck_demo::{describe_frame, sample_profiles, DemoHost, TextRenderer, WebClock, DEMO_SCRIPT};
use swipedeck_ui::{Deck, DeckOptions};

const VIEWPORT_WIDTH: f32 = 400.0;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipe Deck Demo ===");
    println!("Scripted drags against a {VIEWPORT_WIDTH}px deck; one line per frame.");
    println!();

    let mut host = DemoHost::new(WebClock, Duration::from_millis(16));
    let liked = Rc::new(RefCell::new(Vec::new()));
    let passed = Rc::new(RefCell::new(Vec::new()));

    let mut deck = Deck::new(
        host.runtime_handle(),
        sample_profiles(),
        TextRenderer,
        DeckOptions::new(VIEWPORT_WIDTH),
    )
    .context("building the demo deck")?
    .on_swipe_right({
        let liked = Rc::clone(&liked);
        move |profile| liked.borrow_mut().push(profile.name)
    })
    .on_swipe_left({
        let passed = Rc::clone(&passed);
        move |profile| passed.borrow_mut().push(profile.name)
    })
    .on_exhausted(|| println!("-- deck exhausted --"));

    for drag in DEMO_SCRIPT {
        println!("drag to ({}, {}) in {} steps", drag.dx, drag.dy, drag.steps);
        let decision = host.perform(&mut deck, drag, |deck| {
            println!("  {}", describe_frame(&deck.frame()));
        });
        println!("=> {decision:?}");
    }

    println!();
    println!("liked:  {:?}", liked.borrow());
    println!("passed: {:?}", passed.borrow());
    println!("frames: {}", host.frames());
    Ok(())
}
