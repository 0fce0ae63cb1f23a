// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A four-slide carousel driven frame by frame.
//!
//! This example shows how to:
//! - attach a `ScrollSnap` to a host with an initial slide,
//! - navigate with `next_layout`/`previous_layout`/`change_layout_by_index`,
//! - feed scroll and scroll-end notifications back into the controller,
//! - and observe layout change events, including default prevention.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example carousel`

use understory_demos::{SimulatedMount, SimulatedStrip};
use understory_scroll_snap::{ScrollSnap, SnapAxis, SnapConfig, SnapError};

fn main() -> Result<(), SnapError> {
    env_logger::init();

    // A host without a marked scroll container fails to attach.
    let mut broken = ScrollSnap::new(SimulatedMount(None), SnapConfig::default());
    if let Err(err) = broken.attach() {
        println!("attach without container: {err}");
    }

    let strip = SimulatedStrip::new(
        SnapAxis::Horizontal,
        &[
            ("sunrise", 320.0),
            ("harbor", 320.0),
            ("market", 320.0),
            ("night", 320.0),
        ],
        320.0,
        40.0,
    );
    let config = SnapConfig::from_attributes([("init-slide", "1")])?;
    let mut snap = ScrollSnap::new(SimulatedMount(Some(strip.clone())), config);

    snap.on_layout_change(|event| {
        println!(
            "layoutchange: index={} target={}",
            event.index(),
            event.target()
        );
        // Mirrors `onlayoutchange="event.detail.index === 3"`.
        if event.index() == 3 {
            event.prevent_default();
        }
    });

    // Requested before activation: replayed once attached.
    println!("early next_layout: {:?}", snap.next_layout()?);
    snap.attach()?;
    println!(
        "attached: axis={:?} index={} offset={}",
        snap.direction(),
        snap.current_index(),
        strip.offset()
    );
    animate(&strip, &mut snap);

    println!("jump to 3: {:?}", snap.change_layout_by_index(3)?);
    animate(&strip, &mut snap);

    println!("past the end: {:?}", snap.next_layout()?);

    println!("back to 0: {:?}", snap.change_layout_by_index(-5)?);
    // The user grabs the strip halfway and lets go on slide 1.
    for _ in 0..10 {
        strip.tick();
        snap.handle_scroll();
    }
    strip.drag_to(320.0);
    snap.handle_scroll();
    if let Some(event) = snap.settle() {
        println!(
            "settled on {} after interruption (prevented: {})",
            event.target(),
            event.default_prevented()
        );
    }

    println!("previous: {:?}", snap.previous_layout()?);
    animate(&strip, &mut snap);

    snap.detach();
    println!("after detach: {:?}", snap.next_layout());
    Ok(())
}

fn animate(strip: &SimulatedStrip, snap: &mut ScrollSnap<SimulatedMount>) {
    let mut frames = 0;
    while strip.tick() {
        frames += 1;
        snap.handle_scroll();
    }
    snap.settle();
    println!(
        "  {frames} frames, offset={} index={}",
        strip.offset(),
        snap.current_index()
    );
}
