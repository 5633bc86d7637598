// SPDX-License-Identifier: GPL-3.0-or-later
// src/replay.rs
//
// Gesture scripts: a TOML description of a crop session and the event stream
// fed into it, replayed headlessly.

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::app::crop::{CropSession, GestureEvent};
use crate::config::CropConfig;
use crate::domain::aspect::AspectRatioMode;
use crate::domain::geometry::{Point, Rect, Size, VideoFrame};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub mode: AspectRatioMode,
    /// Natural video size in pixels.
    pub video: Size,
    pub container: Size,
    /// Previously stored crop, in video pixels.
    #[serde(default)]
    pub restore: Option<Rect>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScriptEvent {
    Began { x: f32, y: f32 },
    Changed { x: f32, y: f32 },
    Ended,
    Cancelled,
    PinchBegan,
    PinchChanged { scale: f32 },
    PinchEnded,
    Container { width: f32, height: f32 },
    Mode { mode: AspectRatioMode },
    Restore { x: f32, y: f32, width: f32, height: f32 },
}

impl Script {
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let script: Self = toml::from_str(content).context("Invalid gesture script")?;
        check_size("video", script.video)?;
        check_size("container", script.container)?;
        for event in &script.events {
            if let ScriptEvent::Container { width, height } = *event {
                check_size("container event", Size::new(width, height))?;
            }
        }
        Ok(script)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("In {}", path.display()))
    }
}

/// Zero sizes are allowed (the session waits for layout); infinite, NaN or
/// negative ones are not.
fn check_size(what: &str, size: Size) -> anyhow::Result<()> {
    let valid = |v: f32| v.is_finite() && v >= 0.0;
    if !(valid(size.width) && valid(size.height)) {
        bail!("Invalid gesture script: {what} size {} x {}", size.width, size.height);
    }
    Ok(())
}

/// Result of a replay: the final session and every crop it published.
#[derive(Debug)]
pub struct Replay {
    pub session: CropSession,
    pub published: Vec<Rect>,
}

pub fn run(script: &Script, config: CropConfig) -> Replay {
    let mut session = CropSession::new(
        VideoFrame { natural_size: script.video },
        script.container,
        script.mode,
        config,
    );

    let published = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&published);
    session.set_observer(move |rect| sink.borrow_mut().push(rect));

    if let Some(rect) = script.restore {
        session.restore(rect);
    }
    for event in &script.events {
        apply(&mut session, *event);
    }

    let published = published.borrow().clone();
    Replay { session, published }
}

fn apply(session: &mut CropSession, event: ScriptEvent) {
    match event {
        ScriptEvent::Began { x, y } => session.handle_event(GestureEvent::Began(Point::new(x, y))),
        ScriptEvent::Changed { x, y } => {
            session.handle_event(GestureEvent::Changed(Point::new(x, y)));
        }
        ScriptEvent::Ended => session.handle_event(GestureEvent::Ended),
        ScriptEvent::Cancelled => session.handle_event(GestureEvent::Cancelled),
        ScriptEvent::PinchBegan => session.handle_event(GestureEvent::PinchBegan),
        ScriptEvent::PinchChanged { scale } => {
            session.handle_event(GestureEvent::PinchChanged(scale));
        }
        ScriptEvent::PinchEnded => session.handle_event(GestureEvent::PinchEnded),
        ScriptEvent::Container { width, height } => session.set_container(Size::new(width, height)),
        ScriptEvent::Mode { mode } => session.set_mode(mode),
        ScriptEvent::Restore { x, y, width, height } => {
            session.restore(Rect::new(x, y, width, height));
        }
    }
}
