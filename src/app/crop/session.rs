// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/crop/session.rs
//
// Crop state machine: owns the view-space crop rect, routes gestures through
// hit-testing and the constraint solver, and publishes video-pixel crops.

use std::fmt;

use super::gesture::{GestureChannel, GestureEvent};
use super::hit_test::classify;
use crate::config::CropConfig;
use crate::constant::GEOMETRY_EPSILON;
use crate::domain::aspect::AspectRatioMode;
use crate::domain::constraint::ConstraintSolver;
use crate::domain::geometry::{
    ContainerBounds, Point, Rect, Size, VideoFrame, compute_display_rect, video_to_view,
    view_to_video,
};
use crate::domain::handle::HandleType;

/// Receives every new crop in video-pixel coordinates.
pub type CropObserver = Box<dyn FnMut(Rect)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Resizing(HandleType),
    Moving,
    DrawingNew,
    Pinching,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Snapshot taken when a gesture begins. Updates are computed against it,
/// never against the previous update.
#[derive(Debug, Clone, Copy)]
struct Baseline {
    channel: GestureChannel,
    start_rect: Rect,
    start_point: Point,
}

pub struct CropSession {
    config: CropConfig,
    solver: ConstraintSolver,
    video: VideoFrame,
    container: ContainerBounds,
    mode: AspectRatioMode,
    display: Rect,
    crop: Rect,
    state: InteractionState,
    active_handle: Option<HandleType>,
    baseline: Option<Baseline>,
    observer: Option<CropObserver>,
    last_published: Option<Rect>,
}

impl fmt::Debug for CropSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CropSession")
            .field("video", &self.video)
            .field("container", &self.container)
            .field("mode", &self.mode)
            .field("display", &self.display)
            .field("crop", &self.crop)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl CropSession {
    pub fn new(
        video: VideoFrame,
        container: ContainerBounds,
        mode: AspectRatioMode,
        config: CropConfig,
    ) -> Self {
        let mut session = Self {
            solver: ConstraintSolver::new(config.min_crop_size),
            config,
            video,
            container,
            mode,
            display: compute_display_rect(&video, container),
            crop: Rect::ZERO,
            state: InteractionState::Idle,
            active_handle: None,
            baseline: None,
            observer: None,
            last_published: None,
        };
        session.crop = session.default_crop();
        log::debug!(
            "Crop session: video {:?}, display {:?}, mode {}",
            video.natural_size,
            session.display,
            mode
        );
        session
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    pub fn video(&self) -> VideoFrame {
        self.video
    }

    pub fn container(&self) -> ContainerBounds {
        self.container
    }

    pub fn mode(&self) -> AspectRatioMode {
        self.mode
    }

    pub fn display_rect(&self) -> Rect {
        self.display
    }

    /// Current crop in view coordinates.
    pub fn crop_view(&self) -> Rect {
        self.crop
    }

    /// Current crop in video-pixel coordinates, derived from [`Self::crop_view`].
    pub fn crop_video(&self) -> Rect {
        view_to_video(&self.crop, &self.display, &self.video)
    }

    pub fn interaction(&self) -> InteractionState {
        self.state
    }

    pub fn active_handle(&self) -> Option<HandleType> {
        self.active_handle
    }

    /// False while the video or container has no usable size.
    pub fn is_ready(&self) -> bool {
        !self.display.is_empty()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Install the observer and hand it the current crop.
    pub fn set_observer(&mut self, observer: impl FnMut(Rect) + 'static) {
        self.observer = Some(Box::new(observer));
        self.last_published = None;
        self.publish();
    }

    /// Layout changed. The crop keeps its video-pixel region.
    pub fn set_container(&mut self, container: ContainerBounds) {
        let previous = self.is_ready().then(|| self.crop_video());
        self.abort_gesture();
        self.container = container;
        self.display = compute_display_rect(&self.video, container);
        log::debug!("Crop container {container:?}, display {:?}", self.display);

        self.crop = match previous {
            Some(video_rect) if self.is_ready() && !video_rect.is_empty() => {
                let view = video_to_view(&video_rect, &self.display, &self.video);
                self.solver.constrain(&view, &self.display, self.mode, None)
            }
            _ => self.default_crop(),
        };
        self.publish();
    }

    /// Switching modes discards the current crop.
    pub fn set_mode(&mut self, mode: AspectRatioMode) {
        self.abort_gesture();
        self.mode = mode;
        log::debug!("Crop aspect mode {mode}");
        self.crop = self.default_crop();
        self.publish();
    }

    pub fn set_video(&mut self, video: VideoFrame) {
        self.abort_gesture();
        self.video = video;
        self.display = compute_display_rect(&video, self.container);
        self.last_published = None;
        self.crop = self.default_crop();
        self.publish();
    }

    /// Seed the crop from a previously stored video-pixel rect.
    pub fn restore(&mut self, video_rect: Rect) {
        if !self.is_ready() {
            log::warn!("Crop restore ignored: display not ready");
            return;
        }
        self.abort_gesture();
        let view = video_to_view(&video_rect, &self.display, &self.video);
        let view = if view.is_empty() { view } else { self.mode.fit_centered(&view) };
        self.crop = self.solver.constrain(&view, &self.display, self.mode, None);
        self.publish();
    }

    pub fn reset(&mut self) {
        self.abort_gesture();
        self.crop = self.default_crop();
        self.publish();
    }

    fn default_crop(&self) -> Rect {
        if !self.is_ready() {
            return Rect::ZERO;
        }
        let inset = self.display.inset(self.config.initial_inset);
        let area = if inset.is_empty() { self.display } else { inset };
        let fitted = self.mode.fit_centered(&area);
        self.solver.constrain(&fitted, &self.display, self.mode, None)
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    pub fn handle_event(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Began(point) => {
                self.start_gesture(point);
            }
            GestureEvent::Changed(point) => self.update_gesture(point),
            GestureEvent::Ended => self.end_gesture(),
            GestureEvent::Cancelled => self.cancel_gesture(),
            GestureEvent::PinchBegan => {
                self.start_pinch();
            }
            GestureEvent::PinchChanged(scale) => self.update_pinch(scale),
            GestureEvent::PinchEnded => self.end_pinch(),
        }
    }

    /// Begin a pointer gesture. Returns the interaction it started.
    pub fn start_gesture(&mut self, point: Point) -> InteractionState {
        if !self.is_ready() {
            log::warn!("Crop gesture ignored: display not ready");
            return InteractionState::Idle;
        }
        match self.baseline.map(|b| b.channel) {
            Some(GestureChannel::Pinch) => {
                log::warn!("Crop pointer gesture ignored: pinch in progress");
                return self.state;
            }
            Some(GestureChannel::Pointer) => {
                log::warn!("Crop pointer gesture began twice, ending previous");
                self.end_gesture();
            }
            None => {}
        }

        let before = self.crop;
        let state = classify(point, &self.crop, self.config.handle_touch_size);
        let mut start_point = point;
        self.active_handle = None;
        match state {
            InteractionState::Resizing(handle) => self.active_handle = Some(handle),
            InteractionState::DrawingNew => {
                start_point = self.display.clamp_point(point);
                let seed = Rect::from_origin_size(start_point, Size::ZERO);
                self.active_handle = Some(HandleType::BottomRight);
                self.crop = self.solver.constrain(
                    &seed,
                    &self.display,
                    self.mode,
                    self.active_handle,
                );
            }
            _ => {}
        }

        self.baseline = Some(Baseline {
            channel: GestureChannel::Pointer,
            start_rect: before,
            start_point,
        });
        self.state = state;
        log::debug!("Crop gesture began at ({}, {}): {:?}", point.x, point.y, state);
        self.publish();
        state
    }

    pub fn update_gesture(&mut self, point: Point) {
        let Some(baseline) = self.pointer_baseline() else {
            return;
        };
        let dx = point.x - baseline.start_point.x;
        let dy = point.y - baseline.start_point.y;

        let (candidate, handle) = match self.state {
            InteractionState::Resizing(handle) => {
                (handle.apply_delta(&baseline.start_rect, dx, dy), Some(handle))
            }
            InteractionState::Moving => {
                let start = baseline.start_rect;
                (Rect::new(start.x + dx, start.y + dy, start.width, start.height), None)
            }
            InteractionState::DrawingNew => {
                let target = self.display.clamp_point(point);
                let dx = target.x - baseline.start_point.x;
                let dy = target.y - baseline.start_point.y;
                let handle = HandleType::corner_toward(dx, dy);
                let seed = Rect::from_origin_size(baseline.start_point, Size::ZERO);
                (handle.apply_delta(&seed, dx, dy), Some(handle))
            }
            InteractionState::Idle | InteractionState::Pinching => return,
        };

        self.active_handle = handle;
        self.crop = self.solver.constrain(&candidate, &self.display, self.mode, handle);
        log::trace!("Crop update {:?} -> {:?}", self.state, self.crop);
        self.publish();
    }

    pub fn end_gesture(&mut self) {
        if self.pointer_baseline().is_none() {
            return;
        }
        self.finish();
    }

    /// Cancel whichever channel owns the gesture.
    pub fn cancel_gesture(&mut self) {
        let Some(baseline) = self.baseline else {
            return;
        };
        if self.config.cancel_reverts {
            log::debug!("Crop gesture cancelled, reverting");
            self.crop = baseline.start_rect;
            self.clear_gesture();
            self.publish();
        } else {
            self.finish();
        }
    }

    /// Begin a pinch. Returns false if another gesture is in progress.
    pub fn start_pinch(&mut self) -> bool {
        if !self.is_ready() {
            log::warn!("Crop pinch ignored: display not ready");
            return false;
        }
        if let Some(baseline) = self.baseline {
            log::warn!("Crop pinch ignored: {:?} gesture in progress", baseline.channel);
            return false;
        }
        self.baseline = Some(Baseline {
            channel: GestureChannel::Pinch,
            start_rect: self.crop,
            start_point: self.crop.center(),
        });
        self.active_handle = None;
        self.state = InteractionState::Pinching;
        log::debug!("Crop pinch began on {:?}", self.crop);
        true
    }

    /// Scale the pinch-start crop about its center.
    pub fn update_pinch(&mut self, scale: f32) {
        let Some(baseline) = self.baseline.filter(|b| b.channel == GestureChannel::Pinch) else {
            return;
        };
        if !scale.is_finite() || scale <= 0.0 {
            log::warn!("Crop pinch scale {scale} ignored");
            return;
        }

        let start = baseline.start_rect;
        let min = self.solver.min_size();
        let scale = scale.max((min / start.width).max(min / start.height));
        let width = start.width * scale;
        let height = start.height * scale;
        let center = baseline.start_point;
        let candidate = Rect::new(center.x - width / 2.0, center.y - height / 2.0, width, height);

        self.crop = self.solver.constrain(&candidate, &self.display, self.mode, None);
        log::trace!("Crop pinch x{scale} -> {:?}", self.crop);
        self.publish();
    }

    pub fn end_pinch(&mut self) {
        if self.baseline.is_some_and(|b| b.channel == GestureChannel::Pinch) {
            self.finish();
        }
    }

    fn pointer_baseline(&self) -> Option<Baseline> {
        self.baseline.filter(|b| b.channel == GestureChannel::Pointer)
    }

    /// Final constraint pass, then back to idle.
    fn finish(&mut self) {
        self.crop = self
            .solver
            .constrain(&self.crop, &self.display, self.mode, self.active_handle);
        log::debug!("Crop gesture ended {:?}: {:?}", self.state, self.crop);
        self.clear_gesture();
        self.publish();
    }

    fn abort_gesture(&mut self) {
        if self.baseline.is_some() {
            log::debug!("Crop gesture {:?} aborted", self.state);
        }
        self.clear_gesture();
    }

    fn clear_gesture(&mut self) {
        self.baseline = None;
        self.active_handle = None;
        self.state = InteractionState::Idle;
    }

    fn publish(&mut self) {
        if !self.is_ready() {
            return;
        }
        let video_rect = self.crop_video();
        if self
            .last_published
            .is_some_and(|last| last.approx_eq(&video_rect, GEOMETRY_EPSILON))
        {
            return;
        }
        self.last_published = Some(video_rect);
        if let Some(observer) = self.observer.as_mut() {
            observer(video_rect);
        }
    }
}
