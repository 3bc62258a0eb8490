use crate::{
    animation::{
        duration::compute_time_range,
        request::{AnimationRequest, ViewportData},
    },
    foundation::core::ElementId,
    foundation::error::{ScrollreelError, ScrollreelResult},
    host::{Host, Player},
    player::binder::bind_and_play,
    runner::{
        AnimationRunner,
        state::{InitFailurePolicy, RunnerOptions, RunnerState},
    },
    timeline::scroll::make_scroll_timeline,
};

/// Runs a batch of animations on scroll timelines anchored to one scene.
///
/// Every timeline shares a single time range (the latest end time in the batch), so
/// each request's delay and duration map onto the same stretch of scrolling.
pub struct ScrollTimelineRunner<H: Host> {
    host: H,
    requests: Vec<AnimationRequest>,
    scene: ElementId,
    options: RunnerOptions,
    state: RunnerState,
    players: Vec<H::Player>,
}

impl<H: Host> ScrollTimelineRunner<H> {
    pub fn new(host: H, requests: Vec<AnimationRequest>, viewport: ViewportData) -> Self {
        Self::with_options(host, requests, viewport, RunnerOptions::default())
    }

    pub fn with_options(
        host: H,
        requests: Vec<AnimationRequest>,
        viewport: ViewportData,
        options: RunnerOptions,
    ) -> Self {
        Self {
            host,
            requests,
            scene: viewport.scene,
            options,
            state: RunnerState::Uninitialized,
            players: Vec::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn requests(&self) -> &[AnimationRequest] {
        &self.requests
    }

    /// Players in request order. Retained after `cancel`.
    pub fn players(&self) -> &[H::Player] {
        &self.players
    }

    pub fn scene(&self) -> &ElementId {
        &self.scene
    }

    pub fn options(&self) -> RunnerOptions {
        self.options
    }

    fn bind_all(&mut self) -> ScrollreelResult<()> {
        let scroll_source = self.host.scrolling_element()?;
        if !self.host.is_attached(&self.scene) {
            return Err(ScrollreelError::resolution(format!(
                "scene '{}' is not attached to the document",
                self.scene
            )));
        }

        let time_range = compute_time_range(&self.requests);
        if time_range.is_unbounded() {
            return Err(ScrollreelError::validation(
                "a scroll-driven batch cannot contain infinitely repeating animations",
            ));
        }
        tracing::debug!(?time_range, %scroll_source, "binding scroll timelines");

        for request in &self.requests {
            let timeline = make_scroll_timeline(scroll_source.clone(), &self.scene, time_range);
            let player = bind_and_play(&mut self.host, request, timeline)?;
            self.players.push(player);
        }
        Ok(())
    }
}

impl<H: Host> AnimationRunner for ScrollTimelineRunner<H> {
    #[tracing::instrument(skip(self), fields(requests = self.requests.len(), scene = %self.scene))]
    fn init(&mut self) -> ScrollreelResult<()> {
        if self.state != RunnerState::Uninitialized {
            return Err(ScrollreelError::lifecycle(format!(
                "init called on a {} runner",
                self.state
            )));
        }

        match self.bind_all() {
            Ok(()) => {
                self.state = RunnerState::Running;
                Ok(())
            }
            Err(err) => {
                let bound = self.players.len();
                match self.options.on_init_failure {
                    InitFailurePolicy::Rollback => {
                        for player in &mut self.players {
                            player.cancel();
                        }
                        self.state = RunnerState::Cancelled;
                    }
                    InitFailurePolicy::KeepPartial => {
                        self.state = RunnerState::Running;
                    }
                }
                tracing::warn!(
                    %err,
                    bound,
                    policy = ?self.options.on_init_failure,
                    "runner init failed"
                );
                Err(err)
            }
        }
    }

    fn start(&mut self) -> ScrollreelResult<()> {
        if self.state == RunnerState::Uninitialized {
            return self.init();
        }
        Ok(())
    }

    fn cancel(&mut self) {
        if self.state == RunnerState::Uninitialized {
            return;
        }
        for player in &mut self.players {
            player.cancel();
        }
        self.state = RunnerState::Cancelled;
    }

    fn state(&self) -> RunnerState {
        self.state
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runner/scroll_timeline.rs"]
mod tests;
