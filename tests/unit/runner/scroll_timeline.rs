use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::{
    animation::{
        keyframes::{Keyframe, Keyframes, StyleMap},
        timing::Timing,
    },
    foundation::core::TimeRange,
    host::PlayState,
    player::effect::KeyframeEffect,
    timeline::scroll::ScrollTimeline,
};

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Styles(String, StyleMap),
    Play(String),
    Cancel(String),
}

type Log = Rc<RefCell<Vec<Event>>>;

struct RecordingPlayer {
    target: String,
    state: PlayState,
    log: Log,
}

impl Player for RecordingPlayer {
    fn play(&mut self) -> ScrollreelResult<()> {
        self.state = PlayState::Running;
        self.log.borrow_mut().push(Event::Play(self.target.clone()));
        Ok(())
    }

    fn cancel(&mut self) {
        self.state = PlayState::Idle;
        self.log.borrow_mut().push(Event::Cancel(self.target.clone()));
    }

    fn play_state(&self) -> PlayState {
        self.state
    }
}

struct RecordingHost {
    scrolling: Option<ElementId>,
    attached: Vec<ElementId>,
    timelines: Vec<ScrollTimeline>,
    log: Log,
}

impl RecordingHost {
    fn new(attached: &[&str]) -> Self {
        Self {
            scrolling: Some(ElementId::new("root")),
            attached: attached.iter().map(|s| ElementId::new(*s)).collect(),
            timelines: Vec::new(),
            log: Rc::default(),
        }
    }

    fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    fn count(&self, event: &Event) -> usize {
        self.log.borrow().iter().filter(|e| *e == event).count()
    }
}

impl Host for RecordingHost {
    type Player = RecordingPlayer;

    fn scrolling_element(&self) -> ScrollreelResult<ElementId> {
        self.scrolling
            .clone()
            .ok_or_else(|| ScrollreelError::resolution("no scrolling element"))
    }

    fn is_attached(&self, element: &ElementId) -> bool {
        self.attached.contains(element)
    }

    fn apply_styles(&mut self, target: &ElementId, styles: &StyleMap) -> ScrollreelResult<()> {
        self.log
            .borrow_mut()
            .push(Event::Styles(target.to_string(), styles.clone()));
        Ok(())
    }

    fn create_player(
        &mut self,
        effect: KeyframeEffect,
        timeline: ScrollTimeline,
    ) -> ScrollreelResult<Self::Player> {
        self.timelines.push(timeline);
        Ok(RecordingPlayer {
            target: effect.target.to_string(),
            state: PlayState::Idle,
            log: Rc::clone(&self.log),
        })
    }
}

fn fade() -> Keyframes {
    Keyframes(vec![
        Keyframe::new([("opacity", "0")]),
        Keyframe::new([("opacity", "1")]),
    ])
}

fn req(target: &str, timing: Timing) -> AnimationRequest {
    AnimationRequest::new(ElementId::new(target), fade(), timing)
}

fn three() -> Vec<AnimationRequest> {
    vec![
        req("a", Timing::new(1000.0)),
        req("b", Timing::new(500.0).with_delay(200.0)),
        req("c", Timing::new(300.0)),
    ]
}

fn runner(requests: Vec<AnimationRequest>) -> ScrollTimelineRunner<RecordingHost> {
    ScrollTimelineRunner::new(
        RecordingHost::new(&["scene", "a", "b", "c"]),
        requests,
        ViewportData::new(ElementId::new("scene")),
    )
}

fn targets(r: &ScrollTimelineRunner<RecordingHost>) -> Vec<String> {
    r.players().iter().map(|p| p.target.clone()).collect()
}

#[test]
fn start_binds_one_player_per_request_in_order() {
    let mut r = runner(three());
    r.start().unwrap();
    assert_eq!(r.state(), RunnerState::Running);
    assert_eq!(targets(&r), vec!["a", "b", "c"]);
    assert!(
        r.players()
            .iter()
            .all(|p| p.play_state() == PlayState::Running)
    );
}

#[test]
fn every_timeline_shares_the_batch_time_range() {
    let mut r = runner(three());
    r.start().unwrap();
    let timelines = &r.host().timelines;
    assert_eq!(timelines.len(), 3);
    for tl in timelines {
        assert_eq!(tl.time_range, TimeRange::Finite(1000.0));
        assert_eq!(tl.scroll_source, ElementId::new("root"));
        assert_eq!(tl.start_scroll_offset.target, ElementId::new("scene"));
    }
}

#[test]
fn start_twice_initializes_once() {
    let mut r = runner(three());
    r.start().unwrap();
    r.start().unwrap();
    assert_eq!(r.players().len(), 3);
    assert_eq!(r.host().count(&Event::Play("a".into())), 1);
    assert_eq!(r.host().timelines.len(), 3);
}

#[test]
fn explicit_init_twice_is_a_lifecycle_error() {
    let mut r = runner(three());
    r.init().unwrap();
    let err = r.init().unwrap_err();
    assert!(matches!(err, ScrollreelError::Lifecycle(_)));
    assert_eq!(r.players().len(), 3);
}

#[test]
fn cancel_before_start_is_a_noop() {
    let mut r = runner(three());
    r.cancel();
    assert_eq!(r.state(), RunnerState::Uninitialized);
    assert!(r.host().events().is_empty());

    r.start().unwrap();
    assert_eq!(r.players().len(), 3);
}

#[test]
fn cancel_stops_each_player_once_per_call() {
    let mut r = runner(three());
    r.start().unwrap();
    r.cancel();
    assert_eq!(r.state(), RunnerState::Cancelled);
    for t in ["a", "b", "c"] {
        assert_eq!(r.host().count(&Event::Cancel(t.into())), 1);
    }
    assert_eq!(r.players().len(), 3);

    r.cancel();
    for t in ["a", "b", "c"] {
        assert_eq!(r.host().count(&Event::Cancel(t.into())), 2);
    }
}

#[test]
fn cancelled_runner_never_restarts() {
    let mut r = runner(three());
    r.start().unwrap();
    r.cancel();
    r.start().unwrap();
    assert_eq!(r.state(), RunnerState::Cancelled);
    assert_eq!(r.host().count(&Event::Play("a".into())), 1);
}

#[test]
fn display_var_never_reaches_the_host() {
    let mut r = runner(vec![
        req("a", Timing::new(100.0)).with_vars([("display", "none"), ("opacity", "0.2")]),
    ]);
    r.start().unwrap();

    let mut expected = StyleMap::new();
    expected.insert("opacity".to_string(), "0.2".to_string());
    assert_eq!(
        r.host().events(),
        vec![
            Event::Styles("a".into(), expected),
            Event::Play("a".into())
        ]
    );
}

#[test]
fn display_only_vars_still_get_a_player() {
    let mut r = runner(vec![
        req("a", Timing::new(100.0)).with_vars([("display", "block")]),
        req("b", Timing::new(100.0)).with_vars([("color", "red")]),
    ]);
    r.start().unwrap();
    assert_eq!(targets(&r), vec!["a", "b"]);
    let styled: Vec<_> = r
        .host()
        .events()
        .into_iter()
        .filter(|e| matches!(e, Event::Styles(..)))
        .collect();
    assert_eq!(styled.len(), 1);
}

#[test]
fn vars_apply_before_play() {
    let mut r = runner(vec![
        req("a", Timing::new(100.0)).with_vars([("transform", "none")]),
    ]);
    r.start().unwrap();
    let events = r.host().events();
    assert!(matches!(events[0], Event::Styles(..)));
    assert_eq!(events[1], Event::Play("a".into()));
}

#[test]
fn empty_batch_runs_with_no_players() {
    let mut r = runner(Vec::new());
    r.start().unwrap();
    assert_eq!(r.state(), RunnerState::Running);
    assert!(r.players().is_empty());
    r.start().unwrap();
    assert!(matches!(r.init(), Err(ScrollreelError::Lifecycle(_))));
}

#[test]
fn missing_scrolling_element_fails_init() {
    let mut host = RecordingHost::new(&["scene", "a"]);
    host.scrolling = None;
    let mut r = ScrollTimelineRunner::new(
        host,
        vec![req("a", Timing::new(100.0))],
        ViewportData::new(ElementId::new("scene")),
    );
    let err = r.start().unwrap_err();
    assert!(matches!(err, ScrollreelError::Resolution(_)));
    assert!(r.players().is_empty());
    assert_eq!(r.state(), RunnerState::Cancelled);
}

#[test]
fn detached_scene_fails_init() {
    let mut r = ScrollTimelineRunner::new(
        RecordingHost::new(&["a"]),
        vec![req("a", Timing::new(100.0))],
        ViewportData::new(ElementId::new("scene")),
    );
    assert!(matches!(r.start(), Err(ScrollreelError::Resolution(_))));
    assert!(r.host().events().is_empty());
}

#[test]
fn unbounded_batch_is_rejected_before_side_effects() {
    let mut r = runner(vec![
        req("a", Timing::new(100.0)).with_vars([("opacity", "0")]),
        req("b", Timing::new(100.0).with_iterations(f64::INFINITY)),
    ]);
    assert!(matches!(r.start(), Err(ScrollreelError::Validation(_))));
    assert!(r.host().events().is_empty());
    assert!(r.players().is_empty());
}

#[test]
fn mid_batch_failure_rolls_back_by_default() {
    let mut r = runner(vec![
        req("a", Timing::new(100.0)),
        req("ghost", Timing::new(100.0)),
        req("c", Timing::new(100.0)),
    ]);
    assert!(matches!(r.start(), Err(ScrollreelError::Resolution(_))));
    assert_eq!(targets(&r), vec!["a"]);
    assert_eq!(r.state(), RunnerState::Cancelled);
    assert_eq!(r.host().count(&Event::Cancel("a".into())), 1);
    assert_eq!(r.host().count(&Event::Play("c".into())), 0);

    r.start().unwrap();
    assert_eq!(r.players().len(), 1);
}

#[test]
fn mid_batch_failure_can_keep_partial_players() {
    let mut r = ScrollTimelineRunner::with_options(
        RecordingHost::new(&["scene", "a", "c"]),
        vec![
            req("a", Timing::new(100.0)),
            req("ghost", Timing::new(100.0)),
            req("c", Timing::new(100.0)),
        ],
        ViewportData::new(ElementId::new("scene")),
        RunnerOptions {
            on_init_failure: InitFailurePolicy::KeepPartial,
        },
    );
    assert!(r.start().is_err());
    assert_eq!(r.state(), RunnerState::Running);
    assert_eq!(targets(&r), vec!["a"]);
    assert_eq!(r.host().count(&Event::Cancel("a".into())), 0);
    assert_eq!(r.players()[0].play_state(), PlayState::Running);

    r.cancel();
    assert_eq!(r.host().count(&Event::Cancel("a".into())), 1);
}
