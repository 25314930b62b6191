//! One-shot timeline orchestration
//!
//! A timeline is a declared, ordered list of stages built up front with
//! [`TimelineBuilder`] and then advanced from a single per-frame tick.
//! Exactly one stage is active at a time, stages run strictly in order
//! with no re-entry, and the timeline runs to completion exactly once;
//! afterwards it is permanently inert. There is no pause, cancel, or
//! replay path.
//!
//! Stage kinds:
//!
//! - **Tween**: a [`Stepper`] advanced once per 16 ms tick, invoking a
//!   per-tick action with the eased progress
//! - **Set**: an instantaneous visual action; takes no time
//! - **Delay**: a fixed real-time wait
//!
//! Stages reference externally owned surfaces through the actions they
//! capture; the timeline itself owns nothing it mutates.

use crate::easing::Easing;
use crate::stepper::{Stepper, TICK_MS};
use smallvec::{smallvec, SmallVec};

/// Action invoked when a stage is entered.
pub type EnterAction = Box<dyn FnMut()>;
/// Per-tick action for tween stages, called with the eased progress.
pub type TickAction = Box<dyn FnMut(f32)>;
/// Observer notified on every labeled stage entry.
pub type EnterObserver<L> = Box<dyn FnMut(&L)>;

enum StageKind {
    Tween { stepper: Stepper, action: TickAction },
    Set,
    Delay { remaining_ms: f32 },
}

struct Stage<L> {
    label: Option<L>,
    on_enter: SmallVec<[EnterAction; 2]>,
    kind: StageKind,
}

/// Timeline lifecycle. Strictly `Idle -> Running -> Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineState {
    Idle,
    Running,
    Done,
}

/// Ordered, one-shot animation timeline.
///
/// `L` is the host's stage-label type; unlabeled stages (delays, helper
/// tweens) participate in timing but not in entry notifications.
pub struct Timeline<L> {
    stages: Vec<Stage<L>>,
    current: usize,
    state: TimelineState,
    tick_accum_ms: f32,
    observer: Option<EnterObserver<L>>,
}

impl<L: std::fmt::Debug> Timeline<L> {
    pub fn builder() -> TimelineBuilder<L> {
        TimelineBuilder::new()
    }

    /// Register an observer for labeled stage entries.
    pub fn set_observer(&mut self, observer: impl FnMut(&L) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimelineState::Running
    }

    pub fn is_done(&self) -> bool {
        self.state == TimelineState::Done
    }

    /// Begin the sequence. Only the first call has any effect; a timeline
    /// is never restarted.
    pub fn start(&mut self) {
        if self.state != TimelineState::Idle {
            return;
        }
        if self.stages.is_empty() {
            self.state = TimelineState::Done;
            return;
        }
        self.state = TimelineState::Running;
        self.current = 0;
        self.enter_current();
        // Leading instantaneous stages complete on the spot.
        while self.state == TimelineState::Running
            && matches!(self.stages[self.current].kind, StageKind::Set)
        {
            self.advance();
        }
    }

    /// Advance the timeline by `dt_ms` of real time.
    ///
    /// Delay stages consume the budget directly; tween stages consume it
    /// in whole [`TICK_MS`] ticks, carrying any remainder forward.
    pub fn tick(&mut self, dt_ms: f32) {
        if self.state != TimelineState::Running {
            return;
        }
        let mut budget_ms = dt_ms;
        while self.state == TimelineState::Running {
            let finished = match &mut self.stages[self.current].kind {
                StageKind::Set => true,
                StageKind::Delay { remaining_ms } => {
                    if budget_ms < *remaining_ms {
                        *remaining_ms -= budget_ms;
                        return;
                    }
                    budget_ms -= *remaining_ms;
                    *remaining_ms = 0.0;
                    true
                }
                StageKind::Tween { stepper, action } => {
                    self.tick_accum_ms += budget_ms;
                    budget_ms = 0.0;
                    let mut done = false;
                    while self.tick_accum_ms >= TICK_MS {
                        self.tick_accum_ms -= TICK_MS;
                        done = stepper.step();
                        action(stepper.eased());
                        if done {
                            break;
                        }
                    }
                    if !done {
                        return;
                    }
                    // Hand unconsumed time to the next stage.
                    budget_ms = self.tick_accum_ms;
                    self.tick_accum_ms = 0.0;
                    true
                }
            };
            if finished {
                self.advance();
            }
        }
    }

    fn advance(&mut self) {
        self.current += 1;
        if self.current >= self.stages.len() {
            self.state = TimelineState::Done;
            tracing::info!(stages = self.stages.len(), "timeline settled");
            return;
        }
        self.enter_current();
    }

    fn enter_current(&mut self) {
        let stage = &mut self.stages[self.current];
        if let Some(label) = &stage.label {
            tracing::debug!(stage = ?label, "entering stage");
            if let Some(observer) = &mut self.observer {
                observer(label);
            }
        }
        for action in &mut stage.on_enter {
            action();
        }
    }
}

/// Builder for declaring a timeline's stage list in order.
pub struct TimelineBuilder<L> {
    stages: Vec<Stage<L>>,
}

impl<L: std::fmt::Debug> TimelineBuilder<L> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stepper-driven stage: `increment` of progress per tick,
    /// `action` called each tick with the eased progress.
    pub fn tween(
        mut self,
        label: Option<L>,
        increment: f32,
        easing: Easing,
        action: impl FnMut(f32) + 'static,
    ) -> Self {
        self.stages.push(Stage {
            label,
            on_enter: SmallVec::new(),
            kind: StageKind::Tween {
                stepper: Stepper::new(increment, easing),
                action: Box::new(action),
            },
        });
        self
    }

    /// Append an instantaneous stage.
    pub fn set(mut self, label: Option<L>, action: impl FnMut() + 'static) -> Self {
        self.stages.push(Stage {
            label,
            on_enter: smallvec![Box::new(action) as EnterAction],
            kind: StageKind::Set,
        });
        self
    }

    /// Append an unlabeled fixed wait.
    pub fn delay(mut self, duration_ms: f32) -> Self {
        self.stages.push(Stage {
            label: None,
            on_enter: SmallVec::new(),
            kind: StageKind::Delay {
                remaining_ms: duration_ms,
            },
        });
        self
    }

    /// Attach an additional entry action to the most recently added stage.
    pub fn on_enter(mut self, action: impl FnMut() + 'static) -> Self {
        if let Some(stage) = self.stages.last_mut() {
            stage.on_enter.push(Box::new(action));
        }
        self
    }

    pub fn build(self) -> Timeline<L> {
        Timeline {
            stages: self.stages,
            current: 0,
            state: TimelineState::Idle,
            tick_accum_ms: 0.0,
            observer: None,
        }
    }
}

impl<L: std::fmt::Debug> Default for TimelineBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorded(timeline: &mut Timeline<&'static str>) -> Rc<RefCell<Vec<&'static str>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        timeline.set_observer(move |label| sink.borrow_mut().push(*label));
        log
    }

    #[test]
    fn stages_run_strictly_in_order() {
        let mut timeline = Timeline::builder()
            .set(Some("first"), || {})
            .delay(32.0)
            .tween(Some("second"), 0.5, Easing::Linear, |_| {})
            .set(Some("third"), || {})
            .build();
        let log = recorded(&mut timeline);

        timeline.start();
        assert_eq!(*log.borrow(), vec!["first"]);

        // 32 ms delay, then two 16 ms ticks of the tween
        for _ in 0..4 {
            timeline.tick(16.0);
        }
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
        assert!(timeline.is_done());
    }

    #[test]
    fn tween_ticks_receive_eased_progress() {
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = values.clone();
        let mut timeline: Timeline<&'static str> = Timeline::builder()
            .tween(Some("wipe"), 0.25, Easing::Linear, move |eased| {
                sink.borrow_mut().push(eased)
            })
            .build();

        timeline.start();
        for _ in 0..4 {
            timeline.tick(16.0);
        }
        assert_eq!(*values.borrow(), vec![0.25, 0.5, 0.75, 1.0]);
        assert!(timeline.is_done());
    }

    #[test]
    fn delay_holds_back_next_stage() {
        let mut timeline = Timeline::builder()
            .delay(100.0)
            .set(Some("after"), || {})
            .build();
        let log = recorded(&mut timeline);

        timeline.start();
        timeline.tick(96.0);
        assert!(log.borrow().is_empty());
        timeline.tick(16.0);
        assert_eq!(*log.borrow(), vec!["after"]);
    }

    #[test]
    fn leftover_time_flows_across_stage_boundaries() {
        let mut timeline = Timeline::builder()
            .delay(8.0)
            .delay(8.0)
            .set(Some("done"), || {})
            .build();
        let log = recorded(&mut timeline);

        timeline.start();
        // One 16 ms frame covers both 8 ms delays.
        timeline.tick(16.0);
        assert_eq!(*log.borrow(), vec!["done"]);
        assert!(timeline.is_done());
    }

    #[test]
    fn one_shot_start_and_inert_after_done() {
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let mut timeline: Timeline<&'static str> = Timeline::builder()
            .set(Some("only"), move || *sink.borrow_mut() += 1)
            .build();

        timeline.start();
        assert!(timeline.is_done());
        timeline.start();
        timeline.tick(1000.0);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn empty_timeline_settles_immediately() {
        let mut timeline: Timeline<&'static str> = Timeline::builder().build();
        assert_eq!(timeline.state(), TimelineState::Idle);
        timeline.start();
        assert!(timeline.is_done());
    }

    #[test]
    fn entry_actions_run_before_first_tick() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let enter = order.clone();
        let tick = order.clone();
        let mut timeline: Timeline<&'static str> = Timeline::builder()
            .tween(Some("reveal"), 1.0, Easing::Linear, move |_| {
                tick.borrow_mut().push("tick")
            })
            .on_enter(move || enter.borrow_mut().push("enter"))
            .build();

        timeline.start();
        timeline.tick(16.0);
        assert_eq!(*order.borrow(), vec!["enter", "tick"]);
    }
}
