//! Lockstep mission runner.
//!
//! Drives one complete autonomous run tick by tick: housekeeping tasks,
//! rig physics, then the sequencer, all against the shared simulation
//! clock. The loop exits as soon as the sequencer leaves `Running` and the
//! whole run is summarized in a [`MissionReport`].

use depot_core::mission::{
    MissionSequencer, Phase, PhaseEvent, SequencerState, TransitionFault,
};
use depot_core::parameters::MissionParams;
use depot_core::scheduler::{TaskSlot, TaskStats, TickTask};
use depot_core::traits::TimeSource;

use crate::clock::SimClock;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::rig::SimRig;
use crate::vision::ScriptedClassifier;

/// Summary of a finished simulation run.
#[derive(Debug, Clone)]
pub struct MissionReport {
    /// Phases whose bodies ran, in execution order.
    pub traversal: Vec<Phase>,
    /// Phase body count as seen by the sequencer.
    pub phases_executed: u32,
    /// Completion fires that arrived after their wait was abandoned.
    pub stale_fires: u32,
    /// Sequencer state when the loop exited.
    pub final_state: SequencerState,
    /// The latched fault, if the run stopped on an illegal switch.
    pub fault: Option<TransitionFault>,
    /// Ticks consumed.
    pub ticks: u32,
    /// Rig time at exit, in microseconds.
    pub sim_time_us: u64,
}

/// Owns every piece of a simulated run and steps them in lockstep.
pub struct MissionRunner {
    config: SimConfig,
    clock: SimClock,
    rig: SimRig,
    sequencer: MissionSequencer,
    classifier: ScriptedClassifier,
    pre_tasks: Vec<Box<dyn TickTask>>,
    post_tasks: Vec<Box<dyn TickTask>>,
    pre_stats: Vec<TaskStats>,
    post_stats: Vec<TaskStats>,
}

impl MissionRunner {
    /// Create a runner.
    ///
    /// `clock` must be the instance (or a clone) the classifier samples
    /// against, so scan passes consume the same time the sequencer reads.
    /// Returns [`SimError::InvalidParams`] when `params` fails validation.
    pub fn new(
        config: SimConfig,
        params: MissionParams,
        clock: SimClock,
        classifier: ScriptedClassifier,
    ) -> Result<Self, SimError> {
        if !params.is_valid() {
            return Err(SimError::InvalidParams);
        }
        let rig = SimRig::new(config.clone());
        let sequencer = MissionSequencer::new(params);
        Ok(Self {
            config,
            clock,
            rig,
            sequencer,
            classifier,
            pre_tasks: Vec::new(),
            post_tasks: Vec::new(),
            pre_stats: Vec::new(),
            post_stats: Vec::new(),
        })
    }

    /// Register a housekeeping task in the given slot.
    pub fn add_task(&mut self, slot: TaskSlot, task: Box<dyn TickTask>) {
        match slot {
            TaskSlot::PreMission => {
                self.pre_tasks.push(task);
                self.pre_stats.push(TaskStats::default());
            }
            TaskSlot::PostMission => {
                self.post_tasks.push(task);
                self.post_stats.push(TaskStats::default());
            }
        }
    }

    /// Run the mission to completion or until the tick budget runs out.
    pub fn run(&mut self) -> Result<MissionReport, SimError> {
        let initial = if self.sequencer.params().scan_enable {
            Phase::ScanTarget
        } else {
            Phase::LowerLift
        };

        let mut traversal: Vec<Phase> = Vec::new();
        let mut fault: Option<TransitionFault> = None;
        let _ = self.sequencer.start(initial, &self.clock);

        let mut ticks = 0u32;
        while ticks < self.config.max_ticks {
            self.run_slot(TaskSlot::PreMission);

            let dt_us = self.clock.step_us();
            self.rig.step(dt_us, self.sequencer.signal());

            let events = self
                .sequencer
                .tick(&mut self.rig, &mut self.classifier, &self.clock);
            for event in &events {
                match event {
                    PhaseEvent::PhaseExecuted(phase) => traversal.push(*phase),
                    PhaseEvent::Fault(f) => fault = Some(*f),
                    _ => {}
                }
            }

            self.run_slot(TaskSlot::PostMission);
            self.clock.tick();
            ticks += 1;

            if self.sequencer.state() != SequencerState::Running {
                break;
            }
        }

        if self.sequencer.state() == SequencerState::Running {
            return Err(SimError::TickBudgetExhausted(ticks));
        }

        Ok(MissionReport {
            traversal,
            phases_executed: self.sequencer.phases_executed(),
            stale_fires: self.sequencer.signal().stale_fires(),
            final_state: self.sequencer.state(),
            fault,
            ticks,
            sim_time_us: self.rig.sim_time_us(),
        })
    }

    fn run_slot(&mut self, slot: TaskSlot) {
        let now_us = self.clock.now_us();
        let (tasks, all_stats) = match slot {
            TaskSlot::PreMission => (&mut self.pre_tasks, &mut self.pre_stats),
            TaskSlot::PostMission => (&mut self.post_tasks, &mut self.post_stats),
        };
        for (task, stats) in tasks.iter_mut().zip(all_stats.iter_mut()) {
            let started = std::time::Instant::now();
            task.run(now_us);
            let execution_us = started.elapsed().as_micros() as u32;
            stats.update(execution_us, task.budget_us());
        }
    }

    /// The sequencer, for post-run inspection.
    pub fn sequencer(&self) -> &MissionSequencer {
        &self.sequencer
    }

    /// The rig, for post-run inspection.
    pub fn rig(&self) -> &SimRig {
        &self.rig
    }

    /// A handle on the shared simulation clock.
    pub fn clock(&self) -> SimClock {
        self.clock.clone()
    }

    /// Execution statistics for the tasks in `slot`, in registration order.
    pub fn task_stats(&self, slot: TaskSlot) -> &[TaskStats] {
        match slot {
            TaskSlot::PreMission => &self.pre_stats,
            TaskSlot::PostMission => &self.post_stats,
        }
    }
}
