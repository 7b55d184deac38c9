use std::fmt;

use chrono::{DateTime, Local};
use tracing::info;

use crate::audit::AuditSink;
use crate::core::{KnowledgeBase, VitalsSimulator};
use crate::models::{MonitorState, PatientProfile};

/// One line of the on-screen activity transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLine {
    pub time: DateTime<Local>,
    pub text: String,
}

impl fmt::Display for ActivityLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.time.format("%H:%M:%S"), self.text)
    }
}

/// Everything a command handler may touch, owned in one place.
pub struct Session {
    pub state: MonitorState,
    pub(crate) simulator: VitalsSimulator,
    pub(crate) knowledge: KnowledgeBase,
    pub(crate) profile: PatientProfile,
    pub(crate) audit: Box<dyn AuditSink>,
    activity: Vec<ActivityLine>,
    ticks: u64,
}

impl Session {
    pub fn new(simulator: VitalsSimulator, audit: Box<dyn AuditSink>) -> Self {
        let mut session = Self {
            state: MonitorState::default(),
            simulator,
            knowledge: KnowledgeBase::default(),
            profile: PatientProfile::default(),
            audit,
            activity: Vec::new(),
            ticks: 0,
        };
        session.note("Serena AI Med started.");
        info!("Initialization complete");
        session
    }

    pub fn with_knowledge(mut self, knowledge: KnowledgeBase) -> Self {
        self.knowledge = knowledge;
        self
    }

    pub fn with_profile(mut self, profile: PatientProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Advance the simulated vitals by one step.
    pub fn tick(&mut self) {
        self.simulator.tick(&mut self.state);
        self.ticks += 1;
    }

    /// Number of simulation steps taken so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn note(&mut self, text: impl Into<String>) {
        self.activity.push(ActivityLine {
            time: Local::now(),
            text: text.into(),
        });
    }

    pub fn activity(&self) -> &[ActivityLine] {
        &self.activity
    }

    pub fn profile(&self) -> &PatientProfile {
        &self.profile
    }

    pub fn respond(&self, query: &str) -> String {
        self.knowledge.respond(query)
    }

    pub fn audit(&self, command: &str, response: &str) {
        self.audit.record(command, response);
    }
}
