//! Failure taxonomy and result observer fan-out
//!
//! The checker never aggregates results itself; it emits one notification
//! per finding to whatever observers the harness registered.

use std::fmt;

/// The kinds of compliance failure the checker can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureType {
    MissingClass,
    MissingInterface,
    MismatchClass,
    MismatchInterface,
    MissingField,
    MismatchField,
    MissingMethod,
    MismatchMethod,
    CaughtException,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureType::MissingClass => "MISSING_CLASS",
            FailureType::MissingInterface => "MISSING_INTERFACE",
            FailureType::MismatchClass => "MISMATCH_CLASS",
            FailureType::MismatchInterface => "MISMATCH_INTERFACE",
            FailureType::MissingField => "MISSING_FIELD",
            FailureType::MismatchField => "MISMATCH_FIELD",
            FailureType::MissingMethod => "MISSING_METHOD",
            FailureType::MismatchMethod => "MISMATCH_METHOD",
            FailureType::CaughtException => "CAUGHT_EXCEPTION",
        };
        write!(f, "{}", name)
    }
}

/// Receives one notification per compliance finding.
pub trait ResultObserver {
    fn notify_failure(&mut self, failure_type: FailureType, description: &str);
}

/// A single recorded finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub failure_type: FailureType,
    pub description: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.failure_type, self.description)
    }
}

/// Observer that records every finding it receives.
#[derive(Debug, Default)]
pub struct CollectingObserver {
    pub failures: Vec<Failure>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl ResultObserver for CollectingObserver {
    fn notify_failure(&mut self, failure_type: FailureType, description: &str) {
        log::debug!("finding: {} {}", failure_type, description);
        self.failures.push(Failure {
            failure_type,
            description: description.to_string(),
        });
    }
}

/// Multi-subscriber fan-out. The list is itself an observer, so it can be
/// handed to the checker wherever a single observer is expected.
#[derive(Default)]
pub struct ObserverList {
    observers: Vec<Box<dyn ResultObserver>>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer(&mut self, observer: Box<dyn ResultObserver>) {
        self.observers.push(observer);
    }

    pub fn remove_observer(&mut self, index: usize) -> Option<Box<dyn ResultObserver>> {
        if index < self.observers.len() {
            Some(self.observers.remove(index))
        } else {
            None
        }
    }

    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl ResultObserver for ObserverList {
    fn notify_failure(&mut self, failure_type: FailureType, description: &str) {
        for observer in &mut self.observers {
            observer.notify_failure(failure_type, description);
        }
    }
}
