//! Shared probes for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use nebula_fields::prelude::*;

/// Unexpected error raised by [`Outcome::Boom`] probes.
#[derive(Debug, thiserror::Error)]
#[error("probe exploded")]
pub struct Boom;

/// What a probe answers when asked to validate.
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Pass,
    Fail,
    Reject,
    Boom,
}

/// A leaf with a fixed answer that counts how often it is evaluated.
#[derive(Debug, Clone)]
pub struct Probe {
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

impl Probe {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Validate for Probe {
    fn validate(&self, _: &Record, _: &Value, _: &str) -> ValidationResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            Outcome::Pass => Ok(true),
            Outcome::Fail => Ok(false),
            Outcome::Reject => Err(ValidationError::Rejected),
            Outcome::Boom => Err(ValidationError::unexpected(Boom)),
        }
    }
}

/// A leaf that passes every value except the ones equal to `bad`, counting
/// evaluations.
#[derive(Debug, Clone)]
pub struct Except {
    bad: Value,
    calls: Arc<AtomicUsize>,
}

impl Except {
    pub fn new(bad: Value) -> Self {
        Self {
            bad,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Validate for Except {
    fn validate(&self, _: &Record, value: &Value, _: &str) -> ValidationResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(*value != self.bad)
    }
}

pub fn empty_record() -> Record {
    Record::new(&Arc::new(Schema::builder("Scratch").build()))
}

/// Returns true if `error` is the probe's unexpected error, unchanged.
pub fn is_boom(error: &ValidationError) -> bool {
    matches!(error, ValidationError::Unexpected(inner) if inner.downcast_ref::<Boom>().is_some())
}
