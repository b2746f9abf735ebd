//! Job schedule pairing a job type with a cron expression.
//!
//! A plain data holder consumed by the external scheduler; the cron
//! syntax is not validated here.

use std::any::{type_name, TypeId};

/// An immutable (job type, cron expression) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSchedule {
    job_type: TypeId,
    job_name: &'static str,
    cron_expression: String,
}

impl JobSchedule {
    pub fn new<J: 'static>(cron_expression: impl Into<String>) -> Self {
        Self {
            job_type: TypeId::of::<J>(),
            job_name: type_name::<J>(),
            cron_expression: cron_expression.into(),
        }
    }

    pub fn job_type(&self) -> TypeId {
        self.job_type
    }

    pub fn job_name(&self) -> &'static str {
        self.job_name
    }

    pub fn cron_expression(&self) -> &str {
        &self.cron_expression
    }
}
