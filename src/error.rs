use thiserror::Error;

/// Errors surfaced by the schedule pipeline.
///
/// Missing or garbled individual fields are never errors: they are resolved
/// locally to documented defaults. Only two conditions escalate: a required
/// input document that cannot be loaded at all, and a structural assumption
/// the pipeline cannot default around (a non-numeric staff id).
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A required input document is absent or unreadable. The caller is
    /// expected to report this and halt; aggregation never runs on partial
    /// top-level inputs.
    #[error("missing document '{path}': {reason}")]
    MissingDocument { path: String, reason: String },

    /// A structural assumption was violated for one entity. Processing of
    /// that entity stops; unrelated entities are unaffected.
    #[error("validation failed: {0}")]
    Validation(String),
}
