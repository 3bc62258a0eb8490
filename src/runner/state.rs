/// Lifecycle of a runner. `Cancelled` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunnerState {
    Uninitialized,
    Running,
    Cancelled,
}

impl std::fmt::Display for RunnerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Uninitialized => "uninitialized",
            Self::Running => "running",
            Self::Cancelled => "cancelled",
        })
    }
}

/// What `init` does with already-bound players when a later request fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitFailurePolicy {
    /// Cancel every player bound so far; the runner ends `Cancelled`.
    #[default]
    Rollback,
    /// Leave bound players running; the runner ends `Running` with a partial collection.
    KeepPartial,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RunnerOptions {
    #[serde(default)]
    pub on_init_failure: InitFailurePolicy,
}
