pub(crate) mod scroll_timeline;
pub(crate) mod state;

use crate::foundation::error::ScrollreelResult;
use state::RunnerState;

/// Lifecycle shared by every playback strategy. Which strategy runs is decided by the
/// caller; this crate provides the scroll-timeline one.
pub trait AnimationRunner {
    /// Build and start every player. Valid only once, from `Uninitialized`.
    fn init(&mut self) -> ScrollreelResult<()>;

    /// `init` if nothing has been initialized yet, otherwise nothing.
    fn start(&mut self) -> ScrollreelResult<()>;

    /// Stop every player. A no-op before `init`; repeatable afterwards.
    fn cancel(&mut self);

    fn state(&self) -> RunnerState;
}
