use crate::{animation::request::AnimationRequest, foundation::core::TimeRange};

/// End time of a single request: `delay + duration × iterations + end_delay`.
pub fn request_end_time(request: &AnimationRequest) -> TimeRange {
    match request.timing.end_time() {
        Some(ms) => TimeRange::Finite(ms),
        None => TimeRange::Unbounded,
    }
}

/// The span every timeline of the batch is normalised against: the latest end time of
/// any request. An empty batch spans zero; one unbounded request makes the batch unbounded.
pub fn compute_time_range(requests: &[AnimationRequest]) -> TimeRange {
    requests
        .iter()
        .map(request_end_time)
        .fold(TimeRange::Finite(0.0), TimeRange::max)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/duration.rs"]
mod tests;
