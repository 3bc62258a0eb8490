use std::borrow::Cow;

use crate::{
    animation::request::AnimationRequest,
    foundation::error::{ScrollreelError, ScrollreelResult},
    host::{Host, Player},
    player::effect::KeyframeEffect,
    style::guard::{assert_does_not_contain_display, without_display},
    timeline::scroll::ScrollTimeline,
};

/// Build the request's effect, apply its immediate vars, pair the effect with `timeline`
/// and start playback. Ownership of the player passes to the caller.
///
/// A request whose effect is invalid leaves the target unstyled. A `display` entry in
/// the vars is stripped (and logged); the remaining vars still apply and the request
/// still gets its player.
pub fn bind_and_play<H: Host>(
    host: &mut H,
    request: &AnimationRequest,
    timeline: ScrollTimeline,
) -> ScrollreelResult<H::Player> {
    if !host.is_attached(&request.target) {
        return Err(ScrollreelError::resolution(format!(
            "animation target '{}' is not attached to the document",
            request.target
        )));
    }

    let effect = KeyframeEffect::new(
        request.target.clone(),
        request.keyframes.clone(),
        request.timing.clone(),
    )?;

    if let Some(vars) = &request.vars {
        let vars = match assert_does_not_contain_display(vars) {
            Ok(vars) => Cow::Borrowed(vars),
            Err(err) => {
                tracing::warn!(target_element = %request.target, %err, "stripping display from vars");
                Cow::Owned(without_display(vars))
            }
        };
        if !vars.is_empty() {
            host.apply_styles(&request.target, &vars)?;
        }
    }

    let mut player = host.create_player(effect, timeline)?;
    player.play()?;
    tracing::debug!(target_element = %request.target, "player attached to scroll timeline");
    Ok(player)
}

#[cfg(test)]
#[path = "../../tests/unit/player/binder.rs"]
mod tests;
