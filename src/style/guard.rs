use crate::{
    animation::keyframes::StyleMap,
    foundation::error::{ScrollreelError, ScrollreelResult},
};

/// `backgroundColor` → `background-color`; kebab-case and custom properties pass through.
pub fn normalize_property_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.trim().chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn is_display_property(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case("display")
}

/// Immediate vars must never toggle `display`: layout changes belong to the host, not
/// to a scroll-bound effect.
pub fn assert_does_not_contain_display(styles: &StyleMap) -> ScrollreelResult<&StyleMap> {
    match styles.keys().find(|k| is_display_property(k)) {
        Some(key) => Err(ScrollreelError::validation(format!(
            "'{key}' may not be set through animation vars"
        ))),
        None => Ok(styles),
    }
}

/// Copy of `styles` without any display entry.
pub fn without_display(styles: &StyleMap) -> StyleMap {
    styles
        .iter()
        .filter(|(k, _)| !is_display_property(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/style/guard.rs"]
mod tests;
