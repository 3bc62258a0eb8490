pub(crate) mod animation;
pub(crate) mod binder;
pub(crate) mod effect;
