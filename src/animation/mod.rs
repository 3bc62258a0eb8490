pub(crate) mod duration;
pub(crate) mod ease;
pub(crate) mod keyframes;
pub(crate) mod request;
pub(crate) mod timing;
