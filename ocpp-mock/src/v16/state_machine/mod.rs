pub(crate) mod call;
pub(crate) mod clock;
pub(crate) mod config;
pub(crate) mod rng;
pub(crate) mod session;
