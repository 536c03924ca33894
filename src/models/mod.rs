pub mod channel;
pub(crate) mod envelope;
pub mod follow;
