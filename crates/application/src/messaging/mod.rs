pub mod recheck;

pub use recheck::{recheck_channel, RecheckAck, RecheckMailbox, RecheckRequest, RecheckSender};
