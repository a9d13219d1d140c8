use crate::toast::ToastId;

/// Delayed work the controller asks for. Each timer names what it is for,
/// so a late one can be matched against current state and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    SubmitConfirmed { cycle: u64 },
    SubmitReset { cycle: u64 },
    ToastFadeOut(ToastId),
    ToastRemove(ToastId),
}

pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32, timer: Timer);
}
