use log::debug;

use crate::page::Page;
use crate::scheduler::{Scheduler, Timer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            ToastKind::Info => "#00D4AA",
            ToastKind::Success => "#22C55E",
            ToastKind::Error => "#EF4444",
        }
    }

    pub fn foreground(self) -> &'static str {
        match self {
            ToastKind::Error => "#ffffff",
            ToastKind::Info | ToastKind::Success => "#081018",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

/// Holds the single visible toast. A new toast evicts the old one
/// on the spot; leftover timers of an evicted toast are dropped by id.
#[derive(Debug)]
pub struct ToastSlot {
    next_id: u64,
    current: Option<ToastId>,
    display_ms: u32,
    fade_ms: u32,
}

impl ToastSlot {
    pub fn new(display_ms: u32, fade_ms: u32) -> Self {
        Self {
            next_id: 0,
            current: None,
            display_ms,
            fade_ms,
        }
    }

    pub fn show<P: Page, S: Scheduler>(&mut self, toast: Toast, page: &mut P, scheduler: &mut S) {
        if let Some(previous) = self.current.take() {
            page.remove_toast(previous);
        }

        self.next_id += 1;
        let id = ToastId(self.next_id);
        page.mount_toast(id, &toast);
        self.current = Some(id);
        scheduler.schedule(self.display_ms, Timer::ToastFadeOut(id));
    }

    pub fn fade_out<P: Page, S: Scheduler>(&mut self, id: ToastId, page: &mut P, scheduler: &mut S) {
        if self.current != Some(id) {
            debug!("Ignoring fade-out for evicted toast {:?}", id);
            return;
        }
        page.fade_out_toast(id);
        scheduler.schedule(self.fade_ms, Timer::ToastRemove(id));
    }

    pub fn remove<P: Page>(&mut self, id: ToastId, page: &mut P) {
        if self.current == Some(id) {
            self.current = None;
            page.remove_toast(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::testing::RecordingPage;
    use crate::scheduler::testing::ManualScheduler;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn drive(slot: &mut ToastSlot, page: &mut RecordingPage, scheduler: &mut ManualScheduler, until_ms: u64) {
        while let Some(timer) = scheduler.pop_due(until_ms) {
            match timer {
                Timer::ToastFadeOut(id) => slot.fade_out(id, page, scheduler),
                Timer::ToastRemove(id) => slot.remove(id, page),
                other => panic!("unexpected timer {:?}", other),
            }
            assert!(page.toasts.len() <= 1);
        }
        scheduler.settle_at(until_ms);
    }

    #[rstest]
    #[case(ToastKind::Info, "#00D4AA", "#081018")]
    #[case(ToastKind::Success, "#22C55E", "#081018")]
    #[case(ToastKind::Error, "#EF4444", "#ffffff")]
    fn kind_colors(#[case] kind: ToastKind, #[case] background: &str, #[case] foreground: &str) {
        assert_eq!(kind.background(), background);
        assert_eq!(kind.foreground(), foreground);
    }

    #[test]
    fn toast_fades_then_disappears() {
        let mut slot = ToastSlot::new(4000, 200);
        let mut page = RecordingPage::default();
        let mut scheduler = ManualScheduler::default();

        slot.show(Toast::new("Hello", ToastKind::Info), &mut page, &mut scheduler);
        assert_eq!(page.toasts.len(), 1);
        assert!(!page.toasts[0].fading);

        drive(&mut slot, &mut page, &mut scheduler, 3999);
        assert_eq!(page.toasts.len(), 1);

        drive(&mut slot, &mut page, &mut scheduler, 4000);
        assert!(page.toasts[0].fading);

        drive(&mut slot, &mut page, &mut scheduler, 4200);
        assert!(page.toasts.is_empty());
        assert_eq!(slot.current, None);
    }

    #[test]
    fn new_toast_evicts_old_and_survives_its_timers() {
        let mut slot = ToastSlot::new(4000, 200);
        let mut page = RecordingPage::default();
        let mut scheduler = ManualScheduler::default();

        slot.show(Toast::new("first", ToastKind::Error), &mut page, &mut scheduler);
        drive(&mut slot, &mut page, &mut scheduler, 3000);
        slot.show(Toast::new("second", ToastKind::Success), &mut page, &mut scheduler);

        assert_eq!(page.toasts.len(), 1);
        assert_eq!(page.toasts[0].toast.message, "second");

        // The first toast's fade-out at 4000ms must not touch the second.
        drive(&mut slot, &mut page, &mut scheduler, 4500);
        assert_eq!(page.toasts.len(), 1);
        assert!(!page.toasts[0].fading);

        drive(&mut slot, &mut page, &mut scheduler, 7200);
        assert!(page.toasts.is_empty());
    }

    proptest! {
        #[test]
        fn never_more_than_one_toast(steps in prop::collection::vec((any::<bool>(), 0u64..5000), 1..40)) {
            let mut slot = ToastSlot::new(4000, 200);
            let mut page = RecordingPage::default();
            let mut scheduler = ManualScheduler::default();

            for (show, wait) in steps {
                if show {
                    slot.show(Toast::new("msg", ToastKind::Info), &mut page, &mut scheduler);
                }
                prop_assert!(page.toasts.len() <= 1);
                let until = scheduler.now_ms() + wait;
                drive(&mut slot, &mut page, &mut scheduler, until);
                prop_assert!(page.toasts.len() <= 1);
            }
        }
    }
}
