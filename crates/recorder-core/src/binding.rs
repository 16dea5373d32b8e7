//! Recording sessions push their result through [`RecordingTarget`].

use crate::controller::ShortcutController;
use crate::shortcut::Shortcut;

/// Receiver of a finished recording. `None` means the user cleared the
/// shortcut.
pub trait RecordingTarget {
    fn did_end_recording(&mut self, shortcut: Option<Shortcut>);
}

impl RecordingTarget for ShortcutController {
    fn did_end_recording(&mut self, shortcut: Option<Shortcut>) {
        self.set_content(shortcut);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use recorder_common::EventBus;

    use super::*;
    use crate::controller::ControllerOptions;
    use crate::flags::ModifierFlags;
    use crate::key_code::KeyCode;
    use crate::layout::StaticLayoutProvider;

    fn record(target: &mut dyn RecordingTarget, shortcut: Option<Shortcut>) {
        target.did_end_recording(shortcut);
    }

    #[test]
    fn recording_updates_controller() {
        let mut controller = ShortcutController::new(
            Rc::new(StaticLayoutProvider::with_builtin_layouts()),
            EventBus::default(),
            ControllerOptions::default(),
        );
        let notified = Rc::new(Cell::new(0));
        let seen = notified.clone();
        controller.observe(move |_| seen.set(seen.get() + 1));

        let shortcut = Shortcut::new(KeyCode(0x28), ModifierFlags::COMMAND);
        record(&mut controller, Some(shortcut));
        record(&mut controller, Some(shortcut));
        assert_eq!(controller.content(), Some(shortcut));
        assert_eq!(notified.get(), 1);

        record(&mut controller, None);
        assert!(controller.view().is_none());
        assert_eq!(notified.get(), 2);
    }
}
