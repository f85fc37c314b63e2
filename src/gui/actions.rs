use crate::gui::tabs::Tab;

// Queued from the draw code and applied after the frame's widgets are laid out,
// so drawing never needs `&mut` access to the whole app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SwitchTab(Tab),
    ToggleCard(usize),
    Generate,
    SubmitSignup,
    SubmitLogin,
    Upgrade,
}

#[derive(Default)]
pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order_and_empties() {
        let mut queue = ActionQueue::new();
        queue.push(UiAction::ToggleCard(0));
        queue.push(UiAction::ToggleCard(0));
        queue.push(UiAction::Upgrade);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, [UiAction::ToggleCard(0), UiAction::ToggleCard(0), UiAction::Upgrade]);
        assert_eq!(queue.drain().count(), 0);
    }
}
