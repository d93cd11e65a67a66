#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardFocus(Option<usize>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEvent {
    Enter,
    Leave,
    Activate,
}

impl CardFocus {
    pub fn focused(self) -> Option<usize> {
        self.0
    }

    pub fn is_focused(self, index: usize) -> bool {
        self.0 == Some(index)
    }

    pub fn apply(self, index: usize, event: CardEvent, is_mobile: bool) -> Self {
        match (event, is_mobile) {
            (CardEvent::Enter, false) => Self(Some(index)),
            (CardEvent::Leave, false) => Self(None),
            (CardEvent::Activate, true) if self.is_focused(index) => Self(None),
            (CardEvent::Activate, true) => Self(Some(index)),
            _ => self,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Only outside clicks close the menu. Clicks inside belong to the menu's
    /// own buttons, which run before the document listener.
    pub fn after_document_click(self, inside_menu: bool) -> Option<Self> {
        (self.is_open() && !inside_menu).then_some(Self::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_focus_follows_hover() {
        let focus = CardFocus::default().apply(1, CardEvent::Enter, false);
        assert_eq!(focus.focused(), Some(1));

        let focus = focus.apply(1, CardEvent::Leave, false);
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn desktop_ignores_taps() {
        let focus = CardFocus::default().apply(2, CardEvent::Activate, false);
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn mobile_taps_toggle_focus() {
        let focus = CardFocus::default().apply(0, CardEvent::Activate, true);
        assert!(focus.is_focused(0));

        let focus = focus.apply(2, CardEvent::Activate, true);
        assert!(focus.is_focused(2));

        let focus = focus.apply(2, CardEvent::Activate, true);
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn mobile_ignores_hover() {
        let focus = CardFocus::default().apply(0, CardEvent::Enter, true);
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn menu_closes_on_outside_click_only() {
        let open = MenuState::default().toggled();
        assert!(open.is_open());
        assert_eq!(open.after_document_click(true), None);
        assert_eq!(open.after_document_click(false), Some(MenuState::Closed));
        assert_eq!(MenuState::Closed.after_document_click(false), None);
    }

    // The button handler runs first, then the same click bubbles to the
    // document listener registered while the menu was open.
    fn click_inside(state: MenuState, handler: impl Fn(MenuState) -> MenuState) -> MenuState {
        let listener_state = state;
        let state = handler(state);
        listener_state
            .after_document_click(true)
            .unwrap_or(state)
    }

    #[test]
    fn toggle_inside_menu_closes_it() {
        let state = click_inside(MenuState::Open, MenuState::toggled);
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn selecting_a_drawer_link_closes_menu() {
        let state = click_inside(MenuState::Open, |_| MenuState::Closed);
        assert_eq!(state, MenuState::Closed);
    }
}
