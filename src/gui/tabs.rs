#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Generate,
    Signup,
    Login,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Generate, Tab::Signup, Tab::Login];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Generate => "Generate",
            Tab::Signup => "Sign up",
            Tab::Login => "Log in",
        }
    }
}

/// Exactly one tab is active at a time.
#[derive(Debug, Clone, Default)]
pub struct TabState {
    active: Tab,
}

impl TabState {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    pub fn toggle_tab(&mut self, tab: Tab) {
        self.active = tab;
    }
}
