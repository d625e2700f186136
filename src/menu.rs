/// Open/closed state of the mobile navigation overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    pub fn close(self) -> Self {
        Self { open: false }
    }

    pub fn overlay_class(self) -> &'static str {
        if self.open {
            "translate-x-0"
        } else {
            "-translate-x-full"
        }
    }

    pub fn button_label(self) -> &'static str {
        if self.open {
            "Fermer le menu"
        } else {
            "Ouvrir le menu"
        }
    }
}
