//! Header navigation state: dropdowns, mobile menu and active section.

use serde::Serialize;

use crate::models::Dropdown;

/// Open/closed flags for the header menus.
///
/// The products and about flags are independent: opening one does not
/// close the other. Desktop hover and mobile clicks drive the same flags.
/// Clicking outside a menu does not close it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavMenus {
    products_open: bool,
    about_open: bool,
    mobile_open: bool,
    active_section: String,
}

impl NavMenus {
    /// All menus closed, with `active_section` highlighted.
    pub fn new(active_section: impl Into<String>) -> Self {
        Self {
            products_open: false,
            about_open: false,
            mobile_open: false,
            active_section: active_section.into(),
        }
    }

    /// Whether the given dropdown is showing.
    pub fn is_open(&self, dropdown: Dropdown) -> bool {
        match dropdown {
            Dropdown::Products => self.products_open,
            Dropdown::About => self.about_open,
        }
    }

    /// Whether the mobile slide-in menu is showing.
    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    /// The highlighted navigation section id.
    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    /// Whether `section` is the highlighted navigation section.
    pub fn is_active(&self, section: &str) -> bool {
        self.active_section == section
    }

    /// Sets a dropdown flag directly.
    pub fn set_open(&mut self, dropdown: Dropdown, open: bool) {
        match dropdown {
            Dropdown::Products => self.products_open = open,
            Dropdown::About => self.about_open = open,
        }
    }

    /// Pointer entered the dropdown trigger (desktop).
    pub fn hover_enter(&mut self, dropdown: Dropdown) {
        self.set_open(dropdown, true);
    }

    /// Pointer left the dropdown trigger (desktop).
    pub fn hover_leave(&mut self, dropdown: Dropdown) {
        self.set_open(dropdown, false);
    }

    /// Dropdown header clicked (mobile).
    pub fn toggle(&mut self, dropdown: Dropdown) {
        let open = self.is_open(dropdown);
        self.set_open(dropdown, !open);
    }

    /// Hamburger button clicked.
    pub fn open_mobile(&mut self) {
        self.mobile_open = true;
    }

    /// Close button in the mobile menu clicked.
    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    /// A menu link was followed.
    ///
    /// Marks `section` active, closes the mobile menu and the dropdown the
    /// link sits in, if any.
    pub fn follow_link(&mut self, section: &str, within: Option<Dropdown>) {
        self.active_section = section.to_string();
        self.mobile_open = false;
        if let Some(dropdown) = within {
            self.set_open(dropdown, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_closed() {
        let menus = NavMenus::new("pricing");
        assert!(!menus.is_open(Dropdown::Products));
        assert!(!menus.is_open(Dropdown::About));
        assert!(!menus.is_mobile_open());
        assert!(menus.is_active("pricing"));
    }

    #[test]
    fn test_flags_are_independent() {
        let mut menus = NavMenus::new("pricing");
        menus.hover_enter(Dropdown::Products);
        menus.toggle(Dropdown::About);
        assert!(menus.is_open(Dropdown::Products));
        assert!(menus.is_open(Dropdown::About));

        menus.hover_leave(Dropdown::Products);
        assert!(!menus.is_open(Dropdown::Products));
        assert!(menus.is_open(Dropdown::About));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut menus = NavMenus::new("pricing");
        menus.toggle(Dropdown::Products);
        menus.toggle(Dropdown::Products);
        assert_eq!(menus, NavMenus::new("pricing"));
    }

    #[test]
    fn test_follow_link_closes_menus() {
        let mut menus = NavMenus::new("pricing");
        menus.open_mobile();
        menus.toggle(Dropdown::About);
        menus.toggle(Dropdown::Products);

        menus.follow_link("contact", Some(Dropdown::About));

        assert!(menus.is_active("contact"));
        assert!(!menus.is_mobile_open());
        assert!(!menus.is_open(Dropdown::About));
        assert!(menus.is_open(Dropdown::Products));
    }
}
