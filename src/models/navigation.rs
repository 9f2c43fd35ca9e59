//! Navigation descriptors and icons.
//!
//! Static data used by the marketing shell: top-level nav entries, the
//! product catalogue shown in the mega-dropdown and the About submenu.

use serde::{Serialize, Serializer};

/// Icons used across the site, rendered as lucide placeholders.
///
/// Variants are named after the lucide icon they stand for.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    BarChart3,
    Building,
    Check,
    ChevronRight,
    Database,
    DollarSign,
    Download,
    FileText,
    Globe,
    Heart,
    Mail,
    MapPin,
    Menu,
    Phone,
    Printer,
    Settings,
    Shield,
    Star,
    Store,
    Target,
    TrendingUp,
    Users,
    X,
    Zap,
}

impl Icon {
    /// The lucide icon name.
    ///
    /// ```
    /// use idms_site::models::Icon;
    ///
    /// assert_eq!(Icon::BarChart3.name(), "bar-chart-3");
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            Icon::ArrowRight => "arrow-right",
            Icon::BarChart3 => "bar-chart-3",
            Icon::Building => "building",
            Icon::Check => "check",
            Icon::ChevronRight => "chevron-right",
            Icon::Database => "database",
            Icon::DollarSign => "dollar-sign",
            Icon::Download => "download",
            Icon::FileText => "file-text",
            Icon::Globe => "globe",
            Icon::Heart => "heart",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::Menu => "menu",
            Icon::Phone => "phone",
            Icon::Printer => "printer",
            Icon::Settings => "settings",
            Icon::Shield => "shield",
            Icon::Star => "star",
            Icon::Store => "store",
            Icon::Target => "target",
            Icon::TrendingUp => "trending-up",
            Icon::Users => "users",
            Icon::X => "x",
            Icon::Zap => "zap",
        }
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A top-level navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Section identifier, also used for active-section highlighting.
    pub id: &'static str,
    /// Visible label.
    pub label: &'static str,
    /// Link target.
    pub href: &'static str,
    /// Icon shown in the mobile menu.
    pub icon: Icon,
    /// Nested entries, if any.
    pub sub_items: Vec<NavItem>,
}

impl NavItem {
    /// Which dropdown this entry opens, if any.
    pub fn dropdown(&self) -> Option<Dropdown> {
        match self.id {
            "products" => Some(Dropdown::Products),
            "about" => Some(Dropdown::About),
            _ => None,
        }
    }
}

/// The two dropdown menus in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dropdown {
    /// The products mega-dropdown.
    Products,
    /// The About / Team / Contact submenu.
    About,
}

/// A product shown in the mega-dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductItem {
    /// Product identifier, doubles as the product slug.
    pub id: &'static str,
    /// Icon shown next to the title.
    pub icon: Icon,
    /// Product name.
    pub title: &'static str,
    /// One-line pitch.
    pub description: &'static str,
    /// Link to the product page.
    pub href: &'static str,
    /// Tailwind classes: text color first, background second.
    pub color_class: &'static str,
}

impl ProductItem {
    /// Splits `color_class` into its icon color and badge background.
    ///
    /// ```
    /// use idms_site::models::{Icon, ProductItem};
    ///
    /// let item = ProductItem {
    ///     id: "hr-management",
    ///     icon: Icon::Users,
    ///     title: "HR Management",
    ///     description: "",
    ///     href: "/products/hr-management",
    ///     color_class: "text-green-500 bg-green-500/10",
    /// };
    /// assert_eq!(item.colors(), ("text-green-500", "bg-green-500/10"));
    /// ```
    pub fn colors(&self) -> (&'static str, &'static str) {
        let mut parts = self.color_class.split_whitespace();
        let text = parts.next().unwrap_or_default();
        let background = parts.next().unwrap_or_default();
        (text, background)
    }
}

/// A plain link in a submenu or footer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Visible label.
    pub label: &'static str,
    /// Link target.
    pub href: &'static str,
    /// Section marked active when the link is followed.
    pub section: &'static str,
}
