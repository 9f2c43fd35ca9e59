//! Header and footer navigation data.

use crate::models::{Icon, Link, NavItem, ProductItem};

/// Top-level entries of the header navigation.
pub fn nav_items() -> Vec<NavItem> {
    let item = |id, label, href, icon| NavItem {
        id,
        label,
        href,
        icon,
        sub_items: Vec::new(),
    };

    vec![
        item("home", "Home", "/", Icon::Building),
        NavItem {
            sub_items: detailed_products()
                .into_iter()
                .map(|product| item(product.id, product.title, product.href, product.icon))
                .collect(),
            ..item("products", "Products", "/products", Icon::Database)
        },
        item("solutions", "Solutions", "#solutions", Icon::Star),
        item("pricing", "Pricing", "/pricing", Icon::DollarSign),
        NavItem {
            sub_items: about_links()
                .into_iter()
                .map(|link| item(link.section, link.label, link.href, Icon::Globe))
                .collect(),
            ..item("about", "About", "/about", Icon::Globe)
        },
        item("contact", "Contact", "#contact", Icon::Phone),
    ]
}

/// The product catalogue shown in the mega-dropdown.
pub fn detailed_products() -> Vec<ProductItem> {
    vec![
        ProductItem {
            id: "data-management",
            icon: Icon::Database,
            title: "Data Management",
            description: "Centralize and organize all your business data in one secure platform",
            href: "/products/data-management",
            color_class: "text-blue-500 bg-blue-500/10",
        },
        ProductItem {
            id: "hr-management",
            icon: Icon::Users,
            title: "HR Management",
            description: "Complete human resource management from hiring to retirement",
            href: "/products/hr-management",
            color_class: "text-green-500 bg-green-500/10",
        },
        ProductItem {
            id: "finance-accounting",
            icon: Icon::DollarSign,
            title: "Finance & Accounting",
            description: "Streamlined financial management and accounting solutions",
            href: "/products/finance-accounting",
            color_class: "text-emerald-500 bg-emerald-500/10",
        },
        ProductItem {
            id: "inventory-management",
            icon: Icon::Store,
            title: "Inventory Management",
            description: "Track and manage your inventory with real-time insights",
            href: "/products/inventory-management",
            color_class: "text-orange-500 bg-orange-500/10",
        },
        ProductItem {
            id: "project-management",
            icon: Icon::Target,
            title: "Project Management",
            description: "Plan, execute, and track projects with advanced tools",
            href: "/products/project-management",
            color_class: "text-purple-500 bg-purple-500/10",
        },
        ProductItem {
            id: "analytics-reporting",
            icon: Icon::BarChart3,
            title: "Analytics & Reporting",
            description: "Powerful analytics and reporting for data-driven decisions",
            href: "/products/analytics-reporting",
            color_class: "text-cyan-500 bg-cyan-500/10",
        },
        ProductItem {
            id: "document-management",
            icon: Icon::FileText,
            title: "Document Management",
            description: "Secure document storage and management system",
            href: "/products/document-management",
            color_class: "text-indigo-500 bg-indigo-500/10",
        },
        ProductItem {
            id: "compliance-security",
            icon: Icon::Shield,
            title: "Compliance & Security",
            description: "Ensure data security and regulatory compliance",
            href: "/products/compliance-security",
            color_class: "text-red-500 bg-red-500/10",
        },
        ProductItem {
            id: "integration-tools",
            icon: Icon::Settings,
            title: "Integration Tools",
            description: "Seamlessly integrate with your existing business tools",
            href: "/products/integration-tools",
            color_class: "text-teal-500 bg-teal-500/10",
        },
    ]
}

/// Entries of the About submenu.
pub fn about_links() -> Vec<Link> {
    vec![
        Link {
            label: "About",
            href: "/about",
            section: "about",
        },
        Link {
            label: "Team",
            href: "/about/team",
            section: "about",
        },
        Link {
            label: "Contact Us",
            href: "/contact",
            section: "contact",
        },
    ]
}

/// A titled column of footer links.
#[derive(Debug, Clone)]
pub struct FooterColumn {
    /// Column heading.
    pub title: &'static str,
    /// Links in display order.
    pub links: Vec<Link>,
}

/// The three link columns of the footer (Company, Products, Support).
pub fn footer_columns() -> Vec<FooterColumn> {
    let link = |label, href| Link {
        label,
        href,
        section: "",
    };

    vec![
        FooterColumn {
            title: "Company",
            links: vec![
                link("About Us", "#about"),
                link("Careers", "#careers"),
                link("Blog", "#blog"),
                link("Contact", "#contact"),
            ],
        },
        FooterColumn {
            title: "Products",
            links: vec![
                link("Data Management", "#data-management"),
                link("HR Management", "#hr-management"),
                link("Finance & Accounting", "#finance-accounting"),
                link("Analytics & Reporting", "#analytics-reporting"),
            ],
        },
        FooterColumn {
            title: "Support",
            links: vec![
                link("Help Center", "#help"),
                link("Status", "#status"),
                link("Privacy Policy", "#privacy"),
                link("Terms of Service", "#terms"),
            ],
        },
    ]
}
