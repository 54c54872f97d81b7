//! Role-based navigation: which sidebar sections a role sees and which
//! pages it may reach.

use shared_types::UserRole;

/// Icon shown next to a sidebar link. The view layer maps these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Users,
    Building,
    Truck,
    Route,
    Package,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    /// Non-interactive group label.
    Header { label: &'static str },
    Link {
        label: &'static str,
        icon: NavIcon,
        href: &'static str,
    },
}

impl NavEntry {
    pub fn label(&self) -> &'static str {
        match self {
            NavEntry::Header { label } | NavEntry::Link { label, .. } => label,
        }
    }

    pub fn href(&self) -> Option<&'static str> {
        match self {
            NavEntry::Header { .. } => None,
            NavEntry::Link { href, .. } => Some(href),
        }
    }
}

const SUPER_ADMIN: &[NavEntry] = &[
    NavEntry::Header { label: "Home" },
    NavEntry::Link {
        label: "Dashboard",
        icon: NavIcon::Dashboard,
        href: "/",
    },
    NavEntry::Header { label: "Management" },
    NavEntry::Link {
        label: "Users",
        icon: NavIcon::Users,
        href: "/superAdmin/users",
    },
    NavEntry::Link {
        label: "Companies",
        icon: NavIcon::Building,
        href: "/companies",
    },
    NavEntry::Link {
        label: "Shipments",
        icon: NavIcon::Package,
        href: "/shipment",
    },
];

const COMPANY_ADMIN: &[NavEntry] = &[
    NavEntry::Header { label: "Home" },
    NavEntry::Link {
        label: "Dashboard",
        icon: NavIcon::Dashboard,
        href: "/",
    },
    NavEntry::Header { label: "Operations" },
    NavEntry::Link {
        label: "Trips",
        icon: NavIcon::Route,
        href: "/companyAdmin/Trips",
    },
    NavEntry::Link {
        label: "Shipments",
        icon: NavIcon::Truck,
        href: "/companyAdmin/Shipments",
    },
    NavEntry::Link {
        label: "Users",
        icon: NavIcon::Users,
        href: "/users",
    },
];

pub fn sections_for_role(role: UserRole) -> &'static [NavEntry] {
    match role {
        UserRole::SuperAdmin => SUPER_ADMIN,
        UserRole::CompanyAdmin => COMPANY_ADMIN,
    }
}

/// Sidebar entries for a session role. Unknown or missing roles get none.
pub fn sections_for(role: Option<&str>) -> &'static [NavEntry] {
    role.and_then(UserRole::parse)
        .map(sections_for_role)
        .unwrap_or(&[])
}

/// Whether `path` is at or below `href`. The root link only matches itself.
pub fn is_active(path: &str, href: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path == href
        || path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// The link to highlight for `path`: the longest matching one.
pub fn active_href(entries: &[NavEntry], path: &str) -> Option<&'static str> {
    entries
        .iter()
        .filter_map(NavEntry::href)
        .filter(|href| is_active(path, href))
        .max_by_key(|href| href.len())
}

fn role_area(role: UserRole) -> &'static str {
    match role {
        UserRole::SuperAdmin => "/superAdmin",
        UserRole::CompanyAdmin => "/companyAdmin",
    }
}

/// Page gate: a role reaches its sidebar targets, anything below them,
/// and anything under its own area prefix.
pub fn can_access(role: Option<&str>, path: &str) -> bool {
    let Some(role) = role.and_then(UserRole::parse) else {
        return false;
    };
    active_href(sections_for_role(role), path).is_some()
        || is_active(path, role_area(role))
}
