//! Static navigation tables rendered by the sidebar.

use sidebar_types::NavigationEntry;

/// Primary routes, rendered top-down under the header.
pub const PRIMARY_ROUTES: [NavigationEntry; 6] = [
    NavigationEntry::new("Home", "house", "/"),
    NavigationEntry::new("Sales", "chart-line", "/sales"),
    NavigationEntry::new("Costs", "chart-column", "/costs"),
    NavigationEntry::new("Payments", "wallet", "/payments"),
    NavigationEntry::new("Finances", "chart-pie", "/finances"),
    NavigationEntry::new("Messages", "envelope", "/messages"),
];

/// Utility routes pinned to the bottom of the sidebar.
pub const BOTTOM_ROUTES: [NavigationEntry; 2] = [
    NavigationEntry::new("Settings", "sliders", "/settings"),
    NavigationEntry::new("Support", "phone-volume", "/support"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique_within_each_list() {
        for list in [&PRIMARY_ROUTES[..], &BOTTOM_ROUTES[..]] {
            let labels: HashSet<_> = list.iter().map(|entry| entry.label).collect();
            assert_eq!(labels.len(), list.len());
        }
    }

    #[test]
    fn tables_keep_their_order() {
        let primary: Vec<_> = PRIMARY_ROUTES.iter().map(|entry| entry.label).collect();
        assert_eq!(primary, ["Home", "Sales", "Costs", "Payments", "Finances", "Messages"]);
        let bottom: Vec<_> = BOTTOM_ROUTES.iter().map(|entry| entry.path).collect();
        assert_eq!(bottom, ["/settings", "/support"]);
    }
}
