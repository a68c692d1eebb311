//! Permission checks used to show or hide action buttons

use leptos::prelude::*;
use std::collections::BTreeSet;

/// Granted permission names; `*` and `prefix.*` act as wildcards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    granted: BTreeSet<String>,
}

impl PermissionSet {
    pub fn new<I, S>(granted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            granted: granted
                .into_iter()
                .map(Into::into)
                .map(|p: String| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    pub fn allows(&self, permission: &str) -> bool {
        if self.granted.contains("*") || self.granted.contains(permission) {
            return true;
        }
        // "masters.units.create" is covered by "masters.*" and "masters.units.*"
        let mut prefix = permission;
        while let Some((head, _)) = prefix.rsplit_once('.') {
            if self.granted.contains(&format!("{}.*", head)) {
                return true;
            }
            prefix = head;
        }
        false
    }
}

/// Reactive permission context provided by the app root
#[derive(Clone, Copy)]
pub struct Permissions {
    set: RwSignal<PermissionSet>,
}

impl Permissions {
    pub fn new(set: PermissionSet) -> Self {
        Self {
            set: RwSignal::new(set),
        }
    }

    /// Tracked check, usable inside views
    pub fn can(&self, permission: &str) -> bool {
        self.set.with(|s| s.allows(permission))
    }

    pub fn replace(&self, set: PermissionSet) {
        self.set.set(set);
    }
}

/// Missing context means nothing is granted
pub fn use_permissions() -> Permissions {
    use_context::<Permissions>().unwrap_or_else(|| {
        log::warn!("Permissions not provided in context, denying all actions");
        Permissions::new(PermissionSet::default())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_wildcard_grants() {
        let set = PermissionSet::new(["masters.units.create", "reports.*"]);
        assert!(set.allows("masters.units.create"));
        assert!(!set.allows("masters.units.delete"));
        assert!(set.allows("reports.sales.view"));
        assert!(!set.allows("reports"));
    }

    #[test]
    fn test_star_grants_everything() {
        let set = PermissionSet::new(["*"]);
        assert!(set.allows("masters.hsn_codes.create"));
    }

    #[test]
    fn test_empty_set_denies() {
        let set = PermissionSet::new(["  ", ""]);
        assert!(!set.allows("masters.categories.create"));
    }
}
