//! # Tenant Scoping
//!
//! The single enforcement point for office isolation.
//!
//! Role checks used to be sprinkled through every list read; they are
//! consolidated here so no component can bypass the predicate. A super
//! admin sees everything (identity transform); everyone else sees only
//! entities stamped with their own office.

use crate::types::{Actor, Customer, Expense, Product, Sale};

/// Implemented by every entity that belongs to an office.
pub trait Scoped {
    /// The owning office name.
    fn office_name(&self) -> &str;
}

impl Scoped for Product {
    fn office_name(&self) -> &str {
        &self.office_name
    }
}

impl Scoped for Customer {
    fn office_name(&self) -> &str {
        &self.office_name
    }
}

impl Scoped for Expense {
    fn office_name(&self) -> &str {
        &self.office_name
    }
}

impl Scoped for Sale {
    /// Sales are stamped with the office that made them.
    fn office_name(&self) -> &str {
        &self.seller_office
    }
}

/// Whether `actor` may observe `item`.
///
/// Mutation paths use this directly when locating a target by id, so an
/// entity a standard actor cannot see is also one they cannot touch.
pub fn observes<T: Scoped>(actor: &Actor, item: &T) -> bool {
    actor.is_super_admin() || item.office_name() == actor.office_name
}

/// Scopes `items` to what `actor` may observe.
pub fn scope<'a, T: Scoped>(actor: &'a Actor, items: &'a [T]) -> impl Iterator<Item = &'a T> {
    items.iter().filter(move |item| observes(actor, *item))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Role;

    fn actor(role: Role, office: &str) -> Actor {
        Actor {
            name: "Rui".to_string(),
            email: "rui@alpha.com".to_string(),
            role,
            office_name: office.to_string(),
        }
    }

    fn expense(office: &str) -> Expense {
        Expense {
            id: format!("E-{}", office),
            description: "RENT".to_string(),
            amount: Money::from_cents(100000),
            category: "fixed".to_string(),
            date: chrono::Utc::now(),
            office_name: office.to_string(),
        }
    }

    #[test]
    fn test_standard_actor_sees_only_own_office() {
        let items = vec![expense("Alpha"), expense("Beta"), expense("Alpha")];
        let actor = actor(Role::OfficeAdmin, "Alpha");

        let visible: Vec<_> = scope(&actor, &items).collect();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|e| e.office_name == "Alpha"));
    }

    #[test]
    fn test_super_admin_sees_everything() {
        let items = vec![expense("Alpha"), expense("Beta")];
        let actor = actor(Role::SuperAdmin, "HQ");

        assert_eq!(scope(&actor, &items).count(), 2);
    }

    #[test]
    fn test_observes_matches_scope_semantics() {
        let alpha = expense("Alpha");
        let beta = expense("Beta");

        let standard = actor(Role::OfficeAdmin, "Alpha");
        assert!(observes(&standard, &alpha));
        assert!(!observes(&standard, &beta));

        let admin = actor(Role::SuperAdmin, "HQ");
        assert!(observes(&admin, &beta));
    }
}
