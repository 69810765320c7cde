//! Request-scoped principal and role resolution
//!
//! The caller's role is resolved once per request in the auth middleware and
//! carried as a [`Principal`] value through handlers and services. Nothing
//! downstream performs its own membership lookups.

use crate::error::ApiError;

/// Group granting full administrative rights over menu and orders.
pub const MANAGER_GROUP: &str = "Manager";
/// Group for couriers who update delivery status on assigned orders.
pub const DELIVERY_CREW_GROUP: &str = "Delivery crew";

/// Authorization role, resolved first-match: Manager, then Delivery crew,
/// else Customer. A user in both groups acts as a Manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Manager,
    DeliveryCrew,
    Customer,
}

impl Role {
    pub fn from_groups<S: AsRef<str>>(groups: &[S]) -> Role {
        if groups.iter().any(|g| g.as_ref() == MANAGER_GROUP) {
            Role::Manager
        } else if groups.iter().any(|g| g.as_ref() == DELIVERY_CREW_GROUP) {
            Role::DeliveryCrew
        } else {
            Role::Customer
        }
    }
}

/// The authenticated caller, as seen by handlers and services.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: i64,
    pub role: Role,
    /// Site administrator flag; gates group membership management only.
    pub is_staff: bool,
}

impl Principal {
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }

    pub fn is_delivery_crew(&self) -> bool {
        self.role == Role::DeliveryCrew
    }
}

/// Reject callers that are not Managers.
pub fn require_manager(principal: &Principal) -> Result<(), ApiError> {
    if principal.is_manager() {
        Ok(())
    } else {
        Err(ApiError::forbidden(
            "You are not authorized to perform this action",
        ))
    }
}

/// Reject callers that are not site administrators.
pub fn require_staff(principal: &Principal) -> Result<(), ApiError> {
    if principal.is_staff {
        Ok(())
    } else {
        Err(ApiError::forbidden(
            "Administrator rights required for group management",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_first_match_wins() {
        // Member of both groups resolves as Manager, never a combined role
        let both = vec![DELIVERY_CREW_GROUP.to_string(), MANAGER_GROUP.to_string()];
        assert_eq!(Role::from_groups(&both), Role::Manager);
    }

    #[test]
    fn test_role_delivery_crew() {
        let groups = vec![DELIVERY_CREW_GROUP.to_string()];
        assert_eq!(Role::from_groups(&groups), Role::DeliveryCrew);
    }

    #[test]
    fn test_role_customer_default() {
        let none: Vec<String> = vec![];
        assert_eq!(Role::from_groups(&none), Role::Customer);

        let unknown = vec!["Kitchen".to_string()];
        assert_eq!(Role::from_groups(&unknown), Role::Customer);
    }

    #[test]
    fn test_require_manager() {
        let manager = Principal {
            user_id: 1,
            role: Role::Manager,
            is_staff: false,
        };
        let customer = Principal {
            user_id: 2,
            role: Role::Customer,
            is_staff: false,
        };
        assert!(require_manager(&manager).is_ok());
        assert!(require_manager(&customer).is_err());
    }

    #[test]
    fn test_require_staff_independent_of_role() {
        // A staff user who is also a Manager still needs is_staff for groups
        let staff_customer = Principal {
            user_id: 1,
            role: Role::Customer,
            is_staff: true,
        };
        let manager_not_staff = Principal {
            user_id: 2,
            role: Role::Manager,
            is_staff: false,
        };
        assert!(require_staff(&staff_customer).is_ok());
        assert!(require_staff(&manager_not_staff).is_err());
    }
}
