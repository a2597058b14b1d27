//! Core record types served by the example services

use serde::{Deserialize, Serialize};

use crate::xml::Element;

/// User ID type
pub type UserId = u64;

/// A user record returned by the user lookup service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Read-only collection of users, fixed at startup
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The two users every user service starts with
    pub fn builtin() -> Self {
        Self::new(vec![
            User::new(1, "Alice", "alice@example.com"),
            User::new(2, "Bob", "bob@example.com"),
        ])
    }

    /// First user whose id equals `id`
    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Employee record returned by the JSON query service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
}

impl Employee {
    pub fn fixed() -> Self {
        Self {
            name: "Alice".to_string(),
        }
    }
}

/// Payroll record returned by the XML query service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollRecord {
    pub salary: String,
}

impl PayrollRecord {
    pub fn fixed() -> Self {
        Self {
            salary: "5000".to_string(),
        }
    }

    /// Build the `<root><salary>…</salary></root>` tree
    pub fn to_element(&self) -> Element {
        Element::new("root").with_child(Element::new("salary").with_text(self.salary.as_str()))
    }
}
