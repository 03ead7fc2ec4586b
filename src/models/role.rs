use std::fmt;

/// The closed set of roles the dashboards recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Client,
    Employee,
    Receptionist,
    Manager,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Client,
        Role::Employee,
        Role::Receptionist,
        Role::Manager,
    ];

    /// Parse the wire spelling of a role. Anything outside the closed set is
    /// `None`, never an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Role::Admin),
            "CLIENT" => Some(Role::Client),
            "EMPLOYEE" => Some(Role::Employee),
            "RECEPTIONIST" => Some(Role::Receptionist),
            "MANAGER" => Some(Role::Manager),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Client => "CLIENT",
            Role::Employee => "EMPLOYEE",
            Role::Receptionist => "RECEPTIONIST",
            Role::Manager => "MANAGER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
