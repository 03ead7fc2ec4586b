use crate::models::Role;

/// Route for an absent or unrecognized role.
pub const FALLBACK_ROUTE: &str = "/";

/// Role to landing-path table. Adding a role is a data change here, not a
/// branch somewhere else.
const LANDING_ROUTES: [(Role, &str); 5] = [
    (Role::Admin, "/dashboard/admin"),
    (Role::Client, "/dashboard/client"),
    (Role::Employee, "/dashboard/employee"),
    (Role::Receptionist, "/dashboard/employee"),
    (Role::Manager, "/dashboard/employee"),
];

/// Resolve the landing route for a role. Total over `Option<Role>`: every
/// known role maps per the table, `None` maps to [`FALLBACK_ROUTE`].
pub fn landing_route(role: Option<Role>) -> &'static str {
    role.and_then(|role| {
        LANDING_ROUTES
            .iter()
            .find(|(candidate, _)| *candidate == role)
            .map(|(_, path)| *path)
    })
    .unwrap_or(FALLBACK_ROUTE)
}
