//! Fixed directory of storefront test accounts
//!
//! A read-only mapping from symbolic role to credential pair. The backend
//! gives each account a known behavior (normal, rejected, locked out,
//! problem rendering, artificial latency). Pure data: no I/O, no
//! environment coupling, safe to share between concurrently running tests.

/// Symbolic account roles with known backend behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Accepted credentials, normal behavior.
    Valid,
    /// Credentials no backend account matches.
    Invalid,
    /// Account the backend refuses to log in.
    LockedOut,
    /// Account with deliberately broken page rendering.
    Problem,
    /// Account with artificial backend latency.
    PerformanceGlitch,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Valid,
        Role::Invalid,
        Role::LockedOut,
        Role::Problem,
        Role::PerformanceGlitch,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    pub username: &'static str,
    pub password: &'static str,
}

/// Look up the credential pair for a role.
pub fn credentials(role: Role) -> Credentials {
    match role {
        Role::Valid => Credentials {
            username: "standard_user",
            password: "secret_sauce",
        },
        Role::Invalid => Credentials {
            username: "invalid_user",
            password: "wrong_password",
        },
        Role::LockedOut => Credentials {
            username: "locked_out_user",
            password: "secret_sauce",
        },
        Role::Problem => Credentials {
            username: "problem_user",
            password: "secret_sauce",
        },
        Role::PerformanceGlitch => Credentials {
            username: "performance_glitch_user",
            password: "secret_sauce",
        },
    }
}
