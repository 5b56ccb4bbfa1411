use edu_core::Role;
use services::dto::UserSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRowVm {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub level: String,
    pub active: bool,
}

impl From<&UserSummary> for UserRowVm {
    fn from(user: &UserSummary) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            level: user.level.clone().unwrap_or_else(|| "-".to_string()),
            active: user.is_active,
        }
    }
}

impl UserRowVm {
    /// Whether this row is the signed-in account, matched on the stored
    /// display name, which holds the username or the login email.
    #[must_use]
    pub fn is_current_user(&self, session_name: Option<&str>) -> bool {
        session_name.is_some_and(|name| {
            let name = name.trim();
            !name.is_empty()
                && (name == self.username || name.eq_ignore_ascii_case(&self.email))
        })
    }
}

#[must_use]
pub fn map_user_rows(items: &[UserSummary]) -> Vec<UserRowVm> {
    items.iter().map(UserRowVm::from).collect()
}

/// Case-insensitive match on username or email; an empty query keeps all.
#[must_use]
pub fn filter_users(rows: &[UserRowVm], query: &str) -> Vec<UserRowVm> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            row.username.to_lowercase().contains(&needle)
                || row.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(username: &str, email: &str) -> UserRowVm {
        UserRowVm {
            id: 1,
            username: username.into(),
            email: email.into(),
            role: Role::Student,
            level: "beginner".into(),
            active: true,
        }
    }

    #[test]
    fn filter_matches_username_or_email() {
        let rows = vec![row("Amira", "amira@gmail.com"), row("samy", "s.b@uvt.rnu.tn")];
        assert_eq!(filter_users(&rows, "  ").len(), 2);
        assert_eq!(filter_users(&rows, "AMI")[0].username, "Amira");
        assert_eq!(filter_users(&rows, "uvt")[0].username, "samy");
        assert!(filter_users(&rows, "zzz").is_empty());
    }

    #[test]
    fn current_user_matches_username_or_login_email() {
        let admin = row("root", "Root@gmail.com");
        assert!(admin.is_current_user(Some("root")));
        assert!(admin.is_current_user(Some("root@gmail.com")));
        assert!(!admin.is_current_user(Some("amira")));
        assert!(!admin.is_current_user(Some("  ")));
        assert!(!admin.is_current_user(None));
    }
}
