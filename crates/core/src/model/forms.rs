use thiserror::Error;

use super::Role;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormError {
    #[error("email is required")]
    MissingEmail,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("password is required")]
    MissingPassword,
    #[error("username is required")]
    MissingUsername,
    #[error("accounts can only be registered as teacher or student")]
    RoleNotSelfAssignable(Role),
}

/// Validated login form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// # Errors
    ///
    /// Returns `FormError` when the email is blank or malformed, or the
    /// password is empty.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self, FormError> {
        let email = validate_email(email.into())?;
        let password = password.into();
        if password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        Ok(Self { email, password })
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep the password out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Self-service sign-up form. Admin accounts are created by other admins.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    username: String,
    email: String,
    password: String,
    role: Role,
}

impl Registration {
    /// # Errors
    ///
    /// Returns `FormError` if any field is missing or the role is not
    /// teacher or student.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Result<Self, FormError> {
        let username = username.into().trim().to_string();
        if username.is_empty() {
            return Err(FormError::MissingUsername);
        }
        let email = validate_email(email.into())?;
        let password = password.into();
        if password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        if !matches!(role, Role::Teacher | Role::Student) {
            return Err(FormError::RoleNotSelfAssignable(role));
        }

        Ok(Self {
            username,
            email,
            password,
            role,
        })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

fn validate_email(raw: String) -> Result<String, FormError> {
    let email = raw.trim().to_string();
    if email.is_empty() {
        return Err(FormError::MissingEmail);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(FormError::InvalidEmail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_trim_email() {
        let creds = Credentials::new("  prof@uvt.rnu.tn ", "secret").unwrap();
        assert_eq!(creds.email(), "prof@uvt.rnu.tn");
        assert_eq!(creds.password(), "secret");
    }

    #[test]
    fn credentials_require_both_fields() {
        assert_eq!(Credentials::new("", "x"), Err(FormError::MissingEmail));
        assert_eq!(Credentials::new("a@b", ""), Err(FormError::MissingPassword));
        assert_eq!(Credentials::new("nobody", "x"), Err(FormError::InvalidEmail));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials::new("a@b.c", "hunter2").unwrap();
        assert!(!format!("{creds:?}").contains("hunter2"));
    }

    #[test]
    fn registration_refuses_admin_role() {
        let err = Registration::new("eve", "eve@gmail.com", "pw", Role::Admin).unwrap_err();
        assert_eq!(err, FormError::RoleNotSelfAssignable(Role::Admin));
    }

    #[test]
    fn registration_accepts_teacher() {
        let reg = Registration::new(" profX ", "x@gmail.com", "pw", Role::Teacher).unwrap();
        assert_eq!(reg.username(), "profX");
        assert_eq!(reg.role(), Role::Teacher);
    }
}
