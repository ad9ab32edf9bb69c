//! Field validators shared by the auth and post forms.
//!
//! Each check returns `Option<String>` with a user-facing message; `None`
//! means the field passes. [`FormErrors`] collects the first failure per
//! field so the screen can render them inline.

use std::collections::BTreeMap;

/// First validation failure per field name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    /// Record the first failing check for `field`, ignoring later ones.
    pub fn check(&mut self, field: &'static str, result: Option<String>) {
        if let Some(message) = result {
            self.0.entry(field).or_insert(message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn required(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{label} is required"))
    } else {
        None
    }
}

pub fn length(value: &str, min: usize, max: usize, label: &str) -> Option<String> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        Some(format!("{label} must be {min} to {max} characters"))
    } else {
        None
    }
}

pub fn min_length(value: &str, min: usize, label: &str) -> Option<String> {
    if value.trim().chars().count() < min {
        Some(format!("{label} must be at least {min} characters"))
    } else {
        None
    }
}

/// Shape check only; the server verifies deliverability.
pub fn email(value: &str) -> Option<String> {
    let value = value.trim();
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let domain_ok = domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.');
    if local.is_empty() || !domain_ok || value.contains(' ') {
        Some("Enter a valid email address".to_string())
    } else {
        None
    }
}

/// At least 8 characters mixing letters, digits and symbols.
pub fn password(value: &str) -> Option<String> {
    let long_enough = value.chars().count() >= 8;
    let has_letter = value.chars().any(|c| c.is_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_symbol = value.chars().any(|c| !c.is_alphanumeric());
    if long_enough && has_letter && has_digit && has_symbol {
        None
    } else {
        Some("Password needs 8+ characters with letters, numbers and symbols".to_string())
    }
}

pub fn matches(value: &str, other: &str, label: &str) -> Option<String> {
    if value == other {
        None
    } else {
        Some(format!("{label} does not match"))
    }
}

/// Whole number within an inclusive range, entered as text.
pub fn numeric(value: &str, min: u32, max: u32, label: &str) -> Option<String> {
    match value.trim().parse::<u32>() {
        Ok(n) if (min..=max).contains(&n) => None,
        _ => Some(format!("{label} must be a number between {min} and {max}")),
    }
}

/// `yyyy-mm-dd`, as a date input produces it.
pub fn date(value: &str, label: &str) -> Option<String> {
    if chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_ok() {
        None
    } else {
        Some(format!("{label} is required"))
    }
}

/// The roles a user may request during onboarding.
pub const SELECTABLE_ROLES: [api::Role; 3] = [api::Role::Player, api::Role::Coach, api::Role::Referee];

pub fn role(value: Option<api::Role>) -> Option<String> {
    match value {
        Some(r) if SELECTABLE_ROLES.contains(&r) => None,
        _ => Some("Pick a role".to_string()),
    }
}

/// Role picker value back to the enum; admins are never self-selected.
pub fn parse_role(value: &str) -> Option<api::Role> {
    match value {
        "Player" => Some(api::Role::Player),
        "Coach" => Some(api::Role::Coach),
        "Referee" => Some(api::Role::Referee),
        _ => None,
    }
}

/// Validate the sign-in form before it leaves the device.
pub fn sign_in(email_value: &str, pass: &str) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check("email", required(email_value, "Email"));
    errors.check("email", email(email_value));
    errors.check("password", required(pass, "Password"));
    errors
}

/// Field feedback when the server answers a sign-in with 403.
pub fn rejected_credentials() -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check("password", Some("Invalid password".to_string()));
    errors
}

/// Validate the sign-up form as a whole.
pub fn sign_up(username: &str, email_value: &str, pass: &str, confirm: &str) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check("username", required(username, "Username"));
    errors.check("username", length(username, 3, 20, "Username"));
    errors.check("email", required(email_value, "Email"));
    errors.check("email", email(email_value));
    errors.check("password", required(pass, "Password"));
    errors.check("password", password(pass));
    errors.check("confirm", matches(confirm, pass, "Confirmation"));
    errors
}

/// Validate the account profile form.
pub fn profile(username: &str, email_value: &str, wanted_role: Option<api::Role>) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check("username", required(username, "Username"));
    errors.check("username", length(username, 3, 20, "Username"));
    errors.check("email", required(email_value, "Email"));
    errors.check("email", email(email_value));
    errors.check("role", role(wanted_role));
    errors
}

/// Validate the player record form. Numeric fields arrive as raw input text.
#[allow(clippy::too_many_arguments)]
pub fn player_profile(
    name: &str,
    surname: &str,
    nationality: &str,
    position: &str,
    footed: &str,
    height: &str,
    weight: &str,
    age: &str,
    number: &str,
) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check("name", required(name, "First name"));
    errors.check("surname", required(surname, "Last name"));
    errors.check("nationality", required(nationality, "Nationality"));
    errors.check("position", required(position, "Position"));
    errors.check("footed", required(footed, "Preferred foot"));
    errors.check("height", numeric(height, 100, 250, "Height"));
    errors.check("weight", numeric(weight, 30, 200, "Weight"));
    errors.check("age", numeric(age, 14, 60, "Age"));
    errors.check("number", numeric(number, 1, 99, "Jersey number"));
    errors
}

/// Validate the coach/referee record form.
pub fn staff_profile(
    name: &str,
    surname: &str,
    nationality: &str,
    city: &str,
    birth: &str,
) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check("name", required(name, "First name"));
    errors.check("surname", required(surname, "Last name"));
    errors.check("nationality", required(nationality, "Nationality"));
    errors.check("city", required(city, "City"));
    errors.check("birth_date", date(birth, "Birth date"));
    errors
}

/// Validate a post form. The photo is mandatory on create but a post being
/// edited keeps its photo unless replaced.
pub fn post(title: &str, content: &str, has_photo: bool, require_photo: bool) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check("title", required(title, "Title"));
    errors.check("title", length(title, 3, 50, "Title"));
    errors.check("content", required(content, "Content"));
    errors.check("content", min_length(content, 3, "Content"));
    if require_photo && !has_photo {
        errors.check("photo", Some("Add a photo".to_string()));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(email("sam@example.com").is_none());
        assert!(email("sam").is_some());
        assert!(email("sam@nodot").is_some());
        assert!(email("@example.com").is_some());
    }

    #[test]
    fn password_needs_all_three_classes() {
        assert!(password("abc12345!").is_none());
        assert!(password("abcdefgh!").is_some()); // no digit
        assert!(password("12345678!").is_some()); // no letter
        assert!(password("abcd1234").is_some()); // no symbol
        assert!(password("a1!").is_some()); // too short
    }

    #[test]
    fn sign_up_reports_first_failure_per_field() {
        let errors = sign_up("ab", "bad", "weak", "other");
        assert_eq!(
            errors.get("username"),
            Some("Username must be 3 to 20 characters")
        );
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_some());
        assert_eq!(errors.get("confirm"), Some("Confirmation does not match"));

        let ok = sign_up("samuel", "sam@example.com", "abc12345!", "abc12345!");
        assert!(ok.is_empty());
    }

    #[test]
    fn post_photo_only_required_on_create() {
        assert!(post("Derby day", "Big match ahead", false, true)
            .get("photo")
            .is_some());
        assert!(post("Derby day", "Big match ahead", false, false).is_empty());
    }

    #[test]
    fn role_must_be_selectable() {
        assert!(role(Some(api::Role::Player)).is_none());
        assert!(role(Some(api::Role::Admin)).is_some());
        assert!(role(None).is_some());
        assert_eq!(parse_role("Coach"), Some(api::Role::Coach));
        assert_eq!(parse_role("Admin"), None);
    }

    #[test]
    fn sign_in_needs_both_fields() {
        let errors = sign_in("", "");
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert!(sign_in("sam@example.com", "hunter2!").is_empty());
    }

    #[test]
    fn rejected_credentials_land_on_the_password_field() {
        let errors = rejected_credentials();
        assert_eq!(errors.get("password"), Some("Invalid password"));
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn profile_checks_username_email_and_role() {
        let errors = profile("ab", "bad", None);
        assert!(errors.get("username").is_some());
        assert!(errors.get("email").is_some());
        assert_eq!(errors.get("role"), Some("Pick a role"));
        assert!(profile("samuel", "sam@example.com", Some(api::Role::Player)).is_empty());
    }

    #[test]
    fn player_profile_checks_numeric_ranges() {
        let errors = player_profile("Sam", "Kerr", "c1", "p1", "Left", "181", "75", "24", "120");
        assert_eq!(
            errors.get("number"),
            Some("Jersey number must be a number between 1 and 99")
        );
        assert!(errors.get("height").is_none());

        let errors = player_profile("Sam", "Kerr", "c1", "p1", "Left", "tall", "75", "24", "9");
        assert!(errors.get("height").is_some());

        let ok = player_profile("Sam", "Kerr", "c1", "p1", "Left", "181", "75", "24", "9");
        assert!(ok.is_empty());
    }

    #[test]
    fn staff_profile_requires_a_parseable_birth_date() {
        let errors = staff_profile("Pep", "G", "c1", "Izmir", "not-a-date");
        assert!(errors.get("birth_date").is_some());
        assert!(staff_profile("Pep", "G", "c1", "Izmir", "1971-01-18").is_empty());
    }
}
