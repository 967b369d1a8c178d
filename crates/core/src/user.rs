//! The `users` resource: field rules and the per-operation validation chains.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::validation::{FieldValidator, ValidationChain};

static FIRSTNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{1,20}$").expect("valid firstname regex"));
static LASTNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{1,30}$").expect("valid lastname regex"));
static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{5,20}$").expect("valid username regex"));
static ABOUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_ ]{0,140}$").expect("valid about regex"));
static EMAIL_LOCAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_{|}~-]+)*$")
        .expect("valid email local-part regex")
});
static EMAIL_DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
        .expect("valid email domain regex")
});

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

/// A validated field of the `users` resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Firstname,
    Lastname,
    Username,
    Email,
    About,
}

impl UserField {
    /// Name of the field in request bodies and stored documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Firstname => "firstname",
            UserField::Lastname => "lastname",
            UserField::Username => "username",
            UserField::Email => "email",
            UserField::About => "about",
        }
    }

    /// Message reported when the field fails its check.
    pub fn message(&self) -> &'static str {
        match self {
            UserField::Firstname => "Between 1 and 20 letters",
            UserField::Lastname => "Between 1 and 30 letters",
            UserField::Username => "Between 5 and 20 letters and digits",
            UserField::Email => "Must be an email",
            UserField::About => "Only letters and spaces",
        }
    }

    /// Pattern/format check against an already-trimmed value.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            UserField::Firstname => FIRSTNAME_RE.is_match(value),
            UserField::Lastname => LASTNAME_RE.is_match(value),
            UserField::Username => USERNAME_RE.is_match(value),
            UserField::Email => is_email(value),
            UserField::About => ABOUT_RE.is_match(value),
        }
    }
}

/// Email format check: `local@domain`, dotted domain ending in an alphabetic TLD.
///
/// ASCII only: quoted local parts and internationalized addresses are rejected.
pub fn is_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_LEN {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    local.len() <= EMAIL_LOCAL_MAX_LEN
        && EMAIL_LOCAL_RE.is_match(local)
        && EMAIL_DOMAIN_RE.is_match(domain)
}

/// Chain for `POST /users/add`: username and email are mandatory.
pub fn add_user_chain() -> ValidationChain {
    ValidationChain::new()
        .field(FieldValidator::new(UserField::Firstname))
        .field(FieldValidator::new(UserField::Lastname))
        .field(FieldValidator::new(UserField::Username).required())
        .field(FieldValidator::new(UserField::Email).required())
        .field(FieldValidator::new(UserField::About))
}

/// Chain for `POST /users/update/email`.
pub fn update_email_chain() -> ValidationChain {
    ValidationChain::new().field(FieldValidator::new(UserField::Email).required())
}

/// Chain for `POST /users/update/about`.
pub fn update_about_chain() -> ValidationChain {
    ValidationChain::new().field(FieldValidator::new(UserField::About).required())
}

/// Chain selecting a single user by username (used by remove).
pub fn remove_user_chain() -> ValidationChain {
    ValidationChain::new().field(FieldValidator::new(UserField::Username).required())
}
