//! Waitlist, contact and newsletter form validation.
//!
//! Validation never stops at the first problem: every failing field gets an
//! entry in [`FieldErrors`], keyed by the field's wire name. Each call produces
//! a fresh map, so earlier errors never linger.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use super::value_object::Interest;

/// Professions offered by the waitlist form, in display order.
pub const PROFESSIONS: [&str; 16] = [
    "Software Engineer",
    "Business Analyst",
    "Marketing Manager",
    "Designer",
    "Financial Analyst",
    "Healthcare Professional",
    "Educator",
    "Engineer",
    "Researcher",
    "Sales Representative",
    "HR Manager",
    "Lawyer",
    "Consultant",
    "Real Estate Agent",
    "Media Professional",
    "Artist",
];

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Check an email address against the site's pattern: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validation failures keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.insert("email", "Invalid email format");
    }
}

/// The waitlist sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    pub full_name: String,
    pub email: String,
    /// Usually one of [`PROFESSIONS`]; free text is accepted.
    pub profession: String,
    pub location: String,
    pub interests: Vec<Interest>,
}

impl WaitlistForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.full_name.trim().is_empty() {
            errors.insert("fullName", "Full name is required");
        }
        check_email(&mut errors, &self.email);
        if self.profession.is_empty() {
            errors.insert("profession", "Please select your profession");
        }
        if self.location.trim().is_empty() {
            errors.insert("location", "Location is required");
        }
        if self.interests.is_empty() {
            errors.insert("interests", "Please select at least one interest");
        }

        errors
    }
}

/// The contact form. Only validated; there is no submission endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }
        check_email(&mut errors, &self.email);
        if self.subject.trim().is_empty() {
            errors.insert("subject", "Subject is required");
        }
        if self.message.trim().is_empty() {
            errors.insert("message", "Message is required");
        }

        errors
    }
}

/// Newsletter sign-up check: a non-empty, well-formed email.
pub fn validate_newsletter_email(email: &str) -> Result<(), &'static str> {
    if !email.is_empty() && is_valid_email(email) {
        Ok(())
    } else {
        Err("Please enter a valid email address")
    }
}
