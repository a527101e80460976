use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Value of the hidden `form-name` field the form host routes on.
pub const FORM_NAME: &str = "contact";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check every field; an empty result means the form may be sent.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.set(Field::Name, "Name is required");
        } else if name.chars().count() < 2 {
            errors.set(Field::Name, "Name must be at least 2 characters");
        }

        // The pattern sees the raw value, so surrounding whitespace is rejected.
        if self.email.trim().is_empty() {
            errors.set(Field::Email, "Email is required");
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.set(Field::Email, "Please enter a valid email address");
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.set(Field::Message, "Message is required");
        } else if message.chars().count() < 10 {
            errors.set(Field::Message, "Message must be at least 10 characters");
        }

        errors
    }

    /// URL-encoded body fields, led by the hidden `form-name`.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("form-name", FORM_NAME.to_owned())];
        pairs.extend(Field::ALL.map(|f| (f.key(), self.get(f).to_owned())));
        pairs
    }
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

impl FieldErrors {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        *self.slot(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&f| self.get(f).is_none())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|m| (f, m)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/form.rs"]
mod tests;
