//! Profile update builder.
//!
//! All profile fields besides the username are nullable, so every field here
//! is `Option<Option<String>>`: outer `None` leaves the column alone, inner
//! `None` clears it.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
}

impl ProfileUpdate {
    /// True when no field is set (the UPDATE would be a no-op).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.city.is_none()
            && self.country.is_none()
            && self.bio.is_none()
    }
}

pub struct ProfileUpdateBuilder(ProfileUpdate);

impl ProfileUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProfileUpdate::default())
    }

    #[must_use]
    pub fn full_name(mut self, full_name: Option<String>) -> Self {
        self.0.full_name = Some(full_name);
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.0.phone = Some(phone);
        self
    }

    #[must_use]
    pub fn email(mut self, email: Option<String>) -> Self {
        self.0.email = Some(email);
        self
    }

    #[must_use]
    pub fn city(mut self, city: Option<String>) -> Self {
        self.0.city = Some(city);
        self
    }

    #[must_use]
    pub fn country(mut self, country: Option<String>) -> Self {
        self.0.country = Some(country);
        self
    }

    #[must_use]
    pub fn bio(mut self, bio: Option<String>) -> Self {
        self.0.bio = Some(bio);
        self
    }

    #[must_use]
    pub fn build(self) -> ProfileUpdate {
        self.0
    }
}

impl Default for ProfileUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
