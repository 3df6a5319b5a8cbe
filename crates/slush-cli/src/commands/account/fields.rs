use slush_db::updates::profile::{ProfileUpdate, ProfileUpdateBuilder};

/// Profile field flags shared by `register` and `update`.
///
/// An absent flag leaves the column alone; an empty string clears it.
#[derive(Debug, Default)]
pub struct ProfileFlags {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub bio: Option<String>,
}

impl ProfileFlags {
    pub fn into_update(self) -> ProfileUpdate {
        let mut builder = ProfileUpdateBuilder::new();
        if let Some(value) = self.full_name {
            builder = builder.full_name(set_or_clear(value));
        }
        if let Some(value) = self.email {
            builder = builder.email(set_or_clear(value));
        }
        if let Some(value) = self.phone {
            builder = builder.phone(set_or_clear(value));
        }
        if let Some(value) = self.city {
            builder = builder.city(set_or_clear(value));
        }
        if let Some(value) = self.country {
            builder = builder.country(set_or_clear(value));
        }
        if let Some(value) = self.bio {
            builder = builder.bio(set_or_clear(value));
        }
        builder.build()
    }
}

fn set_or_clear(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
