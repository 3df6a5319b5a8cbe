//! Profile repository.
//!
//! Registration, lookup, and partial updates for author accounts.
//! Usernames are global: registration relies on the PRIMARY KEY to reject
//! duplicates rather than racing a separate existence check.

use chrono::Utc;

use slush_core::entities::Profile;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::SlushService;
use crate::updates::profile::ProfileUpdate;

const SELECT_COLS: &str =
    "username, full_name, phone, email, city, country, bio, created_at, updated_at";

fn row_to_profile(row: &libsql::Row) -> Result<Profile, DatabaseError> {
    Ok(Profile {
        username: row.get(0)?,
        full_name: get_opt_string(row, 1)?,
        phone: get_opt_string(row, 2)?,
        email: get_opt_string(row, 3)?,
        city: get_opt_string(row, 4)?,
        country: get_opt_string(row, 5)?,
        bio: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

/// True when the error is a UNIQUE violation on the profiles primary key.
fn is_username_conflict(error: &libsql::Error) -> bool {
    error
        .to_string()
        .contains("UNIQUE constraint failed: profiles.username")
}

impl SlushService {
    /// Register the acting account, with whatever profile detail is known.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::UsernameTaken` if the username is already
    /// registered, or `DatabaseError` if the INSERT fails.
    pub async fn create_profile(&self, detail: ProfileUpdate) -> Result<Profile, DatabaseError> {
        let now = Utc::now();

        let profile = Profile {
            username: self.account().to_string(),
            full_name: detail.full_name.flatten(),
            phone: detail.phone.flatten(),
            email: detail.email.flatten(),
            city: detail.city.flatten(),
            country: detail.country.flatten(),
            bio: detail.bio.flatten(),
            created_at: now,
            updated_at: now,
        };

        let result = self
            .db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO profiles ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                ),
                libsql::params![
                    profile.username.as_str(),
                    profile.full_name.clone(),
                    profile.phone.clone(),
                    profile.email.clone(),
                    profile.city.clone(),
                    profile.country.clone(),
                    profile.bio.clone(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await;

        match result {
            Ok(_) => Ok(profile),
            Err(e) if is_username_conflict(&e) => Err(DatabaseError::UsernameTaken),
            Err(e) => Err(e.into()),
        }
    }

    /// Get any profile by username.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no such profile exists.
    pub async fn get_profile(&self, username: &str) -> Result<Profile, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM profiles WHERE username = ?1"),
                [username],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_profile(&row)
    }

    /// Get the acting account's own profile.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the account is not registered yet.
    pub async fn get_own_profile(&self) -> Result<Profile, DatabaseError> {
        self.get_profile(self.account()).await
    }

    /// Partially update the acting account's profile.
    ///
    /// Only fields set in the update produce SET clauses; inner `None`
    /// clears the column.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the account is not registered.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile, DatabaseError> {
        if update.is_empty() {
            return self.get_own_profile().await;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        let columns = [
            ("full_name", &update.full_name),
            ("phone", &update.phone),
            ("email", &update.email),
            ("city", &update.city),
            ("country", &update.country),
            ("bio", &update.bio),
        ];
        for (column, value) in columns {
            if let Some(ref v) = *value {
                sets.push(format!("{column} = ?{idx}"));
                params.push(v.clone().map_or(libsql::Value::Null, Into::into));
                idx += 1;
            }
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(self.account().into());
        let sql = format!(
            "UPDATE profiles SET {} WHERE username = ?{idx}",
            sets.join(", ")
        );
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.get_own_profile().await
    }
}
