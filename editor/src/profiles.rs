//! Profile store client.
//!
//! Reads and creates rows in the external account store's `profiles`
//! table over its REST surface. This workflow never updates a row; usage
//! counters belong to the store.

use anyhow::Error;
use writing::Profile;

pub struct ProfileStore {
    base: String,
    api_key: String,
    http: reqwest::Client,
}

impl ProfileStore {
    pub fn new(base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the profile row for `user_id`, `None` when no row exists yet.
    pub async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, Error> {
        let rows: Vec<Profile> = self
            .http
            .get(format!("{}/rest/v1/profiles", self.base))
            .query(&[("id", format!("eq.{user_id}").as_str()), ("select", "*")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(rows.into_iter().next())
    }

    /// Insert the default tier1 row for a brand-new account.
    pub async fn create_profile(&self, user_id: &str) -> Result<Profile, Error> {
        let row = Profile::signup_defaults(user_id);

        self.http
            .post(format!("{}/rest/v1/profiles", self.base))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&row)
            .send()
            .await?
            .error_for_status()?;

        Ok(row)
    }
}
