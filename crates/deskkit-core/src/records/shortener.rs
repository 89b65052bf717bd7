use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{new_id, Collection, Record};
use crate::error::ValidationError;
use crate::storage::keys;

pub const SHORT_CODE_LEN: usize = 6;
const SHORT_HOST: &str = "https://short.ly";
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedUrl {
    pub id: String,
    pub original_url: String,
    pub short_code: String,
    #[serde(default)]
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl ShortenedUrl {
    pub fn short_url(&self) -> String {
        format!("{SHORT_HOST}/{}", self.short_code)
    }
}

impl Record for ShortenedUrl {
    const KEY: &'static str = keys::SHORTENED_URLS;
    const NAME: &'static str = "shortened url";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Collection<'_, ShortenedUrl> {
    pub fn shorten(&mut self, url: &str, custom_code: Option<&str>) -> Result<&ShortenedUrl, ValidationError> {
        self.shorten_with(url, custom_code, &mut rand::thread_rng())
    }

    pub fn shorten_with<R: Rng + ?Sized>(
        &mut self,
        url: &str,
        custom_code: Option<&str>,
        rng: &mut R,
    ) -> Result<&ShortenedUrl, ValidationError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ValidationError::EmptyField("url"));
        }
        Url::parse(url).map_err(|e| ValidationError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let code = match custom_code.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => code.to_string(),
            None => generate_code(rng),
        };
        if self.items().iter().any(|u| u.short_code == code) {
            return Err(ValidationError::DuplicateShortCode(code));
        }

        Ok(self.push_front(ShortenedUrl {
            id: new_id(),
            original_url: url.to_string(),
            short_code: code,
            clicks: 0,
            created_at: Utc::now(),
        }))
    }

    pub fn click(&mut self, id: &str) -> Result<&ShortenedUrl, ValidationError> {
        self.modify(id, |u| u.clicks += 1)
    }

    pub fn total_clicks(&self) -> u64 {
        self.items().iter().map(|u| u.clicks).sum()
    }
}

fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SHORT_CODE_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}
