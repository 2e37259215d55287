//! Client for the cheapshark.com price-comparison API.
//!
//! Search and lookup deliberately treat upstream HTTP errors differently:
//! a failed search is an error, while a lookup that comes back with an error
//! status is a soft miss (`Ok(None)`), because cheapshark reports an unknown
//! game id that way rather than with an empty body.

use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum PriceLookupError {
    #[error("Request to cheapshark.com timed out.")]
    Timeout,

    #[error("Request to cheapshark.com failed: {0}")]
    RequestFailed(String),
}

impl From<reqwest::Error> for PriceLookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

/// A game as reported by upstream. `id` and `price` keep upstream's textual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSearchResult {
    pub id: String,
    pub name: String,
    pub price: String,
}

#[derive(Debug, Deserialize)]
struct SearchRecord {
    #[serde(rename = "gameID", deserialize_with = "text_or_number")]
    game_id: String,
    external: String,
    #[serde(deserialize_with = "text_or_number")]
    cheapest: String,
}

impl From<SearchRecord> for GameSearchResult {
    fn from(record: SearchRecord) -> Self {
        Self {
            id: record.game_id,
            name: record.external,
            price: record.cheapest,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GameLookup {
    info: LookupInfo,
    #[serde(rename = "cheapestPriceEver")]
    cheapest_price_ever: CheapestPriceEver,
}

#[derive(Debug, Deserialize)]
struct LookupInfo {
    title: String,
}

#[derive(Debug, Deserialize)]
struct CheapestPriceEver {
    #[serde(deserialize_with = "text_or_number")]
    price: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    })
}

#[derive(Clone)]
pub struct CheapSharkClient {
    client: Client,
    base_url: String,
    max_results: usize,
}

impl CheapSharkClient {
    /// Reuse an existing client; its timeout applies to every request.
    #[must_use]
    pub fn with_shared_client(client: Client, base_url: &str, max_results: usize) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            client,
            base_url,
            max_results,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Gets up to `max_results` games matching `keyword`, in upstream order.
    pub async fn search_for_games(
        &self,
        keyword: &str,
    ) -> Result<Vec<GameSearchResult>, PriceLookupError> {
        let url = format!(
            "{}games?title={}",
            self.base_url,
            urlencoding::encode(keyword)
        );

        info!("Fetching games with keyword {keyword}");

        let result = async {
            let records: Vec<SearchRecord> = self
                .client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            Ok::<_, reqwest::Error>(records)
        }
        .await;

        let records = result.map_err(|e| log_failure(PriceLookupError::from(e)))?;

        Ok(records
            .into_iter()
            .take(self.max_results)
            .map(GameSearchResult::from)
            .collect())
    }

    /// Looks up one game. An upstream HTTP error status yields `Ok(None)`.
    pub async fn get_game_info(
        &self,
        game_id: i64,
    ) -> Result<Option<GameSearchResult>, PriceLookupError> {
        let url = format!("{}games?id={}", self.base_url, game_id);

        info!("Fetching game info for id {game_id}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| log_failure(PriceLookupError::from(e)))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            warn!("cheapshark.com returned {status} for game id {game_id}");
            return Ok(None);
        }

        let lookup: GameLookup = response
            .json()
            .await
            .map_err(|e| log_failure(PriceLookupError::from(e)))?;

        Ok(Some(GameSearchResult {
            id: game_id.to_string(),
            name: lookup.info.title,
            price: lookup.cheapest_price_ever.price,
        }))
    }
}

fn log_failure(err: PriceLookupError) -> PriceLookupError {
    error!("{err}");
    err
}
