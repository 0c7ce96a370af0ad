use serde::{Deserialize, Deserializer};

/// Full RugCheck report for a single mint, as returned by
/// `/v1/tokens/{mint}/report`.
///
/// `top_holders`, `risks` and `markets` keep the API order. RugCheck puts the
/// most relevant entry first; nothing here re-sorts them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenReport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mint: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub token: TokenInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub token_meta: TokenMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_holders: Vec<TopHolder>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub risks: Vec<Risk>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_meta: FileMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rugged: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub markets: Vec<Market>,
}

impl TokenReport {
    /// The risk RugCheck lists first.
    pub fn primary_risk(&self) -> Option<&Risk> {
        self.risks.first()
    }

    /// The largest holder, per RugCheck ordering.
    pub fn top_holder(&self) -> Option<&TopHolder> {
        self.top_holders.first()
    }

    /// The market whose LP lock is reported.
    pub fn primary_market(&self) -> Option<&Market> {
        self.markets.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    #[serde(default)]
    pub mint_authority: Option<String>,   // None once revoked
    #[serde(default, deserialize_with = "null_as_default")]
    pub supply: f64,                      // Raw supply, may be fractional
    #[serde(default, deserialize_with = "null_as_default")]
    pub decimals: u8,
    #[serde(default)]
    pub freeze_authority: Option<String>, // None once revoked
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mutable: bool,
    #[serde(default)]
    pub update_authority: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TopHolder {
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Risk {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    #[serde(default, deserialize_with = "null_as_default")]
    pub market_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lp: Lp,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lp {
    #[serde(default, deserialize_with = "null_as_default")]
    pub lp_locked_pct: f64,
}

// RugCheck sends `null` for fields it has no data for.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
