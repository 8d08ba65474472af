use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// `auction_results` 資料表的一列，所有欄位都可能缺漏
///
/// 無預設值的欄位保留原始 JSON：缺少鍵為 `None`，`null` 為 `Some(Value::Null)`。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    #[serde(deserialize_with = "present")]
    pub case_number: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub property_address: Option<Value>,
    pub city: Option<TextValue>,
    pub zipcode: Option<TextValue>,
    #[serde(deserialize_with = "lenient_number")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "present")]
    pub plaintiff: Option<Value>,
    #[serde(deserialize_with = "present")]
    pub defendant: Option<Value>,
    #[serde(deserialize_with = "lenient_number")]
    pub judgment_amount: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub max_bid: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub bid_judgment_ratio: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub third_party_probability: Option<f64>,
    pub recommendation: Option<TextValue>,
    pub decision_rationale: Option<TextValue>,
    #[serde(deserialize_with = "lenient_number")]
    pub bedrooms: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub bathrooms: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub sqft: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub year_built: Option<f64>,
    #[serde(deserialize_with = "present")]
    pub bcpao_photo_url: Option<Value>,
    pub is_hoa_foreclosure: Option<bool>,
    #[serde(deserialize_with = "present")]
    pub senior_liens: Option<Value>,
}

/// 文字欄位；上游偶爾以數字存放（例如 `zipcode: 32901`），原樣輸出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Text(String),
    Number(serde_json::Number),
}

impl TextValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }
}

impl From<&str> for TextValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl PartialEq<&str> for TextValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub id: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_address: Option<Value>,
    pub city: TextValue,
    pub zipcode: TextValue,
    #[serde(serialize_with = "serialize_number")]
    pub latitude: f64,
    #[serde(serialize_with = "serialize_number")]
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plaintiff: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defendant: Option<Value>,
    #[serde(serialize_with = "serialize_number")]
    pub judgment_amount: f64,
    #[serde(serialize_with = "serialize_number")]
    pub max_bid: f64,
    #[serde(serialize_with = "serialize_number")]
    pub bid_judgment_ratio: f64,
    #[serde(serialize_with = "serialize_number")]
    pub ml_score: f64,
    pub recommendation: TextValue,
    pub decision_rationale: TextValue,
    #[serde(serialize_with = "serialize_number")]
    pub bedrooms: f64,
    #[serde(serialize_with = "serialize_number")]
    pub bathrooms: f64,
    #[serde(serialize_with = "serialize_number")]
    pub sqft: f64,
    #[serde(serialize_with = "serialize_number")]
    pub year_built: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcpao_photo_url: Option<Value>,
    pub is_hoa_foreclosure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senior_lien: Option<Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub bid: usize,
    pub review: usize,
    pub skip: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub auction_date: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub generated_at: DateTime<Utc>,
    pub properties: Vec<NormalizedRecord>,
    pub summary: Summary,
}

impl Report {
    /// 正規化後的紀錄不帶拍賣日，`auction_date` 一律為產生當天 (UTC) 的日期
    pub fn new(
        properties: Vec<NormalizedRecord>,
        summary: Summary,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            auction_date: generated_at.date_naive().format("%Y-%m-%d").to_string(),
            generated_at,
            properties,
            summary,
        }
    }
}

/// 鍵存在時一律回傳 `Some`，讓 `null` 與缺少鍵可以區分
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// 接受數字或數字字串；空字串視為缺漏
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(number)) => Ok(Some(number)),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected a number, found {:?}", text))),
    }
}

/// 整數值輸出為 `50000` 而非 `50000.0`
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn serialize_timestamp<S: Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
