//! Raw auction rows to the fixed output shape.
//!
//! Every default lives in [`Defaults`]. A field falls back to its default
//! whenever the upstream value is *falsy*: missing, `null`, `0`, `""` or
//! `false`. An explicit zero judgment therefore reads the same as an unknown
//! one; see DESIGN.md before changing this.

use crate::domain::model::{NormalizedRecord, RawRecord, TextValue};

pub struct Defaults;

impl Defaults {
    pub const CITY: &'static str = "Unknown";
    pub const ZIPCODE: &'static str = "00000";
    // Brevard County, FL
    pub const LATITUDE: f64 = 28.2639;
    pub const LONGITUDE: f64 = -80.7214;
    pub const AMOUNT: f64 = 0.0;
    pub const ML_SCORE: f64 = 0.5;
    pub const RECOMMENDATION: &'static str = "REVIEW";
    pub const DECISION_RATIONALE: &'static str = "Pending analysis";
    pub const PROPERTY_METRIC: f64 = 0.0;
    pub const IS_HOA_FORECLOSURE: bool = false;
}

/// 對應 JavaScript 的 truthiness
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for TextValue {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Number(number) => number.as_f64().is_some_and(|n| n.is_truthy()),
        }
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

pub fn truthy_or<T: Truthy>(value: Option<T>, default: T) -> T {
    value.filter(Truthy::is_truthy).unwrap_or(default)
}

/// `id` 為在查詢結果中的位置（從 1 開始），與上游的主鍵無關
pub fn normalize_record(position: usize, raw: RawRecord) -> NormalizedRecord {
    NormalizedRecord {
        id: position,
        case_number: raw.case_number,
        property_address: raw.property_address,
        city: truthy_or(raw.city, Defaults::CITY.into()),
        zipcode: truthy_or(raw.zipcode, Defaults::ZIPCODE.into()),
        latitude: truthy_or(raw.latitude, Defaults::LATITUDE),
        longitude: truthy_or(raw.longitude, Defaults::LONGITUDE),
        plaintiff: raw.plaintiff,
        defendant: raw.defendant,
        judgment_amount: truthy_or(raw.judgment_amount, Defaults::AMOUNT),
        max_bid: truthy_or(raw.max_bid, Defaults::AMOUNT),
        bid_judgment_ratio: truthy_or(raw.bid_judgment_ratio, Defaults::AMOUNT),
        ml_score: truthy_or(raw.third_party_probability, Defaults::ML_SCORE),
        recommendation: truthy_or(raw.recommendation, Defaults::RECOMMENDATION.into()),
        decision_rationale: truthy_or(raw.decision_rationale, Defaults::DECISION_RATIONALE.into()),
        bedrooms: truthy_or(raw.bedrooms, Defaults::PROPERTY_METRIC),
        bathrooms: truthy_or(raw.bathrooms, Defaults::PROPERTY_METRIC),
        sqft: truthy_or(raw.sqft, Defaults::PROPERTY_METRIC),
        year_built: truthy_or(raw.year_built, Defaults::PROPERTY_METRIC),
        bcpao_photo_url: raw.bcpao_photo_url,
        is_hoa_foreclosure: truthy_or(raw.is_hoa_foreclosure, Defaults::IS_HOA_FORECLOSURE),
        senior_lien: raw.senior_liens,
    }
}

pub fn normalize_all(records: Vec<RawRecord>) -> Vec<NormalizedRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| normalize_record(index + 1, raw))
        .collect()
}
