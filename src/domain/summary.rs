use crate::domain::model::{NormalizedRecord, Summary};

pub const BID: &str = "BID";
pub const REVIEW: &str = "REVIEW";
pub const SKIP: &str = "SKIP";

impl Summary {
    /// 大小寫敏感的完全比對；其他標籤只計入 total
    pub fn from_records(records: &[NormalizedRecord]) -> Self {
        records.iter().fold(
            Summary {
                total: records.len(),
                ..Summary::default()
            },
            |mut summary, record| {
                match record.recommendation.as_str() {
                    Some(BID) => summary.bid += 1,
                    Some(REVIEW) => summary.review += 1,
                    Some(SKIP) => summary.skip += 1,
                    _ => {}
                }
                summary
            },
        )
    }

    pub fn labelled(&self) -> usize {
        self.bid + self.review + self.skip
    }
}
