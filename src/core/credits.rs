use crate::config::toml_config::BillingConfig;
use crate::core::segments::calculate_sms_segments;
use crate::domain::model::SmsSegmentInfo;
use crate::utils::error::{Result, SmsError};
use serde::{Deserialize, Serialize};

/// Credits a bulk send will consume, computed before any message goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditEstimate {
    pub info: SmsSegmentInfo,
    pub recipients: usize,
    pub credits_per_segment: u64,
    pub required_credits: u64,
}

impl CreditEstimate {
    pub fn for_bulk_send(message: &str, recipients: usize, billing: &BillingConfig) -> Self {
        let info = calculate_sms_segments(message);
        let credits_per_segment = billing.credits_per_segment();

        let required_credits = (info.segments as u64)
            .saturating_mul(recipients as u64)
            .saturating_mul(credits_per_segment);

        tracing::debug!(
            "Estimated {} credits: {} segment(s) x {} recipient(s) x {} credit(s)",
            required_credits,
            info.segments,
            recipients,
            credits_per_segment
        );

        Self {
            info,
            recipients,
            credits_per_segment,
            required_credits,
        }
    }

    pub fn shortfall(&self, balance: u64) -> u64 {
        self.required_credits.saturating_sub(balance)
    }

    /// Guard run before the send loop starts.
    pub fn ensure_affordable(&self, balance: u64) -> Result<()> {
        if self.required_credits > balance {
            tracing::debug!(
                "Rejecting send: {} credits required, {} available",
                self.required_credits,
                balance
            );
            return Err(SmsError::InsufficientCredits {
                required: self.required_credits,
                available: balance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplies_segments_by_recipients() {
        let estimate =
            CreditEstimate::for_bulk_send(&"a".repeat(200), 25, &BillingConfig::default());
        assert_eq!(estimate.info.segments, 2);
        assert_eq!(estimate.required_credits, 50);
    }

    #[test]
    fn test_zero_recipients_need_no_credits() {
        let estimate = CreditEstimate::for_bulk_send("Sale today", 0, &BillingConfig::default());
        assert_eq!(estimate.required_credits, 0);
        assert!(estimate.ensure_affordable(0).is_ok());
    }

    #[test]
    fn test_rejects_when_balance_short() {
        let estimate = CreditEstimate::for_bulk_send("Sale today", 10, &BillingConfig::default());
        assert!(estimate.ensure_affordable(10).is_ok());
        assert_eq!(estimate.shortfall(7), 3);

        match estimate.ensure_affordable(7) {
            Err(SmsError::InsufficientCredits {
                required,
                available,
            }) => {
                assert_eq!(required, 10);
                assert_eq!(available, 7);
            }
            other => panic!("expected InsufficientCredits, got {:?}", other),
        }
    }
}
