//! Transfer offers between managed teams.
//!
//! Only the rules live here (amount, budget, duplicates, expiry). Storing offers
//! and notifying the seller are the caller's job; [`seller_notification`] just
//! builds the text.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::TransferConfig;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OfferType {
    #[default]
    Transfer,
    Loan,
    ReleaseClause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
    Expired,
}

impl std::fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OfferStatus::Pending => "pending",
            OfferStatus::Accepted => "accepted",
            OfferStatus::Rejected => "rejected",
            OfferStatus::Expired => "expired",
        };
        f.write_str(s)
    }
}

/// What the buying manager submits. `amount` is in whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferRequest {
    pub player_id: String,
    /// Team currently holding the player
    pub seller_team_id: String,
    pub buyer_team_id: String,
    pub amount: f64,
    #[serde(default)]
    pub offer_type: OfferType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOffer {
    pub id: Uuid,
    pub player_id: String,
    pub from_team_id: String,
    pub to_team_id: String,
    pub amount_cents: i64,
    pub offer_type: OfferType,
    pub is_public: bool,
    pub status: OfferStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TransferOffer {
    pub fn is_pending(&self) -> bool {
        self.status == OfferStatus::Pending
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.status == OfferStatus::Expired || (self.is_pending() && now >= self.expires_at)
    }

    /// Marks a pending offer past its expiry as expired. Returns whether it changed.
    pub fn expire_if_due(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_pending() && now >= self.expires_at {
            self.status = OfferStatus::Expired;
            return true;
        }
        false
    }

    /// Seller's answer. Only pending, unexpired offers can be answered.
    pub fn respond(&mut self, accept: bool, now: DateTime<Utc>) -> Result<OfferStatus> {
        self.expire_if_due(now);
        if !self.is_pending() {
            return Err(CoreError::OfferNotPending {
                offer_id: self.id.to_string(),
                status: self.status.to_string(),
            });
        }
        self.status = if accept { OfferStatus::Accepted } else { OfferStatus::Rejected };
        Ok(self.status)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransferMarket {
    config: TransferConfig,
}

impl TransferMarket {
    pub fn new(config: TransferConfig) -> Self {
        Self { config }
    }

    pub fn to_cents(&self, amount: f64) -> i64 {
        (amount * self.config.cents_per_unit as f64).round() as i64
    }

    /// Validates `request` against the buyer's budget (in cents) and the offers
    /// already on file, and builds a pending public offer.
    pub fn create_offer(
        &self,
        request: &OfferRequest,
        buyer_budget_cents: i64,
        existing: &[TransferOffer],
        now: DateTime<Utc>,
    ) -> Result<TransferOffer> {
        if !request.amount.is_finite() || request.amount <= 0.0 {
            return Err(CoreError::InvalidAmount(request.amount));
        }
        if request.seller_team_id == request.buyer_team_id {
            return Err(CoreError::SameTeam { team_id: request.buyer_team_id.clone() });
        }

        let amount_cents = self.to_cents(request.amount);
        if buyer_budget_cents < amount_cents {
            return Err(CoreError::InsufficientBudget {
                required: amount_cents,
                available: buyer_budget_cents,
            });
        }

        let duplicate = existing.iter().any(|offer| {
            offer.player_id == request.player_id
                && offer.to_team_id == request.buyer_team_id
                && offer.is_pending()
                && !offer.is_expired(now)
        });
        if duplicate {
            return Err(CoreError::DuplicateOffer { player_id: request.player_id.clone() });
        }

        let expires_at = Duration::try_days(self.config.expiry_days)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                CoreError::InvalidConfig(format!(
                    "transfer.expiry_days out of range: {}",
                    self.config.expiry_days
                ))
            })?;

        let offer = TransferOffer {
            id: Uuid::new_v4(),
            player_id: request.player_id.clone(),
            from_team_id: request.seller_team_id.clone(),
            to_team_id: request.buyer_team_id.clone(),
            amount_cents,
            offer_type: request.offer_type,
            is_public: true,
            status: OfferStatus::Pending,
            created_at: now,
            expires_at,
        };
        info!(
            offer = %offer.id,
            player = %offer.player_id,
            buyer = %offer.to_team_id,
            amount_cents,
            "transfer offer created"
        );
        Ok(offer)
    }
}

/// Text of the notification sent to the selling manager.
pub fn seller_notification(buyer_team_name: &str, amount: f64, player_name: &str) -> String {
    format!(
        "{buyer_team_name} has made an offer of €{} for {player_name}",
        format_amount(amount)
    )
}

/// Thousands-separated amount with at most two decimals, trailing zeros dropped
/// (`1000.5` -> `1,000.5`).
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    match frac {
        0 => format!("{sign}{grouped}"),
        f if f % 10 == 0 => format!("{sign}{grouped}.{}", f / 10),
        f => format!("{sign}{grouped}.{f:02}"),
    }
}
