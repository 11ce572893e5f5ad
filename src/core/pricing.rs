//! Pricing calculator domain logic
//!
//! A quote is a pure function of the [`PricingSelection`]:
//! base price for the tier and billing cycle, plus a per-user charge,
//! with a flat 20% discount on the combined amount for yearly billing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// Smallest team size the calculator accepts
pub const MIN_USERS: u32 = 1;
/// Largest team size the calculator accepts
pub const MAX_USERS: u32 = 100;
/// Team size shown on first render
pub const DEFAULT_USERS: u32 = 10;
/// Multiplier applied to the combined total for yearly billing
pub const YEARLY_FACTOR: f64 = 0.8;

/// Pricing plan
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Starter,
    #[default]
    Standard,
    Premium,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Starter, Tier::Standard, Tier::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Starter => "starter",
            Tier::Standard => "standard",
            Tier::Premium => "premium",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Starter => "Starter",
            Tier::Standard => "Standard",
            Tier::Premium => "Premium",
        }
    }

    /// Base price in whole dollars for the given billing cycle
    pub fn base_price(&self, billing: BillingCycle) -> u32 {
        match (self, billing) {
            (Tier::Starter, BillingCycle::Monthly) => 29,
            (Tier::Starter, BillingCycle::Yearly) => 290,
            (Tier::Standard, BillingCycle::Monthly) => 79,
            (Tier::Standard, BillingCycle::Yearly) => 790,
            (Tier::Premium, BillingCycle::Monthly) => 149,
            (Tier::Premium, BillingCycle::Yearly) => 1490,
        }
    }

    /// Charge added per user, independent of billing cycle
    pub fn per_user_rate(&self) -> u32 {
        match self {
            Tier::Starter => 2,
            Tier::Standard => 5,
            Tier::Premium => 8,
        }
    }
}

impl FromStr for Tier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starter" => Ok(Tier::Starter),
            "standard" => Ok(Tier::Standard),
            "premium" => Ok(Tier::Premium),
            other => Err(ParseError::UnknownTier(other.to_string())),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How often the customer is billed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        }
    }

    /// Unit shown after the price, e.g. "/month"
    pub fn period_label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "month",
            BillingCycle::Yearly => "year",
        }
    }

    pub fn is_yearly(&self) -> bool {
        matches!(self, BillingCycle::Yearly)
    }
}

impl FromStr for BillingCycle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(BillingCycle::Monthly),
            "yearly" => Ok(BillingCycle::Yearly),
            other => Err(ParseError::UnknownBillingCycle(other.to_string())),
        }
    }
}

/// Number of seats, always within `MIN_USERS..=MAX_USERS`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", from = "u32")]
pub struct UserCount(u32);

impl UserCount {
    /// Build a count, clamping into the supported range
    pub fn new(users: u32) -> Self {
        Self(users.clamp(MIN_USERS, MAX_USERS))
    }

    /// Parse the raw value of the range input.
    ///
    /// Numbers outside the range are clamped; anything that is not an
    /// integer is rejected so the caller can keep its previous value.
    pub fn parse_input(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => Ok(Self::new(n.clamp(0, i64::from(MAX_USERS)) as u32)),
            Err(_) => Err(ParseError::InvalidUserCount(raw.to_string())),
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for UserCount {
    fn default() -> Self {
        Self(DEFAULT_USERS)
    }
}

impl From<u32> for UserCount {
    fn from(users: u32) -> Self {
        Self::new(users)
    }
}

impl From<UserCount> for u32 {
    fn from(count: UserCount) -> Self {
        count.0
    }
}

/// The inputs of the pricing calculator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricingSelection {
    pub users: UserCount,
    pub tier: Tier,
    pub billing: BillingCycle,
}

impl PricingSelection {
    pub fn new(users: impl Into<UserCount>, tier: Tier, billing: BillingCycle) -> Self {
        Self {
            users: users.into(),
            tier,
            billing,
        }
    }

    /// Base price plus per-user charge, before any discount
    pub fn subtotal(&self) -> u32 {
        self.tier.base_price(self.billing) + self.users.get() * self.tier.per_user_rate()
    }

    pub fn quote(&self) -> Quote {
        Quote::for_selection(self)
    }
}

/// Computed price for one selection
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub billing: BillingCycle,
    /// Exact price after discount
    pub total: f64,
}

impl Quote {
    fn for_selection(selection: &PricingSelection) -> Self {
        let subtotal = f64::from(selection.subtotal());
        let total = if selection.billing.is_yearly() {
            subtotal * YEARLY_FACTOR
        } else {
            subtotal
        };
        Self {
            billing: selection.billing,
            total,
        }
    }

    /// Total rounded to whole dollars for display
    pub fn display_total(&self) -> u64 {
        self.total.round() as u64
    }

    /// Amount removed by the yearly discount, derived from the total.
    ///
    /// `None` for monthly billing.
    pub fn savings(&self) -> Option<f64> {
        self.billing
            .is_yearly()
            .then(|| self.total / YEARLY_FACTOR - self.total)
    }

    /// e.g. "$129"
    pub fn price_label(&self) -> String {
        format!("${}", self.display_total())
    }

    /// e.g. "Save $168 per year!"
    pub fn savings_label(&self) -> Option<String> {
        self.savings()
            .map(|saved| format!("Save ${} per year!", saved.round() as u64))
    }
}

/// Convenience wrapper matching the calculator's inputs one to one
pub fn calculate_price(users: u32, tier: Tier, billing: BillingCycle) -> f64 {
    PricingSelection::new(users, tier, billing).quote().total
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // ========================================================================
    // Known prices
    // ========================================================================

    #[test]
    fn test_standard_monthly_default_team() {
        assert!(approx_eq(
            calculate_price(10, Tier::Standard, BillingCycle::Monthly),
            129.0
        ));
    }

    #[test]
    fn test_standard_yearly_default_team() {
        let price = calculate_price(10, Tier::Standard, BillingCycle::Yearly);
        assert!(approx_eq(price, 672.0));
    }

    #[test]
    fn test_starter_monthly_single_user() {
        assert!(approx_eq(
            calculate_price(1, Tier::Starter, BillingCycle::Monthly),
            31.0
        ));
    }

    #[test]
    fn test_premium_yearly_full_team() {
        // (1490 + 100 * 8) * 0.8
        assert!(approx_eq(
            calculate_price(100, Tier::Premium, BillingCycle::Yearly),
            1832.0
        ));
    }

    #[test]
    fn test_default_selection_quotes_129() {
        let quote = PricingSelection::default().quote();
        assert_eq!(quote.display_total(), 129);
        assert_eq!(quote.price_label(), "$129");
        assert_eq!(quote.savings(), None);
        assert_eq!(quote.savings_label(), None);
    }

    // ========================================================================
    // Properties over the whole input domain
    // ========================================================================

    #[test]
    fn test_price_non_negative_and_monotonic_in_users() {
        for tier in Tier::ALL {
            for billing in [BillingCycle::Monthly, BillingCycle::Yearly] {
                let mut previous = f64::MIN;
                for users in MIN_USERS..=MAX_USERS {
                    let price = calculate_price(users, tier, billing);
                    assert!(price >= 0.0, "{tier:?}/{billing:?}/{users} is negative");
                    assert!(
                        price >= previous,
                        "{tier:?}/{billing:?} decreased at {users} users"
                    );
                    previous = price;
                }
            }
        }
    }

    #[test]
    fn test_yearly_is_eighty_percent_of_combined_total() {
        for tier in Tier::ALL {
            for users in MIN_USERS..=MAX_USERS {
                let selection = PricingSelection::new(users, tier, BillingCycle::Yearly);
                let expected = f64::from(selection.subtotal()) * 0.8;
                assert!(approx_eq(selection.quote().total, expected));
            }
        }
    }

    #[test]
    fn test_discount_covers_user_cost_not_only_base() {
        let selection = PricingSelection::new(50, Tier::Starter, BillingCycle::Yearly);
        // base-only discount would give 290 * 0.8 + 100 = 332
        assert!(approx_eq(selection.quote().total, 312.0));
    }

    // ========================================================================
    // Savings
    // ========================================================================

    #[test]
    fn test_savings_derived_from_total() {
        let quote = PricingSelection::new(10, Tier::Standard, BillingCycle::Yearly).quote();
        let saved = quote.savings().unwrap();
        assert!(approx_eq(saved, 168.0));
        assert_eq!(quote.savings_label().as_deref(), Some("Save $168 per year!"));
    }

    #[test]
    fn test_monthly_has_no_savings() {
        for tier in Tier::ALL {
            let quote = PricingSelection::new(42, tier, BillingCycle::Monthly).quote();
            assert!(quote.savings().is_none());
        }
    }

    #[test]
    fn test_display_total_rounds_to_nearest() {
        // (290 + 3 * 2) * 0.8 = 236.8
        let quote = PricingSelection::new(3, Tier::Starter, BillingCycle::Yearly).quote();
        assert!(approx_eq(quote.total, 236.8));
        assert_eq!(quote.display_total(), 237);
        assert_eq!(quote.price_label(), "$237");
        assert_eq!(quote.savings_label().as_deref(), Some("Save $59 per year!"));
    }

    #[test]
    fn test_display_total_whole_yearly_amount() {
        // (790 + 7 * 5) * 0.8 = 660
        let quote = PricingSelection::new(7, Tier::Standard, BillingCycle::Yearly).quote();
        assert!(approx_eq(quote.total, 660.0));
        assert_eq!(quote.display_total(), 660);
        assert_eq!(quote.savings_label().as_deref(), Some("Save $165 per year!"));
    }

    // ========================================================================
    // Boundary parsing
    // ========================================================================

    #[test]
    fn test_user_count_clamps() {
        assert_eq!(UserCount::new(0).get(), 1);
        assert_eq!(UserCount::new(1).get(), 1);
        assert_eq!(UserCount::new(100).get(), 100);
        assert_eq!(UserCount::new(101).get(), 100);
        assert_eq!(UserCount::default().get(), 10);
    }

    #[test]
    fn test_user_count_parse_input() {
        assert_eq!(UserCount::parse_input("25"), Ok(UserCount::new(25)));
        assert_eq!(UserCount::parse_input(" 7 "), Ok(UserCount::new(7)));
        assert_eq!(UserCount::parse_input("-5"), Ok(UserCount::new(1)));
        assert_eq!(UserCount::parse_input("9999999999"), Ok(UserCount::new(100)));
        assert_eq!(
            UserCount::parse_input("ten"),
            Err(ParseError::InvalidUserCount("ten".to_string()))
        );
        assert!(UserCount::parse_input("").is_err());
    }

    #[test]
    fn test_tier_from_str() {
        for tier in Tier::ALL {
            assert_eq!(tier.as_str().parse::<Tier>(), Ok(tier));
        }
        assert_eq!(
            "enterprise".parse::<Tier>(),
            Err(ParseError::UnknownTier("enterprise".to_string()))
        );
    }

    #[test]
    fn test_billing_cycle_from_str() {
        assert_eq!("monthly".parse::<BillingCycle>(), Ok(BillingCycle::Monthly));
        assert_eq!("yearly".parse::<BillingCycle>(), Ok(BillingCycle::Yearly));
        assert!("weekly".parse::<BillingCycle>().is_err());
    }

    #[test]
    fn test_serde_names_are_lowercase() {
        let selection = PricingSelection::new(12, Tier::Premium, BillingCycle::Yearly);
        let json = serde_json::to_value(selection).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "users": 12, "tier": "premium", "billing": "yearly" })
        );
    }

    #[test]
    fn test_deserialized_user_count_is_clamped() {
        let selection: PricingSelection = serde_json::from_str(
            r#"{ "users": 500, "tier": "starter", "billing": "monthly" }"#,
        )
        .unwrap();
        assert_eq!(selection.users.get(), 100);
    }
}
