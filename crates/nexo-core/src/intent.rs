//! # Voice Intent Contract
//!
//! The structured contract with the natural-language collaborator.
//!
//! Transcription and parsing live entirely behind an external AI call; the
//! core only decodes the structured payload it sends back. The collaborator
//! is untrusted: the payload may be missing, truncated or malformed, and
//! decoding must never panic. Anything unrecognizable falls back to `None`
//! (the "protocol not recognized" path), missing numbers decode as 0 and
//! missing strings as fixed placeholders.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::{DEFAULT_CATEGORY, DEFAULT_CUSTOMER_NAME};

/// What the operator asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentKind {
    /// Record a sale for the given amount/customer.
    Sale,
    /// Record an expense for the given amount/category.
    Expense,
    /// Schedule an appointment; handled by the caller.
    Schedule,
}

/// A decoded voice command with defaults already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIntent {
    pub kind: IntentKind,
    pub amount: Money,
    pub customer_name: String,
    pub phone: String,
    pub category: String,
}

/// Wire shape of the collaborator response.
#[derive(Debug, Deserialize)]
struct WireIntent {
    intent: IntentKind,
    #[serde(default)]
    data: WireData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireData {
    /// Decimal amount; converted to cents with standard rounding.
    #[serde(default)]
    amount: f64,
    #[serde(default)]
    customer_name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// Decodes a collaborator payload.
///
/// Returns `None` for anything that is not a well-formed intent: invalid
/// JSON, an unknown intent tag, or a non-object payload. This is the only
/// failure mode; a recognized intent always decodes, however sparse.
pub fn decode_intent(raw: &str) -> Option<ParsedIntent> {
    let wire: WireIntent = serde_json::from_str(raw).ok()?;

    let non_blank = |s: Option<String>, fallback: &str| {
        s.filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    };

    Some(ParsedIntent {
        kind: wire.intent,
        amount: Money::from_cents((wire.data.amount * 100.0).round() as i64),
        customer_name: non_blank(wire.data.customer_name, DEFAULT_CUSTOMER_NAME),
        phone: non_blank(wire.data.phone, ""),
        category: non_blank(wire.data.category, DEFAULT_CATEGORY),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
