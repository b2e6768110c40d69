//! # Referral Forest
//!
//! Builds the office referral hierarchy from a flat list.
//!
//! Each office may name a referrer by owner email. Offices whose referrer
//! is absent or unknown become roots. Referrer chains come from free-form
//! input, so a malformed chain can loop; construction therefore carries a
//! visited guard, and offices trapped in a cycle are surfaced to the admin
//! in a separate list instead of producing an infinite structure.

use serde::{Deserialize, Serialize};

use crate::types::OfficeUnit;

/// One office and the offices it referred.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralNode {
    pub office: OfficeUnit,
    pub children: Vec<ReferralNode>,
}

/// The full referral hierarchy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralForest {
    /// Offices with no resolvable referrer, with their subtrees.
    pub roots: Vec<ReferralNode>,
    /// Offices unreachable from any root because their referrer chain
    /// loops. Shown to the admin as malformed, never silently dropped.
    pub cyclic: Vec<OfficeUnit>,
}

/// Builds the referral forest.
///
/// Linking is by exact owner-email match. Order of roots and children
/// follows the input order.
pub fn build_referral_forest(offices: &[OfficeUnit]) -> ReferralForest {
    let index_of = |email: &str| offices.iter().position(|o| o.owner_email == email);

    // children[i] holds indices of offices referred by offices[i]
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); offices.len()];
    let mut root_indices: Vec<usize> = Vec::new();

    for (i, office) in offices.iter().enumerate() {
        match office.referrer_email.as_deref().and_then(index_of) {
            Some(parent) => children[parent].push(i),
            // Absent or dangling referrer: this office is a root
            None => root_indices.push(i),
        }
    }

    let mut visited = vec![false; offices.len()];
    let roots = root_indices
        .into_iter()
        .map(|i| attach(i, offices, &children, &mut visited))
        .collect();

    // Anything not reached from a root sits on a referrer cycle
    let cyclic = offices
        .iter()
        .zip(&visited)
        .filter(|(_, seen)| !**seen)
        .map(|(office, _)| office.clone())
        .collect();

    ReferralForest { roots, cyclic }
}

fn attach(
    index: usize,
    offices: &[OfficeUnit],
    children: &[Vec<usize>],
    visited: &mut [bool],
) -> ReferralNode {
    visited[index] = true;
    ReferralNode {
        office: offices[index].clone(),
        children: children[index]
            .iter()
            .filter(|child| !visited[**child])
            .copied()
            .collect::<Vec<_>>()
            .into_iter()
            .map(|child| attach(child, offices, children, visited))
            .collect(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
