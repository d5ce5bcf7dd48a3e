use std::collections::BTreeMap;

use super::domain::{Audience, AudienceMode};

/// Built-in role ordering for a mode.
pub const fn standard_order(mode: AudienceMode) -> [Audience; 4] {
    match mode {
        AudienceMode::Urgent | AudienceMode::Treatment => [
            Audience::Patient,
            Audience::Caregiver,
            Audience::Visitor,
            Audience::Staff,
        ],
        AudienceMode::Visitor => [
            Audience::Visitor,
            Audience::Caregiver,
            Audience::Patient,
            Audience::Staff,
        ],
        AudienceMode::Staff => [
            Audience::Staff,
            Audience::Patient,
            Audience::Caregiver,
            Audience::Visitor,
        ],
    }
}

/// Maps each audience mode to a total order over consumer roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudiencePriorityTable {
    orders: BTreeMap<AudienceMode, [Audience; 4]>,
}

impl AudiencePriorityTable {
    pub fn standard() -> Self {
        Self {
            orders: AudienceMode::ordered()
                .into_iter()
                .map(|mode| (mode, standard_order(mode)))
                .collect(),
        }
    }

    /// A table with no orderings; every lookup resolves to the visitor default.
    pub fn empty() -> Self {
        Self {
            orders: BTreeMap::new(),
        }
    }

    pub fn with_order(mut self, mode: AudienceMode, order: [Audience; 4]) -> Self {
        self.orders.insert(mode, order);
        self
    }

    /// Ordering for `mode`, falling back to this table's visitor ordering and then
    /// to the built-in visitor ordering.
    pub fn order_for(&self, mode: AudienceMode) -> [Audience; 4] {
        self.orders
            .get(&mode)
            .or_else(|| self.orders.get(&AudienceMode::Visitor))
            .copied()
            .unwrap_or_else(|| standard_order(AudienceMode::Visitor))
    }

    /// Position of `audience` in the ordering for `mode`. Roles the ordering omits
    /// sort after every listed role.
    pub fn rank_of(&self, mode: AudienceMode, audience: Audience) -> usize {
        let order = self.order_for(mode);
        order
            .iter()
            .position(|candidate| *candidate == audience)
            .unwrap_or(order.len())
    }
}

impl Default for AudiencePriorityTable {
    fn default() -> Self {
        Self::standard()
    }
}
