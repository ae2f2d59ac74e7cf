//! Layout and classification settings.
//!
//! Every top-level field has a default, so a partial JSON document (or `{}`) is a valid
//! configuration. A sizing or weighting block that is present must be complete.

use crate::model::NodeKind;
use serde::{Deserialize, Serialize};

pub const CONTAINMENT_LABEL: &str = "contains";
pub const SAME_TIER_PREFIX: &str = "c2_relationship";
pub const CROSS_TIER_PREFIX: &str = "cross_c1_c2_rel";

/// Empty labels are sized as if they had this many characters.
pub const EMPTY_LABEL_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RankDirection {
    #[default]
    TB,
    BT,
    LR,
    RL,
}

/// Width is derived from label length and clamped to `[min_width, max_width]`; height is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxSizing {
    pub char_width: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub height: f64,
}

impl BoxSizing {
    pub const CATEGORY: Self = Self {
        char_width: 10.0,
        min_width: 420.0,
        max_width: 560.0,
        height: 140.0,
    };
    pub const SUBCATEGORY: Self = Self {
        char_width: 10.0,
        min_width: 380.0,
        max_width: 520.0,
        height: 120.0,
    };
    pub const LEAF: Self = Self {
        char_width: 10.0,
        min_width: 350.0,
        max_width: 500.0,
        height: 100.0,
    };

    /// `(width, height)` of the box for `label`.
    pub fn size(&self, label: &str) -> (f64, f64) {
        let chars = match label.chars().count() {
            0 => EMPTY_LABEL_CHARS,
            n => n,
        };
        let width = (chars as f64 * self.char_width)
            .min(self.max_width)
            .max(self.min_width);
        (width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeWeighting {
    pub weight: f64,
    pub minlen: usize,
}

impl EdgeWeighting {
    pub const CONTAINMENT: Self = Self {
        weight: 2.0,
        minlen: 1,
    };
    pub const RELATIONSHIP: Self = Self {
        weight: 1.0,
        minlen: 2,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassifierConfig {
    pub same_tier_prefix: String,
    pub cross_tier_prefix: String,
    pub containment_label: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            same_tier_prefix: SAME_TIER_PREFIX.to_string(),
            cross_tier_prefix: CROSS_TIER_PREFIX.to_string(),
            containment_label: CONTAINMENT_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub rankdir: RankDirection,
    pub nodesep: f64,
    pub edgesep: f64,
    pub ranksep: f64,
    pub marginx: f64,
    pub marginy: f64,
    pub category: BoxSizing,
    pub subcategory: BoxSizing,
    pub leaf: BoxSizing,
    pub containment: EdgeWeighting,
    pub relationship: EdgeWeighting,
    /// Also decides which edges count as containment when weighting them for layout.
    pub classifier: ClassifierConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rankdir: RankDirection::TB,
            nodesep: 200.0,
            edgesep: 150.0,
            ranksep: 250.0,
            marginx: 100.0,
            marginy: 100.0,
            category: BoxSizing::CATEGORY,
            subcategory: BoxSizing::SUBCATEGORY,
            leaf: BoxSizing::LEAF,
            containment: EdgeWeighting::CONTAINMENT,
            relationship: EdgeWeighting::RELATIONSHIP,
            classifier: ClassifierConfig::default(),
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn sizing(&self, kind: NodeKind) -> &BoxSizing {
        match kind {
            NodeKind::Category => &self.category,
            NodeKind::Subcategory => &self.subcategory,
            NodeKind::Leaf => &self.leaf,
        }
    }

    pub fn weighting(&self, label: &str) -> &EdgeWeighting {
        if label == self.classifier.containment_label {
            &self.containment
        } else {
            &self.relationship
        }
    }
}
