//! Tree configuration.

use vsm_geometry::{ScaleConfig, DEFAULT_POLY_ORDER, MIN_POLY_ORDER};

use crate::{Error, Result, Tag};

/// Upper bound on polygon order accepted from callers by default.
pub const DEFAULT_MAX_POLY_ORDER: u32 = 64;

/// Configuration for a [`crate::TreeStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct TreeConfig {
    /// Tag given to the seed node
    pub root_tag: Tag,
    /// Polygon order stored on the seed
    pub default_poly_order: u32,
    /// Largest order accepted by `expand_node`
    pub max_poly_order: u32,
    /// Depth scaling for placement and styling
    pub scale: ScaleConfig,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root_tag: Tag::root(),
            default_poly_order: DEFAULT_POLY_ORDER,
            max_poly_order: DEFAULT_MAX_POLY_ORDER,
            scale: ScaleConfig::default(),
        }
    }
}

impl TreeConfig {
    /// Check that `order` is inside `[MIN_POLY_ORDER, max_poly_order]`.
    pub fn check_order(&self, order: u32) -> Result<u32> {
        if (MIN_POLY_ORDER..=self.max_poly_order).contains(&order) {
            Ok(order)
        } else {
            Err(Error::InvalidOrder {
                order,
                min: MIN_POLY_ORDER,
                max: self.max_poly_order,
            })
        }
    }

    /// Reject configurations whose own default order is out of range.
    pub fn validate(&self) -> Result<()> {
        self.check_order(self.default_poly_order).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TreeConfig::default();
        assert_eq!(config.root_tag.as_str(), "0/0/1");
        assert_eq!(config.default_poly_order, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn order_bounds() {
        let config = TreeConfig::default();
        assert!(config.check_order(2).is_err());
        assert_eq!(config.check_order(3), Ok(3));
        assert_eq!(config.check_order(64), Ok(64));
        assert_eq!(
            config.check_order(65),
            Err(Error::InvalidOrder { order: 65, min: 3, max: 64 })
        );
    }

    #[test]
    fn default_order_above_max_is_invalid() {
        let config = TreeConfig {
            max_poly_order: 4,
            ..TreeConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
