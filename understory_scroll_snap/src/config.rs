// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute-driven configuration.

use alloc::string::ToString;

use crate::{Result, SnapError};

/// Value of the `name` attribute that marks the scroll container.
pub const SCROLL_CONTAINER_NAME: &str = "scroll-container";

/// Attribute holding the index to snap to on activation.
pub const INIT_SLIDE_ATTR: &str = "init-slide";

/// Attribute holding the layout change handler expression.
pub const ON_LAYOUT_CHANGE_ATTR: &str = "onlayoutchange";

/// Configuration read from the host element's attributes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapConfig {
    /// Index of the child to show when the controller activates.
    ///
    /// Kept signed so that negative attribute values survive parsing and are
    /// rejected by the range check on activation rather than by the parser.
    pub init_slide: i64,
}

impl SnapConfig {
    /// Configuration starting at `init_slide`.
    #[must_use]
    pub const fn with_init_slide(init_slide: i64) -> Self {
        Self { init_slide }
    }

    /// Builds a configuration from `(name, value)` attribute pairs.
    ///
    /// Attribute names are matched case-insensitively and values are trimmed.
    /// An `init-slide` that is empty after trimming reads as the default `0`,
    /// like a bare `init-slide` attribute in markup. Unknown attributes are ignored, including [`ON_LAYOUT_CHANGE_ATTR`],
    /// which hosts compile into a handler themselves.
    ///
    /// ```
    /// use understory_scroll_snap::SnapConfig;
    ///
    /// let config = SnapConfig::from_attributes([("init-slide", " 2 "), ("class", "gallery")]).unwrap();
    /// assert_eq!(config.init_slide, 2);
    ///
    /// assert_eq!(SnapConfig::from_attributes([("init-slide", "")]).unwrap().init_slide, 0);
    /// assert!(SnapConfig::from_attributes([("init-slide", "two")]).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SnapError::InvalidAttribute`] when a non-empty `init-slide` is
    /// not an integer.
    pub fn from_attributes<'a, I>(attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (name, value) in attributes {
            if name.eq_ignore_ascii_case(INIT_SLIDE_ATTR) {
                config.init_slide = parse_index(INIT_SLIDE_ATTR, value)?;
            }
        }
        Ok(config)
    }
}

fn parse_index(name: &'static str, value: &str) -> Result<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| SnapError::InvalidAttribute {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{INIT_SLIDE_ATTR, SnapConfig};
    use crate::SnapError;

    #[test]
    fn defaults_to_first_slide() {
        assert_eq!(SnapConfig::default().init_slide, 0);
        let config = SnapConfig::from_attributes([("class", "x")]).unwrap();
        assert_eq!(config, SnapConfig::default());
        let config = SnapConfig::from_attributes([("init-slide", "")]).unwrap();
        assert_eq!(config.init_slide, 0);
    }

    #[test]
    fn blank_value_keeps_the_default() {
        let config = SnapConfig::from_attributes([("init-slide", "3"), ("init-slide", " \t ")])
            .unwrap();
        assert_eq!(config.init_slide, 0);
    }

    #[test]
    fn parses_signed_values() {
        let config = SnapConfig::from_attributes([("INIT-SLIDE", "-1")]).unwrap();
        assert_eq!(config, SnapConfig::with_init_slide(-1));
    }

    #[test]
    fn last_occurrence_wins() {
        let config =
            SnapConfig::from_attributes([("init-slide", "1"), ("init-slide", "4")]).unwrap();
        assert_eq!(config.init_slide, 4);
    }

    #[test]
    fn rejects_non_integers() {
        let err = SnapConfig::from_attributes([("init-slide", "1.5")]).unwrap_err();
        assert_eq!(
            err,
            SnapError::InvalidAttribute {
                name: INIT_SLIDE_ATTR,
                value: "1.5".to_string(),
            }
        );
    }
}
