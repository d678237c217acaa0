//! An ordered sequence of colors produced by one generation request.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// An ordered sequence of colors.
///
/// Order is significant: index 0 is the seed/base color for harmony-based
/// generation. A palette has no identity beyond its contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub(crate) Vec<Color>);

impl Palette {
    /// The number of colors in the palette.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the palette contains no colors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the colors in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.0[index]
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_and_access() {
        let palette = Palette(vec![
            Color::from_hex("#FF0000").unwrap(),
            Color::from_hex("#00FF00").unwrap(),
        ]);

        assert_eq!(palette.len(), 2);
        assert!(!palette.is_empty());
        assert_eq!(palette[0].hex, "#FF0000");
        assert_eq!(palette[1].hex, "#00FF00");

        let hexes: Vec<_> = palette.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(hexes, ["#FF0000", "#00FF00"]);
    }

    #[test]
    fn serializes_as_a_plain_list() {
        let palette = Palette(vec![Color::from_hex("#0000FF").unwrap()]);
        let value = serde_json::to_value(&palette).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["hex"], "#0000FF");
    }
}
