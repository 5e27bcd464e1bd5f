use blockcraft_core::error::BlockcraftError;
use blockcraft_core::types::ColumnCoord;

use crate::height_field::HeightField;

/// One row of a terraced layout, running along +x.
///
/// Each field is the last local index (inclusive) of its band. Bands run
/// outer-left (level 2), inner-left (level 1), center (level 0),
/// inner-right (level 1), outer-right (level 2). A band whose boundary does
/// not exceed the previous one is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerraceRow {
    pub outer_left: i32,
    pub inner_left: i32,
    pub center: i32,
    pub inner_right: i32,
    pub outer_right: i32,
}

impl TerraceRow {
    /// Terrace level of local index `i`, or None past the last band.
    pub fn level_at(&self, i: i32) -> Option<i32> {
        if i < 0 {
            None
        } else if i <= self.outer_left {
            Some(2)
        } else if i <= self.inner_left {
            Some(1)
        } else if i <= self.center {
            Some(0)
        } else if i <= self.inner_right {
            Some(1)
        } else if i <= self.outer_right {
            Some(2)
        } else {
            None
        }
    }

    /// Number of columns this row covers.
    pub fn len(&self) -> i32 {
        (self.outer_right + 1).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HeightField {
    /// Build a field from terrace rows. Row `r` covers columns
    /// `origin.x + i` at `z = origin.y + r`; a column at level `L` gets
    /// height `L + 1`. Uncovered columns stay at height 0.
    pub fn from_terraces(
        half_extent: i32,
        origin: ColumnCoord,
        rows: &[TerraceRow],
    ) -> Result<Self, BlockcraftError> {
        let mut field = HeightField::flat(half_extent, 0)?;
        for (r, row) in rows.iter().enumerate() {
            let z = origin.y + r as i32;
            for i in 0..row.len() {
                if let Some(level) = row.level_at(i) {
                    field.set_height(origin.x + i, z, level + 1)?;
                }
            }
        }
        log::info!("Built terraced field from {} rows", rows.len());
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    const ROW: TerraceRow = TerraceRow {
        outer_left: 1,
        inner_left: 3,
        center: 5,
        inner_right: 6,
        outer_right: 8,
    };

    #[test]
    fn test_row_levels() {
        let levels: Vec<Option<i32>> = (-1..10).map(|i| ROW.level_at(i)).collect();
        assert_eq!(
            levels,
            vec![
                None,
                Some(2),
                Some(2),
                Some(1),
                Some(1),
                Some(0),
                Some(0),
                Some(1),
                Some(2),
                Some(2),
                None,
            ]
        );
        assert_eq!(ROW.len(), 9);
    }

    #[test]
    fn test_from_terraces_sets_heights() {
        let field =
            HeightField::from_terraces(20, IVec2::new(-17, -17), &[ROW, ROW]).expect("fits");
        assert_eq!(field.height_at(-17, -17), Ok(3));
        assert_eq!(field.height_at(-14, -16), Ok(2));
        assert_eq!(field.height_at(-12, -17), Ok(1));
        assert_eq!(field.height_at(-9, -17), Ok(3));
        // Past the row and past the last row stay flat.
        assert_eq!(field.height_at(-8, -17), Ok(0));
        assert_eq!(field.height_at(-17, -15), Ok(0));
    }

    #[test]
    fn test_row_past_edge_rejected() {
        let result = HeightField::from_terraces(4, IVec2::new(0, 0), &[ROW]);
        assert!(matches!(result, Err(BlockcraftError::OutOfBounds { .. })));
    }
}
