// patterns.rs - Placeable stamp patterns and what they cost

use crate::error::LifeError;

/// A named shape placed with its anchor at the clicked cell.
///
/// Offsets are `(col, row)` and extend right and down from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
    pub cost: u32,
}

impl Pattern {
    /// Absolute cells for an anchor, skipping any that fall off a
    /// `cols x rows` grid.
    pub fn cells_at(
        &self,
        anchor_col: usize,
        anchor_row: usize,
        cols: usize,
        rows: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().filter_map(move |&(dx, dy)| {
            let col = anchor_col.checked_add(dx)?;
            let row = anchor_row.checked_add(dy)?;
            (col < cols && row < rows).then_some((col, row))
        })
    }

    /// Single-letter inventory label.
    pub fn label(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Tooltip text, e.g. `glider (Cost: 3)`.
    pub fn title(&self) -> String {
        format!("{} (Cost: {})", self.name, self.cost)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        cost: 3,
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
        cost: 2,
    },
    Pattern {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        cost: 4,
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
        cost: 5,
    },
];

/// Read-only registry of patterns, in a fixed order.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    patterns: &'static [Pattern],
}

impl Catalog {
    /// Wraps a pattern table.
    ///
    /// Panics if the table is empty, repeats a name, or has a zero cost;
    /// the catalog is static configuration, so these are build-time mistakes.
    pub fn new(patterns: &'static [Pattern]) -> Self {
        assert!(!patterns.is_empty(), "pattern catalog is empty");
        for (i, pattern) in patterns.iter().enumerate() {
            assert!(pattern.cost > 0, "pattern {} has zero cost", pattern.name);
            assert!(
                patterns[..i].iter().all(|p| p.name != pattern.name),
                "pattern {} is listed twice",
                pattern.name
            );
        }
        Self { patterns }
    }

    pub fn standard() -> Self {
        Self::new(PATTERNS)
    }

    /// Pattern names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.patterns.iter().map(|p| p.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Pattern> {
        self.patterns.iter()
    }

    /// The pattern selected before the user picks one.
    pub fn first(&self) -> &'static Pattern {
        &self.patterns[0]
    }

    pub fn get(&self, name: &str) -> Result<&'static Pattern, LifeError> {
        self.patterns
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| LifeError::PatternNotFound(name.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
