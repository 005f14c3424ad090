// present.rs - What the core tells a drawing surface

/// How a cell should be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    #[default]
    Dead,
    Alive,
    /// The selected pattern's footprint under the pointer.
    Preview,
}

/// Drawing surface and UI affordances the core pushes state into.
pub trait Presenter {
    fn draw_cell(&mut self, col: usize, row: usize, fill: Fill);

    /// Mana bar fill, `0.0..=1.0`. Not called when placement is ungated.
    fn set_resource_bar_fraction(&mut self, fraction: f64);

    /// Enables or greys out a pattern's inventory slot.
    fn set_affordability_indicator(&mut self, pattern: &str, affordable: bool);
}

/// Presenter that keeps the last frame in memory.
///
/// Immediate-mode UIs paint from it every frame; tests inspect it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    cols: usize,
    rows: usize,
    cells: Vec<Fill>,
    mana: Option<f64>,
    affordable: Vec<(String, bool)>,
}

impl FrameBuffer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Fill::Dead; cols * rows],
            mana: None,
            affordable: Vec::new(),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Fill last drawn at a cell; `Dead` for anything off the buffer.
    pub fn fill(&self, col: usize, row: usize) -> Fill {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col]
        } else {
            Fill::Dead
        }
    }

    /// Cells currently drawn with `fill`, row-major.
    pub fn cells_with(&self, fill: Fill) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, f)| **f == fill)
            .map(|(i, _)| (i % self.cols, i / self.cols))
            .collect()
    }

    /// Last mana bar fraction, if a bar was ever shown.
    pub fn mana_fraction(&self) -> Option<f64> {
        self.mana
    }

    /// Last affordability reported for a pattern.
    pub fn is_affordable(&self, pattern: &str) -> Option<bool> {
        self.affordable
            .iter()
            .find(|(name, _)| name == pattern)
            .map(|&(_, affordable)| affordable)
    }
}

impl Presenter for FrameBuffer {
    fn draw_cell(&mut self, col: usize, row: usize, fill: Fill) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = fill;
        }
    }

    fn set_resource_bar_fraction(&mut self, fraction: f64) {
        self.mana = Some(fraction.clamp(0.0, 1.0));
    }

    fn set_affordability_indicator(&mut self, pattern: &str, affordable: bool) {
        match self.affordable.iter_mut().find(|(name, _)| name == pattern) {
            Some(slot) => slot.1 = affordable,
            None => self.affordable.push((pattern.to_string(), affordable)),
        }
    }
}
