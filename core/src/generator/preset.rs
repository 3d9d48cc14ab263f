use super::*;

/// Replays a known layout, e.g. to reproduce a reported game.
///
/// The board rejects the layout if its first reveal lands on one of the mines.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetMinePlacer {
    layout: MineLayout,
}

impl PresetMinePlacer {
    pub fn new(layout: MineLayout) -> Self {
        Self { layout }
    }
}

impl MinePlacer for PresetMinePlacer {
    fn place(&mut self, _config: GameConfig, _start: Coord2) -> Result<MineLayout> {
        Ok(self.layout.clone())
    }
}
