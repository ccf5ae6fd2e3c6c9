use crate::piece::PieceKind;
use crate::tally::CaptureTally;
use crate::types::Color;

/// A side wins when the opponent has lost a full complement of any one
/// kind: all 8 pawns, both knights, both bishops, both rooks, the queen,
/// or the king. At most one condition can newly trigger per move, so the
/// first match decides.
#[inline]
pub fn winner_by_captures(tally: &CaptureTally) -> Option<Color> {
    for color in [Color::White, Color::Black] {
        for kind in PieceKind::all() {
            if tally.count(color, kind) >= kind.starting_count() {
                return Some(color.other());
            }
        }
    }
    None
}
