use crate::error::InvariantError;
use crate::math::Direction;

/// Rotation of the corner piece joining an incoming run to an outgoing run.
///
/// A corner piece has two perpendicular arms: one pointing back along the
/// incoming run, one along the outgoing run. Perpendicular arms are always
/// consecutive directions `{r, r + 1}`, and `r` is the piece rotation. Left and
/// right turns through the same quadrant share a piece.
///
/// # Errors
///
/// Returns [`InvariantError::InvalidCorner`] when the runs don't turn by 90°
/// (same direction, or a reversal).
pub fn corner_rotation(incoming: Direction, outgoing: Direction) -> Result<Direction, InvariantError> {
    let back = incoming.reverse();
    if back.turn_right() == outgoing {
        Ok(back)
    } else if outgoing.turn_right() == back {
        Ok(outgoing)
    } else {
        Err(InvariantError::InvalidCorner {
            incoming: incoming.index(),
            outgoing: outgoing.index(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use Direction::{NegX, NegY, PosX, PosY};

    #[test]
    fn all_sixteen_pairs() {
        // (incoming, outgoing, rotation); None marks the invalid pairs.
        let table = [
            (PosX, PosX, None),
            (PosX, NegY, Some(NegY)),
            (PosX, NegX, None),
            (PosX, PosY, Some(NegX)),
            (NegY, PosX, Some(PosY)),
            (NegY, NegY, None),
            (NegY, NegX, Some(NegX)),
            (NegY, PosY, None),
            (NegX, PosX, None),
            (NegX, NegY, Some(PosX)),
            (NegX, NegX, None),
            (NegX, PosY, Some(PosY)),
            (PosY, PosX, Some(PosX)),
            (PosY, NegY, None),
            (PosY, NegX, Some(NegY)),
            (PosY, PosY, None),
        ];
        for (incoming, outgoing, expected) in table {
            let got = corner_rotation(incoming, outgoing).ok();
            assert_eq!(got, expected, "{incoming:?} -> {outgoing:?}");
        }
    }

    #[test]
    fn rotation_arms_match_the_runs() {
        for incoming in Direction::ALL {
            for outgoing in [incoming.turn_right(), incoming.turn_left()] {
                let r = corner_rotation(incoming, outgoing).unwrap();
                let arms = [r, r.turn_right()];
                assert!(arms.contains(&incoming.reverse()));
                assert!(arms.contains(&outgoing));
            }
        }
    }

    #[test]
    fn opposite_turns_through_a_vertex_share_a_piece() {
        // walking the same vertex in the other direction swaps and reverses the runs
        for incoming in Direction::ALL {
            let outgoing = incoming.turn_right();
            let forward = corner_rotation(incoming, outgoing).unwrap();
            let backward = corner_rotation(outgoing.reverse(), incoming.reverse()).unwrap();
            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn invalid_pairs_report_both_directions() {
        let err = corner_rotation(NegX, PosX).unwrap_err();
        assert_eq!(err, InvariantError::InvalidCorner { incoming: 2, outgoing: 0 });
    }
}
