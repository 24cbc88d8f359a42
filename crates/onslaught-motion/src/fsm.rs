//! Formation direction state machine.
//!
//! Pure functions that compute direction transitions and the bulk
//! displacement for one move step, based on where the formation sits
//! relative to the playfield margins.

use glam::IVec2;

use onslaught_core::constants::*;
use onslaught_core::enums::Direction;
use onslaught_core::types::Playfield;

/// Where the formation's bounding box sits relative to the playfield
/// margins, measured fresh before every move step.
#[derive(Debug, Clone, Copy)]
pub struct BoundarySense {
    /// Bounding box is above the bottom margin line.
    pub at_top: bool,
    /// Bounding box extends past the bottom margin line.
    pub at_bottom: bool,
    /// Bounding box touches the left margin.
    pub at_left: bool,
    /// Bounding box touches the right margin.
    pub at_right: bool,
    /// Vertical position is an exact multiple of the descent distance,
    /// so a descent pass may end here.
    pub on_descent_row: bool,
}

impl BoundarySense {
    pub fn measure(origin: IVec2, width: i32, height: i32, playfield: &Playfield) -> Self {
        let bottom_line = playfield.height - BOTTOM_MARGIN;
        Self {
            at_top: origin.y + height < bottom_line,
            at_bottom: origin.y + height > bottom_line,
            at_left: origin.x <= SIDE_MARGIN,
            at_right: origin.x + width >= playfield.width - SIDE_MARGIN,
            on_descent_row: origin.y % DESCENT_DISTANCE == 0,
        }
    }
}

/// Persistent motion state carried by the formation between ticks.
#[derive(Debug, Clone)]
pub struct MotionState {
    pub direction: Direction,
    /// Last horizontal direction before the current descent began.
    pub previous: Direction,
    /// Ticks accumulated toward the next move step.
    pub accumulator: i32,
    /// Current ticks-between-moves value from the pacing law.
    pub ticks_per_move: i32,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            direction: Direction::Right,
            previous: Direction::Right,
            accumulator: 0,
            ticks_per_move: 0,
        }
    }
}

/// Input to the direction FSM for one move step.
#[derive(Debug, Clone, Copy)]
pub struct MotionContext {
    pub direction: Direction,
    pub previous: Direction,
    pub sense: BoundarySense,
}

/// Output of the direction FSM.
#[derive(Debug, Clone, Copy)]
pub struct MotionUpdate {
    pub direction: Direction,
    pub previous: Direction,
    /// Bulk displacement to apply to every unit this step.
    pub displacement: IVec2,
    pub turned: bool,
}

/// Evaluate one move step. Descents end only on a descent row and
/// alternate the horizontal direction; a side hit starts a descent
/// unless the formation is already at the bottom, in which case it
/// reverses instead.
pub fn evaluate(ctx: &MotionContext) -> MotionUpdate {
    let mut direction = ctx.direction;
    let mut previous = ctx.previous;

    match ctx.direction {
        Direction::Down => {
            if ctx.sense.on_descent_row {
                direction = if previous == Direction::Right {
                    Direction::Left
                } else {
                    Direction::Right
                };
            }
        }
        Direction::Left => {
            if ctx.sense.at_left {
                if !ctx.sense.at_bottom {
                    previous = Direction::Left;
                    direction = Direction::Down;
                } else {
                    direction = Direction::Right;
                }
            }
        }
        Direction::Right => {
            if ctx.sense.at_right {
                if !ctx.sense.at_bottom {
                    previous = Direction::Right;
                    direction = Direction::Down;
                } else {
                    direction = Direction::Left;
                }
            }
        }
    }

    let displacement = match direction {
        Direction::Right => IVec2::new(X_SPEED, 0),
        Direction::Left => IVec2::new(-X_SPEED, 0),
        Direction::Down => IVec2::new(0, Y_SPEED),
    };

    MotionUpdate {
        direction,
        previous,
        displacement,
        turned: direction != ctx.direction,
    }
}
