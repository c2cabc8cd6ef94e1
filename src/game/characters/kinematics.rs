// Vertical jump kinematics (y grows downward)

/// Outcome of one vertical integration step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalStep {
    /// Still above the ground
    Airborne { pos_y: f32, vel_y: f32 },
    /// Reached or passed the ground; position snapped to it
    Landed { pos_y: f32 },
}

/// Advance one tick: move by the velocity, then apply gravity to it
pub fn step(pos_y: f32, vel_y: f32, gravity: f32, ground_y: f32) -> VerticalStep {
    let pos_y = pos_y + vel_y;
    let vel_y = vel_y + gravity;

    if pos_y >= ground_y {
        VerticalStep::Landed { pos_y: ground_y }
    } else {
        VerticalStep::Airborne { pos_y, vel_y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND: f32 = 468.0;

    #[test]
    fn test_position_moves_before_gravity_applies() {
        let result = step(GROUND, -28.0, 4.0, GROUND);
        assert_eq!(
            result,
            VerticalStep::Airborne {
                pos_y: GROUND - 28.0,
                vel_y: -24.0
            }
        );
    }

    #[test]
    fn test_full_jump_lands_exactly_on_ground() {
        let mut pos_y = GROUND;
        let mut vel_y = -28.0;
        let mut ticks = 0;

        loop {
            ticks += 1;
            match step(pos_y, vel_y, 4.0, GROUND) {
                VerticalStep::Airborne { pos_y: p, vel_y: v } => {
                    assert!(p < GROUND);
                    pos_y = p;
                    vel_y = v;
                }
                VerticalStep::Landed { pos_y: p } => {
                    assert_eq!(p, GROUND);
                    break;
                }
            }
            assert!(ticks < 100, "jump never landed");
        }

        // -28, -24, ..., 28 sums to 0 after 15 steps
        assert_eq!(ticks, 15);
    }

    #[test]
    fn test_overshoot_is_clamped_to_ground() {
        let result = step(GROUND - 3.0, 20.0, 4.0, GROUND);
        assert_eq!(result, VerticalStep::Landed { pos_y: GROUND });
    }
}
