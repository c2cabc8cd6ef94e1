// Character motion state machine

use super::animation::AnimationKind;

/// Direction the character faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right
    pub fn sign(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left)
    }
}

/// What the character is doing right now
///
/// Jumping and attacking never overlap: there is no way into `Attacking`
/// from `Jumping` or back.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MotionState {
    /// Standing still on the ground
    #[default]
    Idle,
    /// Moving horizontally on the ground
    Walking,
    /// Airborne; `vel_y` is negative while rising
    Jumping { vel_y: f32 },
    /// Playing the attack cycle; `hold` repeats it while the trigger stays down
    Attacking { hold: bool },
}

/// Inputs to the motion state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionEvent {
    /// Held horizontal direction this tick (or a fresh press); `None` when neither is held
    Steer(Option<Facing>),
    /// The last horizontal key went up
    HorizontalReleased,
    JumpPressed { impulse: f32 },
    AttackPressed,
    AttackReleased,
    /// The attack animation wrapped back to its first frame
    AttackCycleCompleted { moving: bool },
    /// One vertical integration step left the character in the air
    Airborne { vel_y: f32 },
    /// Vertical integration reached the ground
    Landed { moving: bool },
}

impl MotionState {
    /// The single transition function
    ///
    /// Events that do not apply to the current state leave it unchanged.
    pub fn next(self, event: MotionEvent) -> Self {
        use MotionEvent as E;
        use MotionState as S;

        match (self, event) {
            (S::Idle | S::Walking, E::Steer(Some(_))) => S::Walking,
            (S::Idle | S::Walking, E::Steer(None) | E::HorizontalReleased) => S::Idle,

            (S::Idle | S::Walking, E::JumpPressed { impulse }) => S::Jumping { vel_y: -impulse },
            (S::Jumping { .. }, E::Airborne { vel_y }) => S::Jumping { vel_y },
            (S::Jumping { .. }, E::Landed { moving }) => Self::grounded(moving),

            (S::Idle | S::Walking | S::Attacking { .. }, E::AttackPressed) => {
                S::Attacking { hold: true }
            }
            (S::Attacking { .. }, E::AttackReleased) => S::Attacking { hold: false },
            (S::Attacking { hold: false }, E::AttackCycleCompleted { moving }) => {
                Self::grounded(moving)
            }

            (state, _) => state,
        }
    }

    fn grounded(moving: bool) -> Self {
        if moving {
            Self::Walking
        } else {
            Self::Idle
        }
    }

    /// Animation shown while in this state
    pub fn animation(&self) -> AnimationKind {
        match self {
            Self::Idle => AnimationKind::Stop,
            Self::Walking => AnimationKind::Walk,
            Self::Jumping { .. } => AnimationKind::Jump,
            Self::Attacking { .. } => AnimationKind::Attack,
        }
    }

    pub fn is_jumping(&self) -> bool {
        matches!(self, Self::Jumping { .. })
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self, Self::Attacking { .. })
    }

    /// Whether the attack trigger is being held through the current attack
    pub fn attack_hold(&self) -> bool {
        matches!(self, Self::Attacking { hold: true })
    }

    /// Vertical velocity; zero whenever the character is on the ground
    pub fn vel_y(&self) -> f32 {
        match self {
            Self::Jumping { vel_y } => *vel_y,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = MotionState::default();
        assert_eq!(state, MotionState::Idle);
        assert_eq!(state.animation(), AnimationKind::Stop);
        assert_eq!(state.vel_y(), 0.0);
    }

    #[test]
    fn test_steer_walks_and_stops() {
        let state = MotionState::Idle.next(MotionEvent::Steer(Some(Facing::Left)));
        assert_eq!(state, MotionState::Walking);
        assert_eq!(state.next(MotionEvent::Steer(None)), MotionState::Idle);
        assert_eq!(state.next(MotionEvent::HorizontalReleased), MotionState::Idle);
    }

    #[test]
    fn test_jump_impulse_points_up() {
        let state = MotionState::Walking.next(MotionEvent::JumpPressed { impulse: 28.0 });
        assert_eq!(state, MotionState::Jumping { vel_y: -28.0 });
        assert!(state.is_jumping());
        assert_eq!(state.animation(), AnimationKind::Jump);
    }

    #[test]
    fn test_steering_does_not_interrupt_jump() {
        let jumping = MotionState::Jumping { vel_y: -10.0 };
        assert_eq!(jumping.next(MotionEvent::Steer(Some(Facing::Right))), jumping);
        assert_eq!(jumping.next(MotionEvent::Steer(None)), jumping);
        assert_eq!(jumping.next(MotionEvent::HorizontalReleased), jumping);
    }

    #[test]
    fn test_second_jump_press_is_ignored() {
        let jumping = MotionState::Jumping { vel_y: 4.0 };
        assert_eq!(
            jumping.next(MotionEvent::JumpPressed { impulse: 28.0 }),
            jumping
        );
    }

    #[test]
    fn test_landing_resolves_by_held_keys() {
        let jumping = MotionState::Jumping { vel_y: 12.0 };
        assert_eq!(
            jumping.next(MotionEvent::Landed { moving: true }),
            MotionState::Walking
        );
        assert_eq!(
            jumping.next(MotionEvent::Landed { moving: false }),
            MotionState::Idle
        );
        assert_eq!(
            jumping.next(MotionEvent::Airborne { vel_y: 16.0 }),
            MotionState::Jumping { vel_y: 16.0 }
        );
    }

    #[test]
    fn test_attack_is_not_available_in_the_air() {
        let jumping = MotionState::Jumping { vel_y: -8.0 };
        assert_eq!(jumping.next(MotionEvent::AttackPressed), jumping);
    }

    #[test]
    fn test_jump_is_not_available_during_attack() {
        let attacking = MotionState::Attacking { hold: false };
        assert_eq!(
            attacking.next(MotionEvent::JumpPressed { impulse: 28.0 }),
            attacking
        );
    }

    #[test]
    fn test_attack_hold_follows_trigger() {
        let state = MotionState::Idle.next(MotionEvent::AttackPressed);
        assert_eq!(state, MotionState::Attacking { hold: true });
        assert!(state.attack_hold());

        let state = state.next(MotionEvent::AttackReleased);
        assert_eq!(state, MotionState::Attacking { hold: false });

        let state = state.next(MotionEvent::AttackPressed);
        assert!(state.attack_hold());
    }

    #[test]
    fn test_attack_cycle_repeats_while_held() {
        let held = MotionState::Attacking { hold: true };
        assert_eq!(
            held.next(MotionEvent::AttackCycleCompleted { moving: false }),
            held
        );
    }

    #[test]
    fn test_attack_cycle_ends_when_released() {
        let released = MotionState::Attacking { hold: false };
        assert_eq!(
            released.next(MotionEvent::AttackCycleCompleted { moving: false }),
            MotionState::Idle
        );
        assert_eq!(
            released.next(MotionEvent::AttackCycleCompleted { moving: true }),
            MotionState::Walking
        );
    }

    #[test]
    fn test_horizontal_input_leaves_attack_alone() {
        let attacking = MotionState::Attacking { hold: true };
        assert_eq!(
            attacking.next(MotionEvent::Steer(Some(Facing::Left))),
            attacking
        );
        assert_eq!(attacking.next(MotionEvent::HorizontalReleased), attacking);
    }

    #[test]
    fn test_facing_sign() {
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Right.sign(), 1.0);
        assert!(Facing::Left.is_left());
        assert_eq!(Facing::default(), Facing::Right);
    }
}
