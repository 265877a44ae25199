//! Vertical motion state machine shared by every grounded actor
//!
//! An actor is Grounded, Jumping, or Falling. Jumping turns into
//! Jumping+Falling at the apex. Both flags clear only when the actor comes to
//! rest on its current supporting surface.
//!
//! The rectangle carries a foot band of `foot_offset` units below the visible
//! sprite. Ground contact is measured at `bottom - foot_offset`, so a resting
//! actor's rectangle bottom sits at `ground_level + foot_offset`.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::{GRAVITY, V_JUMP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub jumping: bool,
    pub falling: bool,
    /// Vertical velocity (units/tick, negative is up)
    pub velocity: i32,
    /// Y of the surface currently supporting the actor
    pub ground_level: i32,
    pub foot_offset: i32,
}

impl KinematicBody {
    pub fn new(floor: i32, foot_offset: i32, initial_velocity: i32) -> Self {
        Self {
            jumping: false,
            falling: false,
            velocity: initial_velocity,
            ground_level: floor,
            foot_offset,
        }
    }

    pub fn is_grounded(&self) -> bool {
        !self.jumping && !self.falling
    }

    /// Advance vertical motion by one tick
    ///
    /// `jump` is the ascend intent; it is ignored while airborne. `floor` is
    /// the world floor every fall reverts to.
    pub fn step(&mut self, rect: &mut Rect, jump: bool, floor: i32) {
        if self.is_grounded() && jump {
            self.jumping = true;
            self.velocity = V_JUMP;
        }

        // Exactly one integration per tick: the branches are exclusive on `jumping`
        if !self.jumping {
            if rect.bottom() - self.foot_offset < floor {
                self.falling = true;
                self.integrate(rect);
            }
        } else {
            if self.velocity >= 0 {
                self.falling = true;
            }
            self.integrate(rect);
        }

        if self.falling {
            self.ground_level = floor;
        }

        if rect.top() <= 0 {
            rect.set_top(0);
        } else if rect.bottom() - self.foot_offset >= self.ground_level {
            self.rest(rect, self.ground_level);
        }
    }

    /// Land on a surface the actor overlaps, if currently falling onto it
    pub fn land_on(&mut self, rect: &mut Rect, surface: &Rect) {
        if self.falling && surface.top() <= rect.bottom() {
            self.rest(rect, surface.top());
        }
    }

    fn integrate(&mut self, rect: &mut Rect) {
        rect.translate(0, self.velocity);
        self.velocity += GRAVITY;
    }

    fn rest(&mut self, rect: &mut Rect, ground: i32) {
        self.ground_level = ground;
        rect.set_bottom(ground + self.foot_offset);
        self.velocity = 0;
        self.jumping = false;
        self.falling = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FLOOR: i32 = 640;
    const FOOT: i32 = 40;

    fn resting_rect() -> Rect {
        // 96-tall sprite plus the foot band, feet on the floor
        let mut rect = Rect::new(100, 0, 64, 96 + FOOT);
        rect.set_bottom(FLOOR + FOOT);
        rect
    }

    #[test]
    fn test_resting_body_stays_put() {
        let mut body = KinematicBody::new(FLOOR, FOOT, 0);
        let mut rect = resting_rect();
        for _ in 0..10 {
            body.step(&mut rect, false, FLOOR);
        }
        assert_eq!(rect, resting_rect());
        assert!(body.is_grounded());
        assert_eq!(body.velocity, 0);
    }

    #[test]
    fn test_jump_arc_returns_to_floor() {
        let mut body = KinematicBody::new(FLOOR, FOOT, 0);
        let mut rect = resting_rect();
        let start_y = rect.y;

        body.step(&mut rect, true, FLOOR);
        assert!(body.jumping);
        assert!(!body.falling);
        assert_eq!(rect.y, start_y - 40);
        assert_eq!(body.velocity, -35);

        let mut apex_seen = false;
        for _ in 0..40 {
            body.step(&mut rect, false, FLOOR);
            if body.jumping && body.falling {
                apex_seen = true;
            }
            if body.is_grounded() {
                break;
            }
        }
        assert!(apex_seen);
        assert!(body.is_grounded());
        assert_eq!(rect.bottom(), FLOOR + FOOT);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut body = KinematicBody::new(FLOOR, FOOT, 0);
        let mut rect = Rect::new(0, 200, 64, 136);
        body.step(&mut rect, false, FLOOR);
        assert!(body.falling);
        let v = body.velocity;
        body.step(&mut rect, true, FLOOR);
        assert!(!body.jumping);
        assert_eq!(body.velocity, v + GRAVITY);
    }

    #[test]
    fn test_land_on_ladder() {
        let mut body = KinematicBody::new(FLOOR, FOOT, 0);
        let mut rect = Rect::new(0, 200, 64, 136);
        let ladder = Rect::new(0, 320, 400, 20);

        body.step(&mut rect, false, FLOOR);
        body.land_on(&mut rect, &ladder);
        assert!(body.is_grounded());
        assert_eq!(body.ground_level, 320);
        assert_eq!(rect.bottom(), 320 + FOOT);

        // Landing requires falling
        let before = rect;
        body.land_on(&mut rect, &Rect::new(0, 300, 400, 20));
        assert_eq!(rect, before);
    }

    #[test]
    fn test_walking_off_platform_falls_to_floor() {
        let mut body = KinematicBody::new(FLOOR, FOOT, 0);
        let mut rect = Rect::new(0, 200, 64, 136);
        body.step(&mut rect, false, FLOOR);
        body.land_on(&mut rect, &Rect::new(0, 320, 400, 20));

        // No surface re-landing: next step starts a fall back toward the floor
        body.step(&mut rect, false, FLOOR);
        assert!(body.falling);
        assert_eq!(body.ground_level, FLOOR);
        for _ in 0..40 {
            body.step(&mut rect, false, FLOOR);
        }
        assert!(body.is_grounded());
        assert_eq!(rect.bottom(), FLOOR + FOOT);
    }

    #[test]
    fn test_ceiling_clamp() {
        let mut body = KinematicBody::new(FLOOR, FOOT, V_JUMP);
        let mut rect = Rect::new(0, 0, 64, 136);
        body.step(&mut rect, false, FLOOR);
        assert_eq!(rect.top(), 0);
        assert!(body.falling);
    }

    proptest! {
        #[test]
        fn prop_single_integration(
            y in 100i32..300,
            v in -30i32..30,
            jumping: bool,
            falling: bool,
        ) {
            let mut body = KinematicBody {
                jumping,
                falling,
                velocity: v,
                ground_level: FLOOR,
                foot_offset: FOOT,
            };
            let mut rect = Rect::new(0, y, 64, 136);
            body.step(&mut rect, false, FLOOR);
            // Far from ceiling and floor: one step moves by exactly the old velocity
            prop_assert_eq!(rect.y, y + v);
            prop_assert_eq!(body.velocity, v + GRAVITY);
        }

        #[test]
        fn prop_grounded_bottom_is_on_ground(
            y in 1i32..600,
            v in -40i32..40,
            jumping: bool,
            falling: bool,
            jump: bool,
        ) {
            let mut body = KinematicBody {
                jumping,
                falling,
                velocity: v,
                ground_level: FLOOR,
                foot_offset: FOOT,
            };
            let mut rect = Rect::new(0, y, 64, 136);
            body.step(&mut rect, jump, FLOOR);
            if rect.top() > 0 && body.is_grounded() {
                prop_assert_eq!(rect.bottom() - FOOT, body.ground_level);
            }
            prop_assert!(rect.bottom() - FOOT <= body.ground_level || rect.top() == 0);
        }
    }
}
