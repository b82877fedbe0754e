//! Demo Course
//!
//! A small headless proving ground for the character controller: a flat
//! floor that turns into a walkable ramp, and a wall on a non-ground layer at
//! the top. An [`InputScript`] replays timed key and mouse events through the
//! engine's [`InputState`], and [`CourseSimulation`] wires everything into the
//! host loop order the controller expects:
//!
//! 1. Script events for the current time go into the input state
//! 2. Frame update with the sampled [`FrameInput`]
//! 3. Contact callbacks from the previous resolve (exits first, then stays)
//! 4. Fixed update, body integration, world resolve
//!
//! [`FrameInput`]: crate::input::FrameInput

use glam::{Vec2, Vec3};

use crate::camera::RecordedView;
use crate::config::ControllerConfig;
use crate::error::Result;
use crate::input::{CursorPlatform, InputState, KeyCode};
use crate::physics::{ContactReport, PlaneWorld, SimpleBody, StaticPlane};
use crate::player::{
    CharacterController, CharacterControllerBuilder, LocomotionMode, DEFAULT_FIXED_TIMESTEP,
};

/// Layer of the floor and ramp
pub const GROUND_LAYER: u32 = 0;

/// Layer of the wall (not in the default ground mask)
pub const WALL_LAYER: u32 = 1;

/// Layout of the demo course.
///
/// The course runs along -Z, the direction the character faces at yaw 0.
#[derive(Clone, Debug)]
pub struct CourseConfig {
    /// Height of the flat floor
    pub floor_y: f32,
    /// Z coordinate where the ramp leaves the floor
    pub ramp_start_z: f32,
    /// Ramp inclination in degrees
    pub ramp_angle_degrees: f32,
    /// Z coordinate of the wall face
    pub wall_z: f32,
    /// Body spawn position
    pub spawn: Vec3,
    /// Body mass (kg)
    pub body_mass: f32,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            floor_y: 0.0,
            ramp_start_z: -30.0,
            ramp_angle_degrees: 30.0,
            wall_z: -60.0,
            spawn: Vec3::new(0.0, 1.0, 0.0),
            body_mass: 1.0,
        }
    }
}

impl CourseConfig {
    /// Unit normal of the ramp surface.
    pub fn ramp_normal(&self) -> Vec3 {
        let angle = self.ramp_angle_degrees.to_radians();
        Vec3::new(0.0, angle.cos(), angle.sin())
    }

    /// Build the static world for this layout.
    pub fn build_world(&self) -> PlaneWorld {
        let mut world = PlaneWorld::new();
        world.add_plane(StaticPlane::floor(self.floor_y, GROUND_LAYER));
        world.add_plane(StaticPlane::through_point(
            Vec3::new(0.0, self.floor_y, self.ramp_start_z),
            self.ramp_normal(),
            GROUND_LAYER,
        ));
        world.add_plane(StaticPlane::through_point(
            Vec3::new(0.0, 0.0, self.wall_z),
            Vec3::Z,
            WALL_LAYER,
        ));
        world
    }
}

/// One scripted input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScriptAction {
    /// Key press (`true`) or release (`false`)
    Key(KeyCode, bool),
    /// Raw mouse motion
    Mouse(Vec2),
}

/// A scripted event and the simulation time it fires at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptEvent {
    /// Seconds since the start of the run
    pub at: f64,
    pub action: ScriptAction,
}

/// Timed input events replayed in order.
#[derive(Clone, Debug, Default)]
pub struct InputScript {
    events: Vec<ScriptEvent>,
    next: usize,
}

impl InputScript {
    /// Create a script; events are sorted by time (stable for equal times).
    pub fn new(mut events: Vec<ScriptEvent>) -> Self {
        events.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { events, next: 0 }
    }

    /// The demo run: walk, sprint, jump, crouch, turn, climb the ramp and run
    /// into the wall.
    pub fn demo() -> Self {
        use ScriptAction::{Key, Mouse};

        let event = |at: f64, action| ScriptEvent { at, action };
        Self::new(vec![
            event(0.5, Key(KeyCode::W, true)),
            event(2.0, Key(KeyCode::ShiftLeft, true)),
            event(3.0, Key(KeyCode::Space, true)),
            event(3.1, Key(KeyCode::Space, false)),
            event(4.0, Key(KeyCode::ShiftLeft, false)),
            event(4.0, Key(KeyCode::ControlLeft, true)),
            event(5.0, Key(KeyCode::ControlLeft, false)),
            event(5.5, Mouse(Vec2::new(20.0, 0.0))),
            event(6.0, Mouse(Vec2::new(-20.0, 0.0))),
            event(6.5, Mouse(Vec2::new(0.0, -10.0))),
            event(7.0, Key(KeyCode::ShiftLeft, true)),
            event(9.0, Key(KeyCode::Space, true)),
            event(9.05, Key(KeyCode::Space, false)),
            event(12.0, Key(KeyCode::ShiftLeft, false)),
            event(14.0, Key(KeyCode::W, false)),
        ])
    }

    /// Apply every event due at or before `now`. Returns how many fired.
    pub fn poll(&mut self, now: f64, input: &mut InputState) -> usize {
        let start = self.next;
        while let Some(event) = self.events.get(self.next) {
            if event.at > now {
                break;
            }
            match event.action {
                ScriptAction::Key(key, pressed) => {
                    input.handle_key(key, pressed);
                }
                ScriptAction::Mouse(delta) => input.handle_mouse_motion(delta.x, delta.y),
            }
            self.next += 1;
        }
        self.next - start
    }

    /// Check if every event has fired.
    pub fn is_finished(&self) -> bool {
        self.next >= self.events.len()
    }

    /// Time of the last event.
    pub fn duration(&self) -> f64 {
        self.events.last().map_or(0.0, |event| event.at)
    }
}

/// Cursor platform for headless runs: nothing to lock, just records the calls.
#[derive(Clone, Debug, Default)]
pub struct HeadlessCursor {
    pub locked: bool,
    pub visible: bool,
}

impl CursorPlatform for HeadlessCursor {
    fn lock_cursor(&mut self) {
        self.locked = true;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Totals gathered over a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Fixed steps executed
    pub steps: u64,
    /// Fixed steps skipped on bad body state
    pub skipped_steps: u64,
    /// Jumps executed
    pub jumps: u32,
    /// Steps that began grounded
    pub grounded_steps: u64,
    /// Steps spent sprinting
    pub sprint_steps: u64,
    /// Steps spent crouching
    pub crouch_steps: u64,
    /// Fastest horizontal speed seen (m/s)
    pub max_horizontal_speed: f32,
    /// Highest body center seen
    pub max_height: f32,
    /// Contact-exit callbacks delivered
    pub contact_exits: u64,
}

/// Controller, world and scripted input running on the course.
#[derive(Debug)]
pub struct CourseSimulation {
    controller: CharacterController<SimpleBody, RecordedView>,
    world: PlaneWorld,
    input: InputState,
    script: InputScript,
    cursor: HeadlessCursor,
    pending: ContactReport,
    summary: RunSummary,
}

impl CourseSimulation {
    /// Build the course, spawn the body and capture the cursor.
    pub fn new(config: ControllerConfig, course: &CourseConfig, script: InputScript) -> Result<Self> {
        let mut controller = CharacterControllerBuilder::new(config)
            .body(SimpleBody::new(course.spawn, course.body_mass))
            .view(RecordedView::default())
            .fixed_timestep(DEFAULT_FIXED_TIMESTEP)
            .build()?;

        let mut world = course.build_world();
        let pending = world.resolve(controller.body_mut());

        let mut input = InputState::new();
        let mut cursor = HeadlessCursor::default();
        input.capture_cursor(&mut cursor);

        let summary = RunSummary {
            max_height: course.spawn.y,
            ..Default::default()
        };

        Ok(Self {
            controller,
            world,
            input,
            script,
            cursor,
            pending,
            summary,
        })
    }

    /// One frame followed by one fixed step.
    pub fn tick(&mut self) {
        self.script.poll(self.controller.clock(), &mut self.input);
        let frame = self.input.sample();
        self.controller.frame_update(&frame);

        let pending = std::mem::take(&mut self.pending);
        for &layer in &pending.exits {
            self.controller.on_contact_exit(layer);
            self.summary.contact_exits += 1;
        }
        for event in &pending.stays {
            self.controller.on_contact_stay(event);
        }

        let was_grounded = self.controller.is_grounded();
        match self.controller.fixed_update() {
            Some(report) => {
                self.summary.steps += 1;
                if was_grounded {
                    self.summary.grounded_steps += 1;
                }
                if report.jumped {
                    self.summary.jumps += 1;
                }
            }
            None => self.summary.skipped_steps += 1,
        }
        match self.controller.mode() {
            LocomotionMode::Sprinting => self.summary.sprint_steps += 1,
            LocomotionMode::Crouching => self.summary.crouch_steps += 1,
            LocomotionMode::Walking => {}
        }

        let dt = self.controller.fixed_timestep();
        let body = self.controller.body_mut();
        body.integrate(dt);
        self.pending = self.world.resolve(body);

        let body = self.controller.body();
        self.summary.max_horizontal_speed = self.summary.max_horizontal_speed.max(body.horizontal_speed());
        self.summary.max_height = self.summary.max_height.max(body.position.y);
    }

    /// Tick until the controller clock reaches `seconds`, logging once per
    /// simulated second.
    pub fn run_for(&mut self, seconds: f64) {
        let steps_per_second = (1.0 / f64::from(self.controller.fixed_timestep())).round().max(1.0) as u64;
        let mut step = 0u64;
        while self.controller.clock() < seconds {
            self.tick();
            step += 1;
            if step % steps_per_second == 0 {
                let body = self.controller.body();
                log::info!(
                    "t={:>5.2}s pos=({:>6.2}, {:>5.2}, {:>7.2}) speed={:>5.2} mode={:?} grounded={}",
                    self.controller.clock(),
                    body.position.x,
                    body.position.y,
                    body.position.z,
                    body.horizontal_speed(),
                    self.controller.mode(),
                    self.controller.is_grounded()
                );
            }
        }
    }

    pub fn controller(&self) -> &CharacterController<SimpleBody, RecordedView> {
        &self.controller
    }

    pub fn world(&self) -> &PlaneWorld {
        &self.world
    }

    pub fn cursor(&self) -> &HeadlessCursor {
        &self.cursor
    }

    pub fn script(&self) -> &InputScript {
        &self.script
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::slope_angle_degrees;

    #[test]
    fn test_ramp_is_walkable() {
        let course = CourseConfig::default();
        assert!((slope_angle_degrees(course.ramp_normal()) - 30.0).abs() < 1e-3);
        assert_eq!(course.build_world().planes().len(), 3);
    }

    #[test]
    fn test_script_sorted_and_polled() {
        let mut script = InputScript::new(vec![
            ScriptEvent { at: 1.0, action: ScriptAction::Key(KeyCode::W, false) },
            ScriptEvent { at: 0.0, action: ScriptAction::Key(KeyCode::W, true) },
        ]);
        let mut input = InputState::new();

        assert_eq!(script.poll(0.5, &mut input), 1);
        assert!(input.keys().forward);
        assert_eq!(script.poll(0.5, &mut input), 0);
        assert_eq!(script.poll(1.0, &mut input), 1);
        assert!(!input.keys().forward);
        assert!(script.is_finished());
        assert_eq!(script.duration(), 1.0);
    }

    #[test]
    fn test_simulation_settles_on_floor() {
        let mut sim =
            CourseSimulation::new(ControllerConfig::default(), &CourseConfig::default(), InputScript::default())
                .unwrap();
        sim.run_for(1.0);

        assert!(sim.controller().is_grounded());
        assert!(sim.cursor().locked);
        assert!(!sim.cursor().visible);
        assert!((sim.controller().body().position.y - 1.0).abs() < 0.05);
        assert_eq!(sim.summary().jumps, 0);
    }
}
