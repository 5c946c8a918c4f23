// Input manager - routes device events to live subscriptions

use super::action::Action;
use super::config::InputConfig;
use super::intent::MotionIntent;
use super::sampler::InputSampler;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Translates device events into actions and fans them out to subscribers.
///
/// Subscribers hold an [`InputSubscription`]. The manager only keeps weak
/// references, so dropping the subscription detaches it; there is no
/// separate enable/disable call to forget.
pub struct InputManager {
    config: InputConfig,
    subscribers: Vec<Weak<RefCell<InputSampler>>>,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            subscribers: Vec::new(),
        }
    }

    /// Start receiving input. Input stops when the returned guard is dropped.
    pub fn subscribe(&mut self) -> InputSubscription {
        let sampler = Rc::new(RefCell::new(InputSampler::new()));
        self.subscribers.push(Rc::downgrade(&sampler));
        log::debug!("Input subscription opened ({} live)", self.subscriber_count());
        InputSubscription { sampler }
    }

    /// Process a keyboard event from winit. Returns the action it mapped to.
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) -> Option<Action> {
        let PhysicalKey::Code(key) = event.physical_key else {
            return None;
        };
        if event.repeat {
            return None;
        }
        self.process_key(key, event.state == ElementState::Pressed)
    }

    /// Apply a key press or release. Returns the action it mapped to.
    pub fn process_key(&mut self, key: KeyCode, pressed: bool) -> Option<Action> {
        let action = self.config.get_action(key)?;
        // Meta actions belong to the host loop
        if action.is_meta() {
            return Some(action);
        }

        self.for_each_subscriber(|sampler| {
            if pressed {
                sampler.press(action);
            } else {
                sampler.release(action);
            }
        });
        Some(action)
    }

    /// Process raw mouse motion (winit `DeviceEvent::MouseMotion`)
    pub fn process_mouse_motion(&mut self, delta: (f64, f64)) {
        // Screen y grows downward; look up is positive
        let look = Vec2::new(delta.0 as f32, -delta.1 as f32);
        self.for_each_subscriber(|sampler| sampler.add_look(look));
    }

    /// Close the current frame for every subscriber
    pub fn end_frame(&mut self) {
        self.for_each_subscriber(InputSampler::end_frame);
    }

    /// Release everything, e.g. when the window loses focus
    pub fn reset_all(&mut self) {
        self.for_each_subscriber(InputSampler::reset);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|s| s.strong_count() > 0)
            .count()
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    fn for_each_subscriber(&mut self, mut f: impl FnMut(&mut InputSampler)) {
        self.subscribers.retain(|weak| match weak.upgrade() {
            Some(sampler) => {
                f(&mut *sampler.borrow_mut());
                true
            }
            None => false,
        });
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::with_defaults())
    }
}

/// Scoped handle to the input stream of one consumer
#[derive(Debug)]
pub struct InputSubscription {
    sampler: Rc<RefCell<InputSampler>>,
}

impl InputSubscription {
    /// Snapshot for one physics tick; consumes a latched jump press
    pub fn take_intent(&self) -> MotionIntent {
        self.sampler.borrow_mut().take_intent()
    }

    pub fn look_delta(&self) -> Vec2 {
        self.sampler.borrow().look_delta()
    }

    pub fn movement(&self) -> Vec2 {
        self.sampler.borrow().movement()
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.sampler.borrow().is_pressed(action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.sampler.borrow().just_pressed(action)
    }
}

impl Drop for InputSubscription {
    fn drop(&mut self) {
        log::debug!("Input subscription closed");
    }
}
