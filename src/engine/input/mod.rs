// Input handling system
//
// Keyboard and mouse events arrive once per rendered frame; the locomotion
// machine reads them once per fixed physics tick. This module bridges the two.
//
// ## Architecture
//
// - `action`: player actions and default key bindings
// - `config`: key remapping
// - `buttons`: level and edge state per action
// - `intent`: the per-tick `MotionIntent` snapshot
// - `sampler`: latches buttons, look delta and jump presses between ticks
// - `manager`: routes winit events to live subscriptions
//
// ## Usage Example
//
// ```rust
// use strider::engine::input::InputManager;
//
// let mut input = InputManager::default();
// let subscription = input.subscribe();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per physics tick
// let intent = subscription.take_intent();
//
// // After the frame's ticks ran
// input.end_frame();
// ```

pub mod action;
pub mod buttons;
pub mod config;
pub mod intent;
pub mod manager;
pub mod sampler;

// Re-export commonly used types
pub use action::Action;
pub use config::InputConfig;
pub use intent::MotionIntent;
pub use manager::{InputManager, InputSubscription};
pub use sampler::InputSampler;
