use anyhow::Result;
use glam::Vec3;
use log::info;
use strider::engine::game_loop::GameLoop;
use strider::engine::input::{Action, InputManager};
use strider::engine::physics::{presets, PhysicsWorld};
use strider::game::characters::{Character, LocomotionStats};
use winit::{
    event::{DeviceEvent, ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

const SPAWN_POINT: Vec3 = Vec3::new(0.0, 2.0, 0.0);
/// Below this height the character has fallen off the world
const KILL_PLANE_Y: f32 = -20.0;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Strider...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Strider")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Physics: a wide ground slab with its top at y = 0
    let mut physics = PhysicsWorld::new();
    let ground = physics.add_rigid_body(presets::ground_body(0.0, 0.5));
    physics.add_collider(presets::ground_collider(50.0, 0.5, 50.0), ground);

    let mut player = Character::spawn(&mut physics, LocomotionStats::default(), SPAWN_POINT)?;
    physics.update_query_pipeline();

    let mut input = InputManager::default();
    let controls = input.subscribe();
    let mut game_loop = GameLoop::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                let action = input.process_keyboard_event(&event);
                if event.state == ElementState::Pressed {
                    match action {
                        Some(Action::Quit) => {
                            info!("Quit requested, shutting down...");
                            elwt.exit();
                        }
                        Some(Action::Pause) => {
                            game_loop.toggle_pause();
                            // Presses made while paused must not fire on resume
                            input.reset_all();
                        }
                        _ => {}
                    }
                }
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Keys released while unfocused never reach us
                input.reset_all();
            }
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => {
                input.process_mouse_motion(delta);
            }
            Event::AboutToWait => {
                let updates = game_loop.begin_frame();
                for _ in 0..updates {
                    let intent = controls.take_intent();
                    if let Some(report) = player.fixed_update(&mut physics, &intent) {
                        if report.changed() {
                            info!("{} -> {}", report.previous, report.state);
                        }
                    }
                    physics.step();
                }

                if !game_loop.is_paused() {
                    player.frame_update(controls.look_delta(), game_loop.frame_delta());
                }

                if player
                    .position(&physics)
                    .is_some_and(|position| position.y < KILL_PLANE_Y)
                {
                    player.respawn(&mut physics, SPAWN_POINT);
                }

                input.end_frame();
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
