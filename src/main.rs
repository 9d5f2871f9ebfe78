use anyhow::{Context, Result};
use log::{debug, info, trace};
use shinobi_arena::engine::game_loop::GameLoop;
use shinobi_arena::engine::input::{Action, InputManager};
use shinobi_arena::game::{Arena, GameEvent, GameSettings};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Shinobi Arena...");

    let settings = match std::env::args().nth(1) {
        Some(path) => GameSettings::load(&path).with_context(|| format!("Failed to load settings from {}", path))?,
        None => GameSettings::default(),
    };
    let (width, height) = (settings.arena.width, settings.arena.height);

    let mut arena = Arena::new(settings, rand::random()).context("Invalid settings")?;
    let mut game_loop = GameLoop::new();
    let mut input = InputManager::new();
    let mut last_hud = None;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Shinobi Arena")
        .with_inner_size(winit::dpi::LogicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");
    arena.new_game(game_loop.now());

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
                event: WindowEvent::Focused(false),
                ..
            } => input.reset(),
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                // Meta keys act immediately so they work while paused
                match input.process_keyboard_event(&event) {
                    Some(Action::Pause) => game_loop.toggle_pause(),
                    Some(Action::NewGame) => arena.new_game(game_loop.now()),
                    _ => {}
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if let Some(hud) = &last_hud {
                    trace!("{:?}", hud);
                }
            }
            Event::AboutToWait => {
                let steps = game_loop.begin_frame();
                if steps > 0 {
                    let mut tick_input = input.sample();
                    for _ in 0..steps {
                        let now = game_loop.step();
                        last_hud = Some(arena.tick(&tick_input, now));
                        // Edges belong to the first tick of a frame only
                        tick_input.jump_pressed = false;
                        tick_input.attack_held = input.is_pressed(Action::Attack);
                    }
                    input.update();

                    for event in arena.drain_events() {
                        match event {
                            GameEvent::Sound(cue) => debug!("Sound cue: {:?}", cue),
                            other => debug!("Event: {:?}", other),
                        }
                    }
                }
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
