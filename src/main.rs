use anyhow::Result;
use glam::Vec2;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::AssetManager;
use engine::game_loop::GameLoop;
use engine::input::{InputEdge, InputManager};
use engine::renderer::{Renderer, Sprite};
use game::{GameConfig, SpriteLibrary, SpriteTextures, Stage};

/// Environment variable overriding the asset root
const ASSET_DIR_ENV: &str = "WALKABOUT_ASSET_DIR";
const DEFAULT_ASSET_DIR: &str = "assets";

/// Log the measured frame rate this often (in ticks)
const FPS_LOG_INTERVAL: u64 = 240;

/// Everything the event loop drives
struct Demo {
    renderer: Renderer,
    textures: SpriteTextures,
    stage: Stage,
    input: InputManager,
    game_loop: GameLoop,
}

impl Demo {
    fn apply_edge(&mut self, edge: InputEdge) {
        match edge {
            InputEdge::Pressed(action) => self.stage.on_press(action),
            InputEdge::Released(action) => self.stage.on_release(action, self.input.player()),
        }
    }

    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.renderer.resize(size);
        self.stage.resize(size.width as f32, size.height as f32);
    }

    /// Tick if one is due, then draw the latest frame
    fn redraw(&mut self) -> Result<()> {
        let now = Instant::now();
        if self.game_loop.is_frame_due(now) {
            let dt_ms = self.game_loop.begin_frame(now);
            self.stage.tick(dt_ms, self.input.player());

            if self.game_loop.frame_count() % FPS_LOG_INTERVAL == 0 {
                debug!(
                    "{:.1} fps, {} projectile(s)",
                    self.game_loop.fps(),
                    self.stage.projectiles().len()
                );
            }
        }

        let sprites = self.renderer.sprite_renderer_mut();
        sprites.clear();
        for command in self.stage.draw_list() {
            if let Some(texture) = self.textures.get(command.sheet, command.frame) {
                sprites.add_sprite(
                    Sprite::new(command.position, command.size, texture).flipped(command.flip),
                );
            }
        }

        self.renderer.render()
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Walkabout...");

    let config = GameConfig::default();
    let asset_dir =
        std::env::var(ASSET_DIR_ENV).unwrap_or_else(|_| DEFAULT_ASSET_DIR.to_string());

    // Sprites first: without them there is nothing to show
    let mut assets = AssetManager::new(&asset_dir);
    let library = SpriteLibrary::load(&mut assets, &config.frame_rates)?;
    info!("Assets loaded from '{}'", asset_dir);

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Walkabout")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(window.clone(), config.background))?;
    let textures = SpriteTextures::upload(&mut renderer, &assets)?;

    let size = renderer.size();
    let stage = Stage::new(
        &library,
        &config,
        Vec2::new(size.width as f32, size.height as f32),
    );

    let mut demo = Demo {
        renderer,
        textures,
        stage,
        input: InputManager::default(),
        game_loop: GameLoop::new(config.target_fps),
    };

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    demo.resize(physical_size);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    if let Some(edge) = demo.input.process_keyboard_event(&event) {
                        demo.apply_edge(edge);
                    }
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if let Some(edge) = demo.input.process_mouse_event(button, state) {
                        demo.apply_edge(edge);
                    }
                }
                WindowEvent::Focused(false) => {
                    for edge in demo.input.release_all() {
                        demo.apply_edge(edge);
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Err(e) = demo.redraw() {
                        match e.downcast_ref::<wgpu::SurfaceError>() {
                            Some(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                warn!("Surface lost, reconfiguring");
                                demo.renderer.reconfigure();
                            }
                            Some(wgpu::SurfaceError::OutOfMemory) => {
                                error!("GPU out of memory, shutting down");
                                elwt.exit();
                            }
                            _ => warn!("Frame skipped: {}", e),
                        }
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if demo.game_loop.is_frame_due(Instant::now()) {
                    window.request_redraw();
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(demo.game_loop.next_frame_at()));
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
