/// GLIDE Project
/// `File` main.rs
/// `Description` Main project module
/// `Author` TioT2
/// `Last changed` 18.10.2026

pub mod util;
pub mod timer;
pub mod input;
pub mod math;
pub mod camera;
pub mod level;
pub mod collision;
pub mod config;
pub mod player;
pub mod surface;
pub mod render;

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use camera::Camera;
use collision::CollisionWorld;
use config::SimulationConfig;
use input::{Bindings, KeyCode};
use level::Level;
use math::*;
use player::Player;
use render::{Renderer, WireRender};
use surface::Surface;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "glide", version, about = "First person level viewer with swept collision")]
struct Args {
    /// Level file (.lvl), built-in level is used if not set
    level: Option<PathBuf>,

    /// Simulation config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Screenshot output directory
    #[arg(long, default_value = ".")]
    screenshot_dir: PathBuf,
} // struct Args

/// Background color
const CLEAR_COLOR: u32 = 0x101418;

/// Collision edge overlay color
const EDGE_COLOR: u32 = 0xFF5040;

/// Portal overlay color
const PORTAL_COLOR: u32 = 0x4090FF;

const CROSSHAIR_COLOR: u32 = 0xFFFFFF;

/// Frame duration considered slow, seconds
const SLOW_FRAME: f32 = 0.25;

/// Level loading function
/// * `path` - level file path, built-in level if none
fn load_level(path: Option<&PathBuf>) -> anyhow::Result<Level> {
    let level = match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read level {}", path.display()))?;

            Level::load_from_lvl(&source).with_context(|| format!("failed to load level {}", path.display()))?
        }
        None => Level::load_default().context("failed to load built-in level")?,
    };

    tracing::info!(
        "level loaded: {} faces, {} portals, {} lights",
        level.faces.len(),
        level.portals.len(),
        level.lights.len(),
    );

    Ok(level)
} // fn load_level

/// Simulation config loading function
/// * `path` - config file path, defaults if none
fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SimulationConfig> {
    let config = match path {
        Some(path) => SimulationConfig::load(path).with_context(|| format!("failed to load config {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    config.validate().context("invalid simulation config")?;

    Ok(config)
} // fn load_config

/// Cursor grab setting function
/// * Returns true if cursor is grabbed
fn set_cursor_grab(window: &winit::window::Window, grab: bool) -> bool {
    use winit::window::CursorGrabMode;

    let grabbed = if grab {
        window
            .set_cursor_grab(CursorGrabMode::Confined)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
            .map_err(|error| tracing::warn!("cursor grab failed: {error}"))
            .is_ok()
    } else {
        _ = window.set_cursor_grab(CursorGrabMode::None);
        false
    };

    window.set_cursor_visible(!grabbed);
    grabbed
} // fn set_cursor_grab

/// Viewer running function
/// * `args` - command line arguments
fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let level = load_level(args.level.as_ref())?;

    let world = CollisionWorld::from_level(&level, config.radius, config.epsilon);
    let mesh = level.build_mesh();
    let bindings = Bindings::default();

    let mut player = Player::new(&level.spawn);
    let mut camera = Camera::new(config.fov_degrees, config.z_near, config.z_far);
    let mut timer = timer::Timer::new();
    let mut input = input::Input::new();
    let mut overlay = false;

    let event_loop = winit::event_loop::EventLoop::new()
        .map_err(|error| anyhow::anyhow!("failed to create event loop: {error}"))?;
    let screen_size = winit::dpi::PhysicalSize::<u32>::new(800, 600);
    let window = winit::window::WindowBuilder::new()
        .with_title("GLIDE")
        .with_resizable(true)
        .with_inner_size(screen_size)
        .build(&event_loop)
        .map_err(|error| anyhow::anyhow!("failed to create window: {error}"))?;

    let window_context = softbuffer::Context::new(&window)
        .map_err(|error| anyhow::anyhow!("failed to create presentation context: {error}"))?;
    let mut surface = softbuffer::Surface::new(&window_context, &window)
        .map_err(|error| anyhow::anyhow!("failed to create presentation surface: {error}"))?;

    let mut frame = Surface::new(screen_size.width as usize, screen_size.height as usize);
    if let Some((width, height)) = NonZeroU32::new(screen_size.width).zip(NonZeroU32::new(screen_size.height)) {
        if let Err(error) = surface.resize(width, height) {
            tracing::warn!("presentation surface resize failed: {error}");
        }
    }

    let mut cursor_grabbed = set_cursor_grab(&window, true);

    event_loop.run(|event, target| {
        match event {
            winit::event::Event::DeviceEvent { event: winit::event::DeviceEvent::MouseMotion { delta }, .. } => {
                if cursor_grabbed {
                    input.on_mouse_motion(Vec2::new(delta.0 as f32, delta.1 as f32));
                }
            }
            winit::event::Event::WindowEvent { window_id, event } => if window.id() == window_id {
                match event {
                    winit::event::WindowEvent::CloseRequested => {
                        target.exit();
                    }
                    winit::event::WindowEvent::KeyboardInput { event, .. } => if let winit::keyboard::PhysicalKey::Code(code) = event.physical_key {
                        input.on_key_state_change(code, event.state == winit::event::ElementState::Pressed);
                    }
                    winit::event::WindowEvent::MouseInput { state: winit::event::ElementState::Pressed, .. } => {
                        if !cursor_grabbed {
                            cursor_grabbed = set_cursor_grab(&window, true);
                        }
                    }
                    winit::event::WindowEvent::Focused(false) => {
                        cursor_grabbed = set_cursor_grab(&window, false);
                    }
                    winit::event::WindowEvent::Resized(size) => {
                        if let Some((width, height)) = NonZeroU32::new(size.width).zip(NonZeroU32::new(size.height)) {
                            if let Err(error) = surface.resize(width, height) {
                                tracing::warn!("presentation surface resize to {width}x{height} failed: {error}");
                            }
                            frame.resize(size.width as usize, size.height as usize);
                        }
                    }
                    winit::event::WindowEvent::RedrawRequested => 'redraw: {
                        timer.response();
                        if timer.get_delta_time() > SLOW_FRAME {
                            tracing::debug!("slow frame: {:.3}s", timer.get_delta_time());
                        }

                        let state = input.get_state();

                        if state.is_key_clicked(KeyCode::Escape) {
                            if cursor_grabbed {
                                cursor_grabbed = set_cursor_grab(&window, false);
                            } else {
                                target.exit();
                                break 'redraw;
                            }
                        }

                        if state.is_key_clicked(KeyCode::F11) {
                            if window.fullscreen().is_some() {
                                window.set_fullscreen(None);
                            } else {
                                window.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
                            }
                        }

                        if state.is_key_clicked(KeyCode::Tab) {
                            overlay = !overlay;
                            tracing::info!("collision overlay {}", if overlay { "on" } else { "off" });
                        }

                        // Simulation step
                        let report = player.step(&state.controls(&bindings), &world, &level.portals, &config);
                        if let Some(index) = report.teleported {
                            tracing::debug!("frame {} teleported through portal {index}", timer.get_frame_count());
                        }
                        camera.set_location(player.position, player.yaw, player.pitch);

                        // Render frame
                        let view = camera.view_matrix();
                        let projection = camera.projection_matrix(frame.get_extent());

                        frame.clear(CLEAR_COLOR);
                        {
                            let mut render = WireRender::new(&mut frame);
                            render.draw(&mesh, &view, &projection, &level.lights);

                            if overlay {
                                let view_projection = projection * view;

                                render.draw_segments(world.edges.iter().map(|edge| (edge.start, edge.end)), &view_projection, EDGE_COLOR);
                                render.draw_segments(level.portals.iter().flat_map(|portal| portal.quad.edges()), &view_projection, PORTAL_COLOR);
                            }
                        }

                        // Crosshair
                        let extent = frame.get_extent();
                        let (cx, cy) = ((extent.width / 2) as isize, (extent.height / 2) as isize);
                        frame.draw_bar(cx - 1, cy - 1, cx + 2, cy + 2, CROSSHAIR_COLOR);

                        if state.is_key_clicked(KeyCode::F12) {
                            let path = args.screenshot_dir.join(format!("glide-{}.png", timer.get_frame_count()));

                            match frame.save_png(&path) {
                                Ok(()) => tracing::info!("screenshot saved to {}", path.display()),
                                Err(error) => tracing::error!("screenshot {} failed: {error}", path.display()),
                            }
                        }

                        let mut buffer = match surface.buffer_mut() {
                            Ok(buffer) => buffer,
                            Err(error) => {
                                tracing::error!("presentation buffer is unavailable: {error}");
                                target.exit();
                                break 'redraw;
                            }
                        };

                        let count = buffer.len().min(frame.get_data().len());
                        buffer[..count].copy_from_slice(&frame.get_data()[..count]);

                        if let Err(error) = buffer.present() {
                            tracing::error!("frame presentation failed: {error}");
                            target.exit();
                            break 'redraw;
                        }

                        window.set_title(&format!(
                            "GLIDE | {:.0} FPS | {:.2} {:.2} {:.2} | {:?}",
                            timer.get_fps(),
                            player.position.x,
                            player.position.y,
                            player.position.z,
                            player.state,
                        ));

                        input.clear_changed();

                        window.request_redraw();
                    }
                    _ => {},
                }
            }
            _ => {},
        }
    }).map_err(|error| anyhow::anyhow!("event loop failed: {error}"))?;

    tracing::info!("exiting after {:.1}s, {} frames", timer.get_time(), timer.get_frame_count());

    Ok(())
} // fn run

/// Main program function
fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("glide=info")))
        .init();

    run(Args::parse())
} // fn main

// file main.rs
