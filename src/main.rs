use std::time::{Duration, Instant};

use clap::Parser;
use pixels::{Error, Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::KeyCode;
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use chip8kid::{EngineState, ExecutionEngine, FastrandSource, MEMORY_SIZE};

const SCREEN_WIDTH: u32 = 64;
const SCREEN_HEIGHT: u32 = 32;
const UPSCALE: u32 = 12;

/// Left-hand-side QWERTY layout for the CHIP-8 hex keypad, the conventional
/// COSMAC VIP mapping most modern interpreters use.
const KEYMAP: [(KeyCode, u8); 16] = [
    (KeyCode::Digit1, 0x1),
    (KeyCode::Digit2, 0x2),
    (KeyCode::Digit3, 0x3),
    (KeyCode::Digit4, 0xC),
    (KeyCode::KeyQ, 0x4),
    (KeyCode::KeyW, 0x5),
    (KeyCode::KeyE, 0x6),
    (KeyCode::KeyR, 0xD),
    (KeyCode::KeyA, 0x7),
    (KeyCode::KeyS, 0x8),
    (KeyCode::KeyD, 0x9),
    (KeyCode::KeyF, 0xE),
    (KeyCode::KeyZ, 0xA),
    (KeyCode::KeyX, 0x0),
    (KeyCode::KeyC, 0xB),
    (KeyCode::KeyV, 0xF),
];

#[derive(Parser)]
#[command(name = "gamekid")]
#[command(about = "A CHIP-8 interpreter")]
struct Args {
    #[arg(long, help = "ROM file to load")]
    rom: Option<String>,

    #[arg(long, help = "Log every fetched instruction")]
    debug: bool,

    #[arg(long, help = "Corrupt a random memory byte once per frame (stress testing)")]
    corrupt: bool,

    #[arg(long, default_value_t = 10, help = "Instructions attempted per frame")]
    cycles_per_frame: u32,
}

#[rustfmt::skip]
const FALLBACK_ROM: [u8; 6] = [
    0x00, 0xE0, // CLS
    0xA0, 0x50, // LD I, font glyph table base
    0xD0, 0x05, // DRW V0, V0, 5
];

fn load_rom(path: Option<&str>) -> Vec<u8> {
    match path {
        Some(path) => std::fs::read(path).unwrap_or_else(|err| {
            log::warn!("failed to read {path}: {err}; using fallback ROM");
            FALLBACK_ROM.to_vec()
        }),
        None => FALLBACK_ROM.to_vec(),
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    let core_level = if args.debug {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Debug
    };
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Off)
        .filter_module("gamekid", log::LevelFilter::Debug)
        .filter_module("chip8kid", core_level)
        .init();

    let rom = load_rom(args.rom.as_deref());
    let mut engine = ExecutionEngine::new(&rom, Box::new(FastrandSource::new()))
        .unwrap_or_else(|err| {
            log::error!("failed to load ROM: {err}; falling back");
            ExecutionEngine::new(&FALLBACK_ROM, Box::new(FastrandSource::new())).unwrap()
        });
    let mut corrupt_rng = fastrand::Rng::new();

    let event_loop = EventLoop::new().unwrap();
    let mut input = WinitInputHelper::new();
    let window = {
        let size = LogicalSize::new(
            (SCREEN_WIDTH * UPSCALE) as f64,
            (SCREEN_HEIGHT * UPSCALE) as f64,
        );
        WindowBuilder::new()
            .with_title("CHIP-8")
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)
            .unwrap()
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(SCREEN_WIDTH, SCREEN_HEIGHT, surface_texture)?
    };

    let mut last_tick = Instant::now();
    let mut key_state = [false; 16];
    let mut cycles_per_frame = args.cycles_per_frame;

    let res = event_loop.run(|event, elwt| {
        if let Event::WindowEvent {
            event: WindowEvent::RedrawRequested,
            ..
        } = event
        {
            let elapsed = last_tick.elapsed();
            last_tick = Instant::now();

            if args.corrupt {
                let addr = corrupt_rng.u16(0..MEMORY_SIZE as u16);
                let value = corrupt_rng.u8(..);
                let _ = engine.corrupt_byte(addr, value);
            }

            let per_instruction = elapsed / cycles_per_frame.max(1);
            for _ in 0..cycles_per_frame {
                match engine.advance(per_instruction) {
                    Ok(()) => {}
                    Err(err) => {
                        log::error!("halting: {err}");
                        elwt.exit();
                        return;
                    }
                }
                if !matches!(engine.state(), EngineState::Running) {
                    break;
                }
            }

            draw_screen(&engine, pixels.frame_mut());
            engine.clear_dirty();

            if let Err(err) = pixels.render() {
                log::error!("pixels.render() failed: {err}");
                elwt.exit();
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(KeyCode::Escape) || input.close_requested() {
                elwt.exit();
                return;
            }

            if input.key_pressed(KeyCode::Space) {
                cycles_per_frame = if cycles_per_frame == 0 {
                    args.cycles_per_frame.max(1)
                } else {
                    0
                };
            }

            if input.key_pressed(KeyCode::Tab) {
                if let Err(err) = engine.advance(Duration::ZERO) {
                    log::error!("halting: {err}");
                    elwt.exit();
                    return;
                }
            }

            for &(code, chip8_key) in &KEYMAP {
                let held = input.key_held(code);
                if held != key_state[chip8_key as usize] {
                    key_state[chip8_key as usize] = held;
                    if let Err(err) = engine.set_key_state(chip8_key, held) {
                        log::warn!("set_key_state({chip8_key}) failed: {err}");
                    }
                }
            }

            window.request_redraw();
        }
    });
    res.map_err(|e| Error::UserDefined(Box::new(e)))
}

fn draw_screen(engine: &ExecutionEngine, frame: &mut [u8]) {
    let view = engine.framebuffer();
    for (i, pixel) in frame.chunks_exact_mut(4).enumerate() {
        let x = i % SCREEN_WIDTH as usize;
        let y = i / SCREEN_WIDTH as usize;
        let rgba = if view.pixel(x, y) {
            [0xe8, 0xe8, 0xe8, 0xff]
        } else {
            [0x10, 0x10, 0x14, 0xff]
        };
        pixel.copy_from_slice(&rgba);
    }
}
