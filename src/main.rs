mod connect;
mod core;
mod platform;

use connect::connect_view::ConnectView;
use core::config;
use core::types::Color;
use platform::renderer::Renderer;
use platform::renderer_cairo::RendererCairo;
use platform::window_x11::WindowX11;
use std::time::Instant;

struct Args {
    width: i32,
    height: i32,
}

fn parse_args() -> Args {
    let mut args = Args {
        width: 480,
        height: 480,
    };

    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--width" if i + 1 < argv.len() => {
                i += 1;
                args.width = argv[i].parse().unwrap_or(args.width);
            }
            "--height" if i + 1 < argv.len() => {
                i += 1;
                args.height = argv[i].parse().unwrap_or(args.height);
            }
            "--help" => {
                println!("Usage: diamond-connect [--width <px>] [--height <px>]");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    args
}

fn main() {
    env_logger::init();

    let args = parse_args();

    // Create window
    let mut window = WindowX11::new();
    if !window.create(args.width, args.height, "Diamond Connect") {
        eprintln!("Failed to create X11 window");
        std::process::exit(1);
    }

    // Create renderer
    let cr = match window.create_cairo_context() {
        Some(cr) => cr,
        None => {
            eprintln!("Failed to create Cairo context");
            std::process::exit(1);
        }
    };
    let mut renderer = RendererCairo::new(cr);

    let mut view = ConnectView::new(window.width() as f64, window.height() as f64);

    let mut last_time = Instant::now();
    let mut quit = false;

    // Main loop
    while !quit {
        if !window.poll_events() {
            break;
        }

        if window.take_exposed() {
            view.request_redraw();
        }

        // Dispatch events to the view
        for event in window.take_mouse_events() {
            view.handle_mouse(&event);
        }
        for event in window.take_key_events() {
            // Ctrl+Q: quit
            if event.pressed && event.ctrl && event.keycode == 24 {
                quit = true;
            }
        }

        // Container size follows the window
        view.set_container_size(window.width() as f64, window.height() as f64);

        // Delta time
        let now = Instant::now();
        let dt = now.duration_since(last_time).as_secs_f64() * 1000.0;
        last_time = now;

        view.update(dt);

        // Render only when something changed or a fade is running
        if view.should_draw() {
            match window.create_cairo_context() {
                Some(cr) => renderer.set_context(cr),
                None => log::warn!("could not refresh Cairo context"),
            }

            renderer.begin_frame(window.width(), window.height());
            renderer.fill_rect(
                0.0,
                0.0,
                window.width() as f64,
                window.height() as f64,
                Color::from_hex(config::BG_COLOR, 1.0),
            );
            view.render(&renderer);
            renderer.end_frame();

            window.flush();
        }

        // Cap at ~60fps
        std::thread::sleep(std::time::Duration::from_millis(16));
    }

    view.teardown();
}
