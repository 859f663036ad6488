use color_lattice::{ColorBoard, FrameSurface};
use color_lattice::utils::map_t_of_range_a_to_range_b;
use log::{error, info};
use pixels::{Error, Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::KeyCode;
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

const WINDOW_WIDTH: u32 = 1600;
const WINDOW_HEIGHT: u32 = 900;

// desired on-screen size of a single board cell
const TARGET_CELL_WIDTH: u32 = 10;
const TARGET_CELL_HEIGHT: u32 = 10;

// overestimate with ceil so the board covers the whole frame
fn board_dims(frame_width: u32, frame_height: u32) -> (usize, usize) {
    let rows = frame_height.div_ceil(TARGET_CELL_HEIGHT).max(1) as usize;
    let cols = frame_width.div_ceil(TARGET_CELL_WIDTH).max(1) as usize;

    (rows, cols)
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let event_loop = EventLoop::new().expect("Failed to create an event loop");
    let mut input = WinitInputHelper::new();
    let window = {
        let size = LogicalSize::new(WINDOW_WIDTH as f64, WINDOW_HEIGHT as f64);
        WindowBuilder::new()
            .with_title("Color Lattice")
            .with_inner_size(size)
            .build(&event_loop)
            .expect("Failed to create a window")
    };

    let window_size = window.inner_size();
    let mut frame_width = window_size.width;
    let mut frame_height = window_size.height;

    let mut pixels = {
        let surface_texture = SurfaceTexture::new(frame_width, frame_height, &window);
        Pixels::new(frame_width, frame_height, surface_texture)?
    };

    let (rows, cols) = board_dims(frame_width, frame_height);
    let mut board = match ColorBoard::new(rows, cols) {
        Ok(board) => board,
        Err(err) => {
            error!("Failed to create the board: {err}");
            return Err(Error::UserDefined(Box::new(err)));
        }
    };
    info!("Created a {rows}x{cols} board for a {frame_width}x{frame_height} frame");

    let res = event_loop.run(|event, elwt| {
        if let Event::WindowEvent {
            event: WindowEvent::RedrawRequested,
            ..
        } = event
        {
            let mut surface = FrameSurface::new(pixels.frame_mut(), frame_width, frame_height);
            board.render_to(&mut surface);

            if let Err(err) = pixels.render() {
                error!("pixels.render() failed: {err}");
                elwt.exit();
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(KeyCode::Escape) || input.close_requested() {
                elwt.exit();
                return;
            }

            if let Some(size) = input.window_resized() {
                if size.width > 0 && size.height > 0 {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        error!("pixels.resize_surface() failed: {err}");
                        elwt.exit();
                        return;
                    }
                    if let Err(err) = pixels.resize_buffer(size.width, size.height) {
                        error!("pixels.resize_buffer() failed: {err}");
                        elwt.exit();
                        return;
                    }
                    frame_width = size.width;
                    frame_height = size.height;

                    // recycle existing content into the new dimensions
                    let (rows, cols) = board_dims(frame_width, frame_height);
                    if let Err(err) = board.resize_rows(rows).and_then(|_| board.resize_cols(cols))
                    {
                        error!("Failed to resize the board: {err}");
                        elwt.exit();
                        return;
                    }
                    info!("Resized the board to {rows}x{cols}");
                }
            }

            // pointer position drives the two coupling constants
            if let Some((x, y)) = input.cursor() {
                board.params.k_color =
                    map_t_of_range_a_to_range_b(x as f64, 0.0..frame_width as f64, 0.0..1.0)
                        .clamp(0.0, 1.0);
                board.params.k_space =
                    map_t_of_range_a_to_range_b(y as f64, 0.0..frame_height as f64, 0.0..1.0)
                        .clamp(0.0, 1.0);
            }

            // one simulation step per animation tick
            board.next();
            window.request_redraw();
        }
    });

    res.map_err(|err| Error::UserDefined(Box::new(err)))
}
