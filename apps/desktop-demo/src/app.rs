//! winit event loop driving a [`FingerView`] through a pixels surface.

use std::sync::Arc;

use anyhow::Context;
use fingerpick_foundation::{PointerId, PointerPhase, TouchDispatcher};
use fingerpick_render_pixels::PixelsRenderer;
use fingerpick_runtime_std::StdRuntime;
use fingerpick_ui::FingerView;
use fingerpick_ui_graphics::{Point, Size};
use pixels::{Pixels, SurfaceTexture};
use web_time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::input::{pinned_pointer_id, TouchRoute, TouchRouter, MOUSE_POINTER_ID};
use crate::layout::ScreenLayout;
use crate::FingerPickAppOptions;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Opens the window and runs until it is closed.
pub fn run(options: FingerPickAppOptions) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = FingerPickApp::new(options);
    event_loop.run_app(&mut app).context("running event loop")?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct Surface {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

struct FingerPickApp {
    options: FingerPickAppOptions,
    runtime: StdRuntime,
    view: FingerView,
    dispatcher: TouchDispatcher,
    touch_router: TouchRouter,
    renderer: PixelsRenderer,
    layout: ScreenLayout,
    surface: Option<Surface>,
    cursor: Point,
    mouse_down: bool,
    pinned: u64,
    last_pump: Instant,
    error: Option<anyhow::Error>,
}

impl FingerPickApp {
    fn new(options: FingerPickAppOptions) -> Self {
        let runtime = StdRuntime::new();
        let view = FingerView::new(runtime.runtime_handle());
        let last_pump = runtime.now();
        Self {
            options,
            view,
            runtime,
            dispatcher: TouchDispatcher::new(),
            touch_router: TouchRouter::new(),
            renderer: PixelsRenderer::new(),
            layout: ScreenLayout::new(Size::ZERO),
            surface: None,
            cursor: Point::ZERO,
            mouse_down: false,
            pinned: 0,
            last_pump,
            error: None,
        }
    }

    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.options.title.clone())
            .with_inner_size(LogicalSize::new(self.options.width, self.options.height));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("creating window")?,
        );

        let size = window.inner_size();
        let texture = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels =
            Pixels::new(size.width, size.height, texture).context("creating pixel surface")?;
        log::info!("window ready at {}x{}", size.width, size.height);

        window.request_redraw();
        self.surface = Some(Surface { window, pixels });
        self.apply_size(size);
        Ok(())
    }

    fn resize(&mut self, size: PhysicalSize<u32>) -> anyhow::Result<()> {
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        if let Some(surface) = self.surface.as_mut() {
            surface
                .pixels
                .resize_surface(size.width, size.height)
                .context("resizing surface")?;
            surface
                .pixels
                .resize_buffer(size.width, size.height)
                .context("resizing frame buffer")?;
        }
        self.apply_size(size);
        Ok(())
    }

    fn apply_size(&mut self, size: PhysicalSize<u32>) {
        let size = Size::new(size.width as f32, size.height as f32);
        self.layout = ScreenLayout::new(size);
        self.view.on_size_changed(size);
    }

    fn dispatch(&mut self, id: PointerId, phase: PointerPhase, position: Point) {
        if let Some(event) = self.dispatcher.dispatch(id, phase, position) {
            self.view.on_touch_event(&event);
        }
    }

    fn on_mouse(&mut self, button: MouseButton, state: ElementState) {
        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => {
                if self.layout.hits_start(self.cursor) {
                    log::info!("start pressed");
                    self.view.start();
                } else {
                    self.mouse_down = true;
                    self.dispatch(MOUSE_POINTER_ID, PointerPhase::Start, self.cursor);
                }
            }
            (MouseButton::Left, ElementState::Released) if self.mouse_down => {
                self.mouse_down = false;
                self.dispatch(MOUSE_POINTER_ID, PointerPhase::End, self.cursor);
            }
            (MouseButton::Right, ElementState::Pressed) => {
                let id = pinned_pointer_id(self.pinned);
                self.pinned += 1;
                self.dispatch(id, PointerPhase::Start, self.cursor);
            }
            _ => {}
        }
    }

    fn on_key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        match code {
            KeyCode::Space | KeyCode::Enter => self.view.start(),
            KeyCode::KeyR => self.view.reset(),
            KeyCode::Escape => {
                self.dispatch(0, PointerPhase::Cancel, Point::ZERO);
                self.mouse_down = false;
                self.pinned = 0;
            }
            _ => {}
        }
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        let (width, height) = self.layout.buffer_size();
        self.renderer
            .set_primitives(self.layout.compose(self.view.render()));
        self.renderer
            .draw(surface.pixels.frame_mut(), width, height)
            .context("rasterizing frame")?;
        surface.pixels.render().context("presenting frame")?;
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for FingerPickApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }
        if let Err(err) = self.create_surface(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.surface.as_ref().map(|surface| surface.window.id()) != Some(window_id) {
            return;
        }

        // Input may arrive long after the last pump; timers the widget arms
        // in response must count from now.
        self.runtime.sync(self.runtime.now());

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Err(err) = self.resize(size) {
                    self.fail(event_loop, err);
                }
            }
            WindowEvent::Touch(touch) => {
                let position = Point::new(touch.location.x as f32, touch.location.y as f32);
                let on_button = self.layout.hits_start(position);
                match self.touch_router.route(touch.id, touch.phase, on_button) {
                    TouchRoute::PressStart => {
                        log::info!("start pressed");
                        self.view.start();
                    }
                    TouchRoute::Swallow => {}
                    TouchRoute::Dispatch(phase) => self.dispatch(touch.id, phase, position),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as f32, position.y as f32);
                if self.mouse_down {
                    self.dispatch(MOUSE_POINTER_ID, PointerPhase::Move, self.cursor);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => self.on_mouse(button, state),
            WindowEvent::KeyboardInput { event, .. } => self.on_key(&event),
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.runtime.now();
        if self.runtime.pump(now) {
            if let Some(surface) = self.surface.as_ref() {
                surface.window.request_redraw();
            }
        }
        self.last_pump = now;

        let control_flow = match self.runtime.next_wakeup(now) {
            Some(wakeup) => ControlFlow::WaitUntil(wakeup.max(self.last_pump + FRAME_INTERVAL)),
            None => ControlFlow::Wait,
        };
        event_loop.set_control_flow(control_flow);
    }
}
