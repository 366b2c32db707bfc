mod script;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use slideup::{
    Easing, FrameRuntime, Rect, SavedState, SharedElement, SlideBuilder, SlideDirection,
    SlideListener, SlideState, Slider, SliderElement, TouchEvent, TouchSource,
};
use slideup_core::FRAME_INTERVAL_NANOS;
use web_time::Instant;

use script::Step;

const POINTER_X: f32 = 10.0;
const MAX_IDLE_FRAMES: usize = 10_000;

#[derive(Parser)]
#[command(
    name = "gesture-replay",
    about = "Replays scripted touch gestures against a SlideUp slider"
)]
struct Cli {
    /// JSON gesture script. Defaults to a single hiding swipe.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Height of the simulated slider view.
    #[arg(long, default_value_t = 500.0)]
    extent: f32,

    /// Top edge of the view inside its parent.
    #[arg(long, default_value_t = 0.0)]
    top: f32,

    #[arg(long, default_value_t = 1000.0)]
    parent: f32,

    #[arg(long, value_enum, default_value_t = Direction::Down)]
    direction: Direction,

    /// Settle duration in milliseconds.
    #[arg(long, default_value_t = 300)]
    duration: u64,

    #[arg(long, value_enum, default_value_t = Curve::Decelerate)]
    curve: Curve,

    /// Measure progress against the gap to the parent edge.
    #[arg(long, default_value_t = false)]
    slide_to_parent: bool,

    /// Saved state to restore before replaying.
    #[arg(long)]
    restore: Option<PathBuf>,

    /// Where to write the saved state after replaying.
    #[arg(long)]
    save: Option<PathBuf>,

    /// Log every listener call.
    #[arg(long, default_value_t = false)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Direction {
    Up,
    Down,
}

impl From<Direction> for SlideDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => SlideDirection::Up,
            Direction::Down => SlideDirection::Down,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Curve {
    Linear,
    Decelerate,
    Accelerate,
    AccelerateDecelerate,
    FastOutSlowIn,
}

impl From<Curve> for Easing {
    fn from(curve: Curve) -> Self {
        match curve {
            Curve::Linear => Easing::Linear,
            Curve::Decelerate => Easing::Decelerate,
            Curve::Accelerate => Easing::Accelerate,
            Curve::AccelerateDecelerate => Easing::AccelerateDecelerate,
            Curve::FastOutSlowIn => Easing::FastOutSlowIn,
        }
    }
}

/// Stand-in view with fixed geometry.
struct ReplayElement {
    offset: f32,
    extent: f32,
    top: f32,
    parent: f32,
}

impl ReplayElement {
    fn bounds(&self) -> Rect {
        Rect::new(0.0, self.top + self.offset, 320.0, self.extent)
    }
}

impl SliderElement for ReplayElement {
    fn offset(&self) -> f32 {
        self.offset
    }

    fn set_offset(&mut self, offset: f32) {
        log::trace!("offset {} -> {}", self.offset, offset);
        self.offset = offset;
    }

    fn extent(&self) -> f32 {
        self.extent
    }

    fn top_edge(&self) -> f32 {
        self.top
    }

    fn parent_extent(&self) -> Option<f32> {
        Some(self.parent)
    }

    fn perform_click(&mut self) {
        println!("click");
    }

    fn hide_soft_input(&mut self) {
        println!("hide soft input");
    }
}

struct PrintListener;

impl SlideListener for PrintListener {
    fn on_slide(&self, percent: f32) {
        println!("slide {percent:6.2}%");
    }

    fn on_state_changed(&self, state: SlideState) {
        println!("state {state}");
    }
}

struct Replayer {
    runtime: FrameRuntime,
    element: Rc<RefCell<ReplayElement>>,
    slider: Slider,
    frame_time_nanos: u64,
    frames: usize,
}

impl Replayer {
    fn touch(&mut self, event: TouchEvent) {
        let taken = self.slider.on_touch(TouchSource::Slider, &event);
        log::debug!("{:?} at {} taken: {taken}", event.phase, event.position.y);
    }

    fn frame(&mut self) {
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        self.frames += 1;
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
    }

    fn run(&mut self, step: Step) -> Result<()> {
        match step {
            Step::Press { y } => self.touch(TouchEvent::press(POINTER_X, y)),
            Step::Drag { y } => self.touch(TouchEvent::drag(POINTER_X, y)),
            Step::Cancel { y } => self.touch(TouchEvent::cancel(POINTER_X, y)),
            Step::Release { y } => {
                let bounds = self.element.borrow().bounds();
                self.touch(TouchEvent::release(POINTER_X, y, false).hit_tested(bounds));
            }
            Step::Frames { count } => {
                for _ in 0..count {
                    self.frame();
                }
            }
            Step::Idle => {
                let mut pumped = 0;
                while self.runtime.has_frame_callbacks() {
                    if pumped == MAX_IDLE_FRAMES {
                        bail!("animation still running after {MAX_IDLE_FRAMES} frames");
                    }
                    self.frame();
                    pumped += 1;
                }
            }
            Step::Show => self.slider.show(),
            Step::Hide => self.slider.hide(),
            Step::Toggle => self.slider.toggle(),
        }
        Ok(())
    }
}

fn load_saved_state(path: &Path) -> Result<SavedState> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading saved state {}", path.display()))?;
    Ok(SavedState::from_json(&text)?)
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let steps = match &cli.script {
        Some(path) => script::load(path)?,
        None => script::default_swipe(cli.extent),
    };
    let restored = cli
        .restore
        .as_deref()
        .map(load_saved_state)
        .transpose()?;

    let runtime = FrameRuntime::default();
    let element = Rc::new(RefCell::new(ReplayElement {
        offset: 0.0,
        extent: cli.extent,
        top: cli.top,
        parent: cli.parent,
    }));
    let view: SharedElement = element.clone();

    let mut builder = SlideBuilder::new(runtime.frame_clock())
        .slider_view(view)
        .saved_state(restored.as_ref())
        .slide_direction(cli.direction.into())
        .auto_slide_duration(cli.duration)
        .interpolator(cli.curve.into())
        .logging_enabled(cli.debug)
        .listener(Rc::new(PrintListener));
    if cli.slide_to_parent {
        builder = builder.slide_to_parent();
    }
    let slider = builder.build()?;
    log::info!(
        "replaying {} steps, slide distance {}",
        steps.len(),
        slider.slide_distance()
    );

    let mut replayer = Replayer {
        runtime,
        element,
        slider,
        frame_time_nanos: 0,
        frames: 0,
    };
    let started = Instant::now();
    for step in steps {
        replayer.run(step)?;
    }
    log::info!(
        "done in {:?}: {} frames, offset {}, state {}",
        started.elapsed(),
        replayer.frames,
        replayer.element.borrow().offset,
        replayer.slider.current_state()
    );

    if let Some(path) = &cli.save {
        let json = replayer.slider.save_state().to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("writing saved state {}", path.display()))?;
    }
    Ok(())
}
