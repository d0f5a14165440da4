/// GLIDE Project
/// `File` timer.rs
/// `Description` Frame timer module
/// `Author` TioT2
/// `Last changed` 18.10.2026

use std::time::{Duration, Instant};

/// Period FPS value is averaged over
const FPS_PERIOD: Duration = Duration::from_secs(1);

/// Frame timer representation structure
pub struct Timer {
    start: Instant,
    last_frame: Instant,
    fps_period_start: Instant,
    time: f32,
    delta_time: f32,
    fps: f32,
    frame_count: u64,
    period_frame_count: u32,
} // struct Timer

impl Timer {
    /// Timer constructor.
    /// * Returns newly created timer with count, starting from creation moment
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    } // fn new

    fn started_at(now: Instant) -> Self {
        Self {
            start: now,
            last_frame: now,
            fps_period_start: now,
            time: 0.0,
            delta_time: 0.0,
            fps: 0.0,
            frame_count: 0,
            period_frame_count: 0,
        }
    } // fn started_at

    /// Frame end marking function
    pub fn response(&mut self) {
        self.response_at(Instant::now());
    } // fn response

    fn response_at(&mut self, now: Instant) {
        self.time = (now - self.start).as_secs_f32();
        self.delta_time = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.frame_count += 1;
        self.period_frame_count += 1;

        let period = now - self.fps_period_start;
        if period >= FPS_PERIOD {
            self.fps = self.period_frame_count as f32 / period.as_secs_f32();
            self.fps_period_start = now;
            self.period_frame_count = 0;
        }
    } // fn response_at

    /// Time since timer creation getting function
    pub fn get_time(&self) -> f32 {
        self.time
    } // fn get_time

    /// Time between neighbour frames getting function
    pub fn get_delta_time(&self) -> f32 {
        self.delta_time
    } // fn get_delta_time

    /// FPS getting function
    /// * Returns FPS, averaged over last full period
    pub fn get_fps(&self) -> f32 {
        self.fps
    } // fn get_fps

    /// Total frame count getting function
    pub fn get_frame_count(&self) -> u64 {
        self.frame_count
    } // fn get_frame_count
} // impl Timer


// file timer.rs
