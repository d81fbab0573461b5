//! Polyshift Demo
//!
//! Morphs a small square outline into a larger one and plays the sequence in
//! a loop in the terminal, with a progress bar. Takes no arguments; the
//! polygons, step size, and transform are fixed. Stop with Ctrl-C.
//!
//! A background task advances the shared playback cursor at a fixed cadence
//! while the main loop renders whatever frame is currently published.
//!
//! Run with: cargo run -p polyshift_app

mod canvas;

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use polyshift_animation::{morph, Playback, Transform};
use polyshift_core::Polygon;

use crate::canvas::{progress_bar, Canvas};

const STEP_SIZE: f64 = 0.005;
const ADVANCE_CADENCE: Duration = Duration::from_millis(15);
const RENDER_CADENCE: Duration = Duration::from_millis(33);

const CANVAS_WIDTH: usize = 64;
const CANVAS_HEIGHT: usize = 30;
const WORLD_EXTENT: f64 = 210.0;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let poly_from = Polygon::from_points([(10, 10), (10, 100), (100, 10), (100, 100)]);
    let poly_to = Polygon::from_points([(10, 10), (10, 200), (200, 10), (200, 200)]);

    let sequence = Arc::new(morph(&poly_from, &poly_to, STEP_SIZE, Transform::Linear));
    tracing::info!(frames = sequence.len(), "morph sequence ready");

    let playback = Arc::new(Playback::new(sequence));

    // Producer: the only task that advances the cursor.
    let producer = {
        let playback = Arc::clone(&playback);
        tokio::spawn(async move {
            let mut cadence = tokio::time::interval(ADVANCE_CADENCE);
            while playback.is_live() {
                cadence.tick().await;
                playback.advance();
            }
        })
    };

    // Consumer: render the published frame until Ctrl-C.
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, WORLD_EXTENT);
    let mut cadence = tokio::time::interval(RENDER_CADENCE);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                playback.halt();
                break;
            }
            _ = cadence.tick() => {
                render(&mut canvas, &playback)?;
            }
        }
    }

    producer.await?;
    println!();
    tracing::info!("playback stopped");
    Ok(())
}

fn render(canvas: &mut Canvas, playback: &Playback) -> Result<()> {
    canvas.clear();
    canvas.draw_polygon(playback.current_frame());

    let mut out = io::stdout().lock();
    // Clear screen, home the cursor, then the frame and its progress bar.
    write!(out, "\x1b[2J\x1b[H{canvas}")?;
    writeln!(out, "{}", progress_bar(playback.progress(), CANVAS_WIDTH - 7))?;
    out.flush()?;
    Ok(())
}
