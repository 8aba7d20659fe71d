use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use burst_core::{
    pack_instances, Canvas, FrameClock, MotionConfig, ParticleFrame, ParticleInstance, Phase,
    Swarm,
};

const CANVAS_WIDTH: f32 = 1280.0;
const CANVAS_HEIGHT: f32 = 720.0;
const SEED: u64 = 42;
const FRAME_MS: f64 = 1000.0 / 60.0;
const CYCLES: f64 = 2.0; // how many full loops to run before exiting
const REPORT_EVERY: u64 = 30; // frames between [frame] log lines

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MotionConfig::default();
    let canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let swarm = Swarm::new(config, canvas, SEED).context("building particle swarm")?;
    let cycle = swarm.cycle();
    log::info!(
        "[swarm] particles={} cycle={:.0}ms canvas={}x{}",
        swarm.len(),
        cycle.period_ms,
        canvas.width,
        canvas.height
    );

    // Real-time pacing is opt-in; by default frames are stepped as fast as possible.
    let realtime = std::env::var_os("BURST_REALTIME").is_some();
    let clock = FrameClock::start();

    let run_ms = cycle.period_ms as f64 * CYCLES;
    let mut frames: Vec<ParticleFrame> = Vec::with_capacity(swarm.len());
    let mut instances: Vec<ParticleInstance> = Vec::with_capacity(swarm.len());
    let mut frame_index: u64 = 0;
    let mut last_cycle = 0;

    loop {
        let raw_ms = if realtime {
            clock.elapsed_ms()
        } else {
            frame_index as f64 * FRAME_MS
        };
        if raw_ms >= run_ms {
            break;
        }

        let cycle_index = cycle.cycle_index(raw_ms);
        if cycle_index != last_cycle {
            log::info!("[frame] clock wrapped into cycle {}", cycle_index);
            last_cycle = cycle_index;
        }

        let looped = cycle.looped(raw_ms);
        swarm.evaluate_into(looped, &mut frames);
        pack_instances(&frames, &mut instances);
        let upload: &[u8] = bytemuck::cast_slice(&instances);

        if frame_index % REPORT_EVERY == 0 {
            report(&swarm, looped, &frames, upload.len());
        }

        frame_index += 1;
        if realtime {
            thread::sleep(Duration::from_secs_f64(FRAME_MS / 1000.0));
        }
    }

    log::info!("[frame] done after {} frames", frame_index);
    Ok(())
}

fn report(swarm: &Swarm, looped: f32, frames: &[ParticleFrame], upload_bytes: usize) {
    let mut phases: HashMap<Phase, usize> = HashMap::new();
    for p in swarm.particles() {
        *phases.entry(p.phase_at(looped)).or_default() += 1;
    }
    let visible = frames.iter().filter(|f| f.pose.is_visible()).count();
    let mean_opacity = if frames.is_empty() {
        0.0
    } else {
        frames.iter().map(|f| f.pose.opacity).sum::<f32>() / frames.len() as f32
    };
    let count = |phase| phases.get(&phase).copied().unwrap_or(0);
    log::info!(
        "[frame] t={:7.1}ms visible={:3} mean_opacity={:.2} asc={} hov={} desc={} done={} upload={}B",
        looped,
        visible,
        mean_opacity,
        count(Phase::Ascending),
        count(Phase::Hovering),
        count(Phase::Descending),
        count(Phase::Finished),
        upload_bytes
    );
    if let Some(first) = frames.first() {
        log::debug!(
            "[frame] #{} {} pos=({:.1},{:.1}) rot={:.2} opacity={:.2}",
            first.key,
            swarm.image_name(first.image).unwrap_or("?"),
            first.pose.translate_x,
            first.pose.translate_y,
            first.pose.rotate_radians,
            first.pose.opacity
        );
    }
}
