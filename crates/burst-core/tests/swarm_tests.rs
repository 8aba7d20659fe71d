// Tests for the particle swarm, the cycle clock and instance packing.

use burst_core::*;

const CANVAS: Canvas = Canvas::new(1280.0, 720.0);

fn make_swarm(seed: u64) -> Swarm {
    Swarm::new(MotionConfig::default(), CANVAS, seed).unwrap()
}

#[test]
fn swarm_generates_configured_count_in_key_order() {
    let swarm = make_swarm(42);
    assert_eq!(swarm.len(), 50);
    assert!(!swarm.is_empty());
    let frames = swarm.evaluate(0.0);
    assert_eq!(frames.len(), 50);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.key, i);
        assert_eq!(frame.color, swarm.particles()[i].color);
        assert_eq!(frame.image, swarm.particles()[i].image);
        assert!(swarm.image_name(frame.image).is_some());
    }
}

#[test]
fn swarm_is_reproducible_from_its_seed() {
    let a = make_swarm(7);
    let b = make_swarm(7);
    assert_eq!(a.particles(), b.particles());
    let c = make_swarm(8);
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn particle_parameters_do_not_depend_on_swarm_size() {
    let small = Swarm::new(MotionConfig::default().with_count(5), CANVAS, 11).unwrap();
    let large = Swarm::new(MotionConfig::default().with_count(20), CANVAS, 11).unwrap();
    assert_eq!(small.particles(), &large.particles()[..5]);
}

#[test]
fn empty_swarm_is_allowed() {
    let config = MotionConfig::default()
        .with_count(0)
        .with_colors(Vec::new())
        .with_images(Vec::<String>::new());
    let swarm = Swarm::new(config, CANVAS, 1).unwrap();
    assert!(swarm.is_empty());
    assert!(swarm.evaluate(123.0).is_empty());
}

#[test]
fn swarm_rejects_invalid_config() {
    let config = MotionConfig::default().with_phase_durations(
        Range::new(600.0, 500.0),
        Range::fixed(200.0),
        Range::new(2000.0, 6000.0),
    );
    assert!(Swarm::new(config, CANVAS, 0).is_err());
    let config = MotionConfig::default().with_images(Vec::<String>::new());
    assert!(Swarm::new(config, CANVAS, 0).is_err());
    assert!(Swarm::new(MotionConfig::default(), Canvas::new(-1.0, 10.0), 0).is_err());
}

#[test]
fn regenerate_swaps_in_new_parameters_and_keeps_canvas() {
    let mut swarm = make_swarm(1);
    let before = swarm.particles().to_vec();
    swarm.regenerate(2);
    assert_eq!(swarm.len(), before.len());
    assert_ne!(swarm.particles(), &before[..]);
    assert_eq!(swarm.canvas(), CANVAS);
    swarm.regenerate(1);
    assert_eq!(swarm.particles(), &before[..]);
}

#[test]
fn evaluate_into_reuses_the_buffer() {
    let swarm = make_swarm(5);
    let mut out = Vec::new();
    swarm.evaluate_into(300.0, &mut out);
    assert_eq!(out, swarm.evaluate(300.0));
    swarm.evaluate_into(900.0, &mut out);
    assert_eq!(out.len(), swarm.len());
    assert_eq!(out, swarm.evaluate(900.0));
}

#[test]
fn frame_at_loops_the_raw_clock() {
    let swarm = make_swarm(9);
    let period = swarm.cycle().period_ms as f64;
    assert_eq!(period, 6800.0);
    assert_eq!(swarm.frame_at(250.0), swarm.evaluate(250.0));
    assert_eq!(swarm.frame_at(250.0 + 3.0 * period), swarm.evaluate(250.0));
}

#[test]
fn every_particle_is_invisible_at_the_end_of_a_cycle() {
    // Upper-bound cycle length leaves every particle fully faded out.
    let swarm = make_swarm(13);
    let end = swarm.cycle().period_ms;
    for frame in swarm.evaluate(end) {
        assert_eq!(frame.pose.opacity, 0.0, "particle {} still visible", frame.key);
    }
    for frame in swarm.evaluate(0.0) {
        assert_eq!(frame.pose.opacity, 0.0);
    }
}

#[test]
fn cycle_clock_handles_edge_inputs() {
    let cycle = CycleClock::new(1000.0);
    assert_eq!(cycle.looped(0.0), 0.0);
    assert_eq!(cycle.looped(-50.0), 0.0);
    assert_eq!(cycle.looped(f64::NAN), 0.0);
    assert_eq!(cycle.looped(f64::INFINITY), 0.0);
    assert_eq!(cycle.looped(1000.0), 0.0);
    assert_eq!(cycle.looped(2500.0), 500.0);
    assert_eq!(cycle.cycle_index(2500.0), 2);
    // Long-running clocks stay precise.
    assert_eq!(cycle.looped(86_400_000.0 * 30.0 + 123.0), 123.0);
    assert_eq!(CycleClock::new(0.0).looped(500.0), 0.0);
}

#[test]
fn cycle_clock_is_non_decreasing_within_a_cycle() {
    let cycle = CycleClock::new(6800.0);
    let mut prev = cycle.looped(0.0);
    for i in 1..6800 {
        let t = cycle.looped(i as f64);
        assert!(t >= prev);
        assert!(t < cycle.period_ms);
        prev = t;
    }
}

#[test]
fn frame_clock_moves_forward() {
    let clock = FrameClock::start();
    let a = clock.elapsed_ms();
    let b = clock.elapsed_ms();
    assert!(a >= 0.0);
    assert!(b >= a);
}

#[test]
fn instances_carry_pose_color_and_opacity() {
    let swarm = make_swarm(21);
    let frames = swarm.evaluate(450.0);
    let mut instances = Vec::new();
    pack_instances(&frames, &mut instances);
    assert_eq!(instances.len(), frames.len());
    for (frame, inst) in frames.iter().zip(&instances) {
        assert_eq!(inst.translate, [frame.pose.translate_x, frame.pose.translate_y]);
        assert_eq!(inst.rotate, frame.pose.rotate_radians);
        assert_eq!(inst.scale, frame.pose.scale);
        assert_eq!(&inst.color[..3], &frame.color[..]);
        assert_eq!(inst.color[3], frame.pose.opacity);
        assert_eq!(inst.image as usize, frame.image);
    }
    let bytes: &[u8] = bytemuck::cast_slice(&instances);
    assert_eq!(bytes.len(), instances.len() * std::mem::size_of::<ParticleInstance>());
    assert_eq!(std::mem::size_of::<ParticleInstance>(), 48);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_evaluation_matches_sequential() {
    let swarm = make_swarm(3);
    for t in [0.0, 275.0, 700.0, 3000.0, 6800.0] {
        assert_eq!(swarm.par_evaluate(t), swarm.evaluate(t));
    }
}
