// Tests for the bounded-dynamics approach controller.

use flow_core::{controller, ControllerState, FlowConfig, SUBSTEPS};

fn cfg() -> FlowConfig {
    FlowConfig::default()
}

#[test]
fn converges_to_target_from_rest() {
    let cfg = cfg();
    let mut state = ControllerState::default();
    for _ in 0..120 {
        controller::step(&mut state, 1.0 / 60.0, 5.0, &cfg);
    }
    assert!(
        (state.position - 5.0).abs() < 1e-3,
        "position {} did not settle on the target",
        state.position
    );
}

#[test]
fn velocity_never_exceeds_v_max() {
    let cfg = cfg();
    let mut state = ControllerState::default();
    // Far target first, then a reversal mid-flight.
    for frame in 0..240 {
        let target = if frame < 120 { 12.0 } else { 0.0 };
        controller::step(&mut state, 1.0 / 30.0, target, &cfg);
        assert!(
            state.velocity.abs() <= cfg.v_max + 1e-9,
            "velocity {} exceeded v_max at frame {frame}",
            state.velocity
        );
    }
}

#[test]
fn acceleration_ramps_at_a_max_from_rest() {
    let cfg = cfg();
    let mut state = ControllerState::default();
    let dt = 1.0 / 30.0;
    // Toward a far target the commanded speed saturates at v_max, so the
    // whole first frame is one a_max ramp.
    controller::step(&mut state, dt, 10.0, &cfg);
    assert!(
        (state.velocity - cfg.a_max * dt).abs() < 1e-9,
        "expected a pure ramp, got velocity {}",
        state.velocity
    );
}

#[test]
fn per_substep_velocity_change_is_bounded_while_accelerating() {
    let cfg = cfg();
    let dt = 1.0 / 30.0;
    let h = dt / SUBSTEPS as f64;
    // Step one substep-sized slice at a time; while speeding up, the whole
    // slice can accelerate by at most a_max * h.
    let mut state = ControllerState::default();
    let mut prev = state.velocity;
    for _ in 0..200 {
        controller::step(&mut state, h, 10.0, &cfg);
        let dv = state.velocity - prev;
        if state.velocity.abs() > prev.abs() {
            assert!(
                dv.abs() <= cfg.a_max * h + 1e-9,
                "accelerating jump {dv} exceeded the bound"
            );
        }
        prev = state.velocity;
    }
}

#[test]
fn deceleration_is_not_clamped() {
    let cfg = cfg();
    let dt = 1.0 / 60.0;
    // Moving at full speed away from the target: the commanded velocity
    // reverses far faster than a_max would ever allow.
    let mut state = ControllerState {
        position: 0.0,
        velocity: cfg.v_max,
    };
    controller::step(&mut state, dt, -10.0, &cfg);
    assert!(
        (state.velocity + cfg.v_max).abs() < 1e-9,
        "expected an immediate reversal to -v_max, got {}",
        state.velocity
    );
    // The swing is 2*v_max in one frame, far beyond the accelerating bound.
    assert!(2.0 * cfg.v_max > cfg.a_max * dt);
}

#[test]
fn zero_dt_is_a_no_op() {
    let cfg = cfg();
    let mut state = ControllerState {
        position: 1.25,
        velocity: 0.5,
    };
    let before = state;
    controller::step(&mut state, 0.0, 7.0, &cfg);
    assert_eq!(state, before);
}

#[test]
fn stepping_is_deterministic() {
    let cfg = cfg();
    let mut a = ControllerState::default();
    let mut b = ControllerState::default();
    for frame in 0..100 {
        let target = if frame % 30 < 15 { 8.0 } else { 2.0 };
        controller::step(&mut a, 1.0 / 60.0, target, &cfg);
        controller::step(&mut b, 1.0 / 60.0, target, &cfg);
    }
    assert_eq!(a, b);
}

#[test]
fn target_jump_keeps_position_continuous() {
    let cfg = cfg();
    let dt = 1.0 / 60.0;
    let mut state = ControllerState::default();
    let mut prev_pos = state.position;
    for frame in 0..300 {
        // Selection jumps around mid-flight.
        let target = match frame {
            0..=59 => 10.0,
            60..=119 => 0.0,
            _ => 14.0,
        };
        controller::step(&mut state, dt, target, &cfg);
        let moved = (state.position - prev_pos).abs();
        assert!(
            moved <= cfg.v_max * dt + 1e-9,
            "position teleported by {moved} at frame {frame}"
        );
        prev_pos = state.position;
    }
}

#[test]
fn impulse_is_a_unit_bump_peaking_at_its_width() {
    assert_eq!(controller::impulse(0.0, 0.5), 0.0);
    assert!((controller::impulse(0.5, 0.5) - 1.0).abs() < 1e-12);
    assert!(controller::impulse(0.1, 0.5) < 1.0);
    assert!(controller::impulse(2.0, 0.5) < 1.0);
    // Unimodal: rising before the peak, falling after.
    assert!(controller::impulse(0.2, 0.5) > controller::impulse(0.1, 0.5));
    assert!(controller::impulse(1.0, 0.5) > controller::impulse(2.0, 0.5));
}

#[test]
fn overshoot_stays_small() {
    let cfg = cfg();
    let mut state = ControllerState::default();
    let mut max_pos: f64 = 0.0;
    for _ in 0..300 {
        controller::step(&mut state, 1.0 / 60.0, 5.0, &cfg);
        max_pos = max_pos.max(state.position);
    }
    // Deceleration is unclamped, so arrivals barely overshoot.
    assert!(
        max_pos < 5.0 + 0.1,
        "overshoot to {max_pos} is larger than expected"
    );
}
