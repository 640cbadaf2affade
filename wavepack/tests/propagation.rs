use ndarray as nd;
use proptest::prelude::*;
use wavepack::{
    grid::{ Grid, Well },
    leapfrog::Leapfrog,
    sampler::frame_count,
    sim::{ Config, Simulation },
    utils::{ mean_position, total_probability },
};

// coarse version of the reference scenario that still resolves the packet
fn coarse() -> Config {
    Config {
        dx: 0.005,
        dt: 2.5e-6,
        nt: 4001,
        cadence: 500,
        energy_ratio: 0.5,
        ..Config::default()
    }
}

#[test]
fn reference_initial_frame() {
    let sim = Simulation::new(Config { nt: 1, ..Config::default() }).unwrap();
    assert_eq!(sim.grid().len(), 2000);
    let history = sim.run().unwrap();
    assert_eq!(history.len(), 1);

    let a2 = sim.config().packet().amplitude().powi(2);
    let frame = history.get(0).unwrap();
    let j = sim.grid().nearest(0.6);
    assert!((frame[j] - a2).abs() < 1e-9 * a2);
    assert!(frame[0] < 1e-6 * a2);
    assert!(frame[sim.grid().len() - 1] < 1e-6 * a2);
    assert!(history.get(1).is_err());
}

#[test]
fn reference_frame_count() {
    assert_eq!(frame_count(90000, 1000), 91);
    // full step count on a coarser grid
    let sim = Simulation::new(Config { dx: 0.01, ..Config::default() }).unwrap();
    let history = sim.run().unwrap();
    assert_eq!(history.len(), 91);
    assert_eq!(history.frames().dim(), (91, 200));
}

#[test]
fn boundaries_fixed_every_step() {
    let sim = Simulation::new(coarse()).unwrap();
    let config = sim.config();
    let potential = sim.potential();
    let mut state = sim.initial_state().clone();
    let mut rho = state.density();
    let mut stepper = Leapfrog::new(config.dx, config.dt, &potential).unwrap();
    assert!(state.boundaries_fixed());
    for i in 1..config.nt {
        stepper.step(i, &mut state, &mut rho).unwrap();
        assert!(state.boundaries_fixed(), "step {i}");
    }
    let n = rho.len();
    assert_eq!((rho[0], rho[n - 1]), (0.0, 0.0));
}

#[test]
fn probability_conserved() {
    let sim = Simulation::new(coarse()).unwrap();
    assert!(sim.stability_number() < 1.0);
    let history = sim.run().unwrap();
    let dx = sim.grid().dx();
    let p0 = total_probability(&history.get(0).unwrap(), dx);
    assert!((p0 - 1.0).abs() < 1e-3);
    for (f, frame) in history.iter().enumerate() {
        let p = total_probability(&frame, dx);
        assert!((p - p0).abs() < 1e-2 * p0, "frame {f}: {p} vs {p0}");
    }
}

#[test]
fn deterministic() {
    let sim = Simulation::new(coarse()).unwrap();
    let a = sim.run().unwrap();
    let b = sim.run().unwrap();
    assert_eq!(a, b);
    let c = Simulation::new(coarse()).unwrap().run().unwrap();
    assert_eq!(a, c);
}

#[test]
fn free_packet_drifts_at_group_velocity() {
    let k = 20.0;
    let config = Config {
        dx: 0.005,
        dt: 2.5e-6,
        nt: 8001,
        cadence: 1000,
        v0: 0.0,
        xc: 0.6,
        sigma: 0.15,
        wavenumber: Some(k),
        ..Config::default()
    };
    let sim = Simulation::new(config).unwrap();
    assert!(sim.potential().iter().all(|vk| *vk == 0.0));
    let history = sim.run().unwrap();
    assert_eq!(history.len(), 9);

    let x = sim.grid().x();
    let x0 = mean_position(&x, &history.get(0).unwrap());
    assert!((x0 - 0.6).abs() < 1e-6);

    // each step advances one of the two parts by dt, so a pair of steps is
    // one full dt of physical time
    let last = history.len() - 1;
    let step = 1 + (last - 1) * config.cadence;
    let t = step as f64 * config.dt / 2.0;
    let x1 = mean_position(&x, &history.get(last).unwrap());
    let v = (x1 - x0) / t;

    // ω = (4 / dx²) sin²(k dx / 2)
    let v_group = 2.0 * (k * config.dx).sin() / config.dx;
    assert!((v - v_group).abs() < 0.03 * v_group, "{v} vs {v_group}");
}

#[test]
fn drift_scales_with_wavenumber() {
    let run = |k: f64| {
        let config = Config {
            dx: 0.005,
            dt: 2.5e-6,
            nt: 4001,
            cadence: 2000,
            v0: 0.0,
            xc: 0.6,
            sigma: 0.15,
            wavenumber: Some(k),
            ..Config::default()
        };
        let sim = Simulation::new(config).unwrap();
        let history = sim.run().unwrap();
        let x = sim.grid().x();
        mean_position(&x, &history.get(2).unwrap())
            - mean_position(&x, &history.get(0).unwrap())
    };
    let d10 = run(10.0);
    let d20 = run(20.0);
    assert!(d10 > 0.0);
    assert!((d20 / d10 - 2.0).abs() < 0.05);
}

proptest! {
    #[test]
    fn potential_matches_well(
        dx in 0.002_f64..0.02,
        start in 0.0_f64..1.0,
        width in 0.01_f64..0.9,
        v0 in -5000.0_f64..-1.0,
    ) {
        let grid = Grid::new(dx, 2.0).unwrap();
        let well = Well { start, end: start + width, v0 };
        let v = well.potential(&grid).unwrap();
        prop_assert_eq!(v.len(), grid.len());
        for (xk, vk) in grid.x().iter().zip(v.iter()) {
            let inside = *xk >= start && *xk <= start + width;
            prop_assert_eq!(*vk == v0, inside);
            if !inside { prop_assert_eq!(*vk, 0.0); }
        }
    }
}

#[test]
fn potential_is_static_across_runs() {
    let sim = Simulation::new(coarse()).unwrap();
    let before: nd::Array1<f64> = sim.potential().to_owned();
    sim.run().unwrap();
    assert_eq!(sim.potential(), before);
}
