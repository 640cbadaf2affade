use wavepack::{
    sim::{ Config, Simulation },
    utils::{ argmax, mean_position, total_probability },
};

// propagate a packet onto the reference well on a coarse grid and report how
// the density evolves frame by frame

fn main() {
    let config = Config {
        dx: 0.005,
        dt: 2.5e-6,
        nt: 8001,
        cadence: 500,
        energy_ratio: 0.5,
        ..Config::default()
    };
    let sim = Simulation::new(config).unwrap();
    println!("k = {:.3}", config.k());
    println!("stability number = {:.4}", sim.stability_number());

    let history = sim.run().unwrap();
    let x = sim.grid().x();
    let dx = sim.grid().dx();
    for (f, frame) in history.iter().enumerate() {
        let peak = argmax(&frame).map(|k| x[k]).unwrap_or(f64::NAN);
        println!(
            "frame {:>3}: P = {:.6}  <x> = {:.4}  peak at {:.4}",
            f,
            total_probability(&frame, dx),
            mean_position(&x, &frame),
            peak,
        );
    }
}
