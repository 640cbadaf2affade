use std::{ env, fs, path::PathBuf };
use anyhow::Context;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use tracing::info;
use wavepack::{
    sim::{ Config, Simulation },
    utils::{ mean_position, total_probability },
};

// propagate a Gaussian packet through a rectangular well and save the density
// frames for animation
//
// usage: wave_packet [config.toml]

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config: Config = match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("couldn't read config file {path}"))?;
            toml::from_str(&text)
                .with_context(|| format!("couldn't parse config file {path}"))?
        },
        None => Config::default(),
    };
    let sim = Simulation::new(config)?;
    info!(k = config.k(), stability_number = sim.stability_number());
    let history = sim.run()?;

    let x = sim.grid().x();
    let dx = sim.grid().dx();
    let norm: nd::Array1<f64>
        = history.iter().map(|frame| total_probability(&frame, dx)).collect();
    let xmean: nd::Array1<f64>
        = history.iter().map(|frame| mean_position(&x, &frame)).collect();

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    let outfile = outdir.join("wave_packet.npz");
    let mut npz = NpzWriter::new(fs::File::create(&outfile)?);
    npz.add_array("x", &x)?;
    npz.add_array("v", &sim.potential())?;
    npz.add_array("density", &history.frames())?;
    npz.add_array("norm", &norm)?;
    npz.add_array("xmean", &xmean)?;
    npz.add_array("k", &nd::array![config.k()])?;
    npz.add_array("energy_ratio", &nd::array![config.energy_ratio])?;
    npz.add_array("cadence", &nd::array![config.cadence as u64])?;
    npz.add_array("dt", &nd::array![config.dt])?;
    npz.finish()?;
    info!(frames = history.len(), path = %outfile.display(), "wrote density history");
    Ok(())
}
