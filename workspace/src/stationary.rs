use std::{ fs, path::PathBuf };
use ndarray as nd;
use ndarray_npy::NpzWriter;
use tracing::info;
use wavepack::stationary;

const DEPTH: f64 = 50.0;
const WIDTH: f64 = 20.0;
const NUM_STATES: usize = 10;

// lowest stationary states of a finite square well

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let x: nd::Array1<f64> = nd::Array1::linspace(-50.0, 50.0, 500);
    let dx = x[1] - x[0];
    let v = stationary::square_well(&x, DEPTH, WIDTH);

    let sols = stationary::solve_eigh(dx, &v, NUM_STATES)?;
    for (n, sol) in sols.iter().enumerate() {
        info!(n, e = sol.e);
    }
    let energies: nd::Array1<f64> = sols.iter().map(|sol| sol.e).collect();
    let wfs: nd::Array2<f64>
        = nd::stack(
            nd::Axis(0),
            &sols.iter().map(|sol| sol.wf.view()).collect::<Vec<_>>(),
        )?;
    let densities: nd::Array2<f64> = wfs.mapv(|qk| qk * qk);

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    let mut npz = NpzWriter::new(fs::File::create(outdir.join("stationary.npz"))?);
    npz.add_array("x", &x)?;
    npz.add_array("v", &v)?;
    npz.add_array("e", &energies)?;
    npz.add_array("wf", &wfs)?;
    npz.add_array("density", &densities)?;
    npz.finish()?;
    Ok(())
}
