use std::{ fs, path::PathBuf };
use ndarray as nd;
use ndarray_npy::NpzWriter;
use tracing::info;
use wavepack::transmission::{ Coefficients, scattering_state, transmission_curve };

const DEPTH: f64 = 10.0;
const HALF_WIDTH: f64 = 1.0;
const E_STATE: f64 = 2.0; // energy of the sampled scattering state

// transmission through a finite square well as a function of energy

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let energies: nd::Array1<f64> = nd::Array1::linspace(0.01, 20.0, 500);
    let t = transmission_curve(&energies, DEPTH, HALF_WIDTH)?;

    let x: nd::Array1<f64>
        = nd::Array1::linspace(-3.0 * HALF_WIDTH, 3.0 * HALF_WIDTH, 1000);
    let psi = scattering_state(&x, E_STATE, DEPTH, HALF_WIDTH)?;
    let coeffs = Coefficients::new(E_STATE, DEPTH, HALF_WIDTH)?;
    info!(e = E_STATE, t = coeffs.transmission(), r = coeffs.reflection());

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    let mut npz
        = NpzWriter::new(fs::File::create(outdir.join("transmission.npz"))?);
    npz.add_array("e", &energies)?;
    npz.add_array("t", &t)?;
    npz.add_array("x", &x)?;
    npz.add_array("psi_re", &psi.mapv(|z| z.re))?;
    npz.add_array("psi_im", &psi.mapv(|z| z.im))?;
    npz.add_array("e_state", &nd::array![E_STATE])?;
    npz.finish()?;
    Ok(())
}
