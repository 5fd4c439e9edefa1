use phasim::{SceneConfig, Scene};
use phasim::run_3d;
use phasim::{dimension, dimension_label, energy_radius, hypersphere_volume, hypersurface_area, cell_size_hint};
use phasim::{bench_sampling, bench_projection, bench_pca_curve};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "phase_shell.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scene_from_yaml() -> Result<SceneConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scene_cfg: SceneConfig = serde_yaml::from_reader(reader)?;

    Ok(scene_cfg)
}

/// Headless mode: print the analytic geometry of the configured shell
fn print_report(scene: &Scene) {
    let d = dimension(scene.params.particles);
    let r = energy_radius(&scene.params);

    println!("D            = {}", dimension_label(d));
    println!("R            = sqrt(2 m E) = {:.6}", r);
    println!("omega_D(R)   = {:.6e}", hypersphere_volume(d, r));
    println!("sigma_D-1(R) = {:.6e}", hypersurface_area(d, r));
    println!("cell hint    = {:.6e}", cell_size_hint(&scene.params));
    println!("samples      = {}", scene.params.samples);
}

fn main() -> Result<()> {
    let scene_cfg = load_scene_from_yaml().expect("failed to load scene");

    let scene = Scene::build_scene(scene_cfg);
    if scene.view.render {
        run_3d(scene);
    } else {
        print_report(&scene);
    }

    //bench_sampling();
    //bench_projection();
    //bench_pca_curve();

    Ok(())
}
