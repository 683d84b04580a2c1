//! Prints the thumbnail camera chosen for a mesh file.
//!
//! Run with: cargo run --example `best_view` -- model.stl [options.json]

use thumbview::*;

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let Some(mesh_path) = args.next() else {
        eprintln!("usage: best_view <mesh.stl|mesh.obj> [options.json]");
        std::process::exit(2);
    };
    let options = match args.next() {
        Some(path) => OptimizerOptions::from_json_file(path)?,
        None => OptimizerOptions::default(),
    };

    let optimizer = ViewOptimizer::new(options);
    let view = analyze_mesh(&mesh_path, &optimizer)?;

    println!("{mesh_path}: {} triangles", view.stats.triangles);
    println!("bounds {:?}", view.stats.bounds.as_array());
    println!();
    println!(
        "{:<6} {:>14} {:>8} {:>8} {:>6} {:>14}",
        "view", "area", "aspect", "penalty", "pref", "score"
    );
    for s in &view.ranked {
        println!(
            "{:<6} {:>14.4} {:>8.3} {:>8.4} {:>6.2} {:>14.4}",
            s.view.name(),
            s.raw_area,
            s.aspect_ratio,
            s.aspect_penalty,
            s.preference,
            s.score
        );
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&view.camera)?);

    Ok(())
}
