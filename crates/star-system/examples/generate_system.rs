//! Generates one Sun-like system and prints a summary.
//!
//! Run with: cargo run --example generate_system -- [seed] [--json]
//! Set RUST_LOG=info (or debug) to watch accretion and the climate loop.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use star_system::{GenerationConfig, Planet, generate_system};
use stellar::Star;
use units::{Mass, Time};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let seed = args
        .iter()
        .find_map(|a| a.parse::<u64>().ok())
        .unwrap_or(42);

    let sun = match Star::new(Mass::from_solar_masses(1.0), Time::from_gyr(4.6)) {
        Ok(star) => star.with_name("Sol analogue"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let config = GenerationConfig::default().with_random_tilt();
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let system = match generate_system(&sun, &config, &mut rng) {
        Ok(system) => system,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&system) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("{e}"),
        }
        return;
    }

    println!("╔═══════════════════════════════════════════════════════╗");
    println!("║   {:<52}║", system.metadata.display_name());
    println!("╚═══════════════════════════════════════════════════════╝");
    println!(
        "Star: {} ({:.2} M☉, L = {:.3}, ecosphere {:.2} AU, seed {seed})\n",
        sun.display_name(),
        sun.mass_ratio(),
        sun.luminosity_ratio(),
        sun.r_ecosphere().to_au()
    );

    println!(
        "{:>3}  {:>8}  {:<14}  {:>16}  {:>9}  {:>9}  {:>8}  {:>5}",
        "#", "a (AU)", "type", "mass", "radius km", "pressure", "temp K", "moons"
    );
    for (i, planet) in system.planets.iter().enumerate() {
        print_row(&(i + 1).to_string(), planet);
        for (j, moon) in planet.moons.iter().enumerate() {
            print_row(&format!("{}.{}", i + 1, j + 1), moon);
        }
    }

    let habitable = system.habitable_candidates();
    println!(
        "\n{} planets, {} moons, {} breathable",
        system.planets.len(),
        system.moon_count(),
        habitable.len()
    );
}

fn print_row(label: &str, planet: &Planet) {
    println!(
        "{:>3}  {:>8.3}  {:<14}  {:>16}  {:>9.0}  {:>9.1}  {:>8.1}  {:>5}",
        label,
        planet.semi_major_axis().to_au(),
        planet.planet_type.to_string(),
        planet.mass().to_string(),
        planet.radius().to_km(),
        planet.surface.pressure.to_millibars(),
        planet.surface.surface_temp.to_kelvin(),
        planet.moons.len()
    );
}
