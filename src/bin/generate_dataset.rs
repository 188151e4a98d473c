//! Regenerates `assets/penguins.csv`, the dataset bundled into the binary.
//!
//! Deterministic (fixed seed), so repeated runs produce the same file.
//! Measurement distributions follow the published Palmer Penguins
//! per-species statistics.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Per-species measurement distributions: (mean, std dev).
struct SpeciesProfile {
    name: &'static str,
    islands: &'static [&'static str],
    count: usize,
    bill_length: (f64, f64),
    bill_depth: (f64, f64),
    flipper_length: (f64, f64),
    body_mass: (f64, f64),
}

const PROFILES: [SpeciesProfile; 3] = [
    SpeciesProfile {
        name: "Adelie",
        islands: &["Torgersen", "Biscoe", "Dream"],
        count: 60,
        bill_length: (38.8, 2.7),
        bill_depth: (18.3, 1.2),
        flipper_length: (190.0, 6.5),
        body_mass: (3700.0, 460.0),
    },
    SpeciesProfile {
        name: "Chinstrap",
        islands: &["Dream"],
        count: 30,
        bill_length: (48.8, 3.3),
        bill_depth: (18.4, 1.1),
        flipper_length: (196.0, 7.1),
        body_mass: (3733.0, 384.0),
    },
    SpeciesProfile {
        name: "Gentoo",
        islands: &["Biscoe"],
        count: 50,
        bill_length: (47.5, 3.1),
        bill_depth: (15.0, 1.0),
        flipper_length: (217.0, 6.5),
        body_mass: (5076.0, 504.0),
    },
];

/// Rows whose measurements are blanked out, mirroring the NA rows in the
/// real survey data.
const MISSING_ROWS: [usize; 2] = [3, 97];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "assets/penguins.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "species",
        "island",
        "bill_length_mm",
        "bill_depth_mm",
        "flipper_length_mm",
        "body_mass_g",
        "sex",
        "year",
    ])?;

    let mut row_id = 0usize;
    for profile in &PROFILES {
        for i in 0..profile.count {
            let bill_length = rng
                .gauss(profile.bill_length.0, profile.bill_length.1)
                .clamp(30.0, 60.0);
            let bill_depth = rng
                .gauss(profile.bill_depth.0, profile.bill_depth.1)
                .clamp(13.0, 22.0);
            let flipper = (rng
                .gauss(profile.flipper_length.0, profile.flipper_length.1)
                .round() as i64)
                .clamp(170, 235);
            // Masses in the survey come in 25 g steps.
            let mass = (((rng.gauss(profile.body_mass.0, profile.body_mass.1) / 25.0).round()
                * 25.0) as i64)
                .clamp(2700, 6400);

            let island = profile.islands[i % profile.islands.len()];
            let sex = if i % 2 == 0 { "male" } else { "female" };
            let year = (2007 + i % 3).to_string();

            if MISSING_ROWS.contains(&row_id) {
                writer.write_record([
                    profile.name,
                    island,
                    "NA",
                    "NA",
                    "NA",
                    "NA",
                    "NA",
                    year.as_str(),
                ])?;
            } else {
                let bill_length = format!("{bill_length:.1}");
                let bill_depth = format!("{bill_depth:.1}");
                let flipper = flipper.to_string();
                let mass = mass.to_string();
                writer.write_record([
                    profile.name,
                    island,
                    bill_length.as_str(),
                    bill_depth.as_str(),
                    flipper.as_str(),
                    mass.as_str(),
                    sex,
                    year.as_str(),
                ])?;
            }
            row_id += 1;
        }
    }

    writer.flush()?;
    println!("Wrote {row_id} penguins to {output_path}");
    Ok(())
}
