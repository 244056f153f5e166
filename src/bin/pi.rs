#[macro_use]
extern crate clap;
extern crate mcpi;

use clap::{Arg, App};

use mcpi::estimate_pi;
use mcpi::utils::{rng_from_entropy, rng_from_seed};

fn main() {
    let matches = App::new("pi")
        .about("Estimate the value of Pi by Monte Carlo sampling")
        .arg(Arg::with_name("num-points")
             .long("num-points")
             .value_name("N")
             .default_value("100000")
             .help("Number of random points to draw"))
        .arg(Arg::with_name("seed")
             .long("seed")
             .value_name("SEED")
             .takes_value(true)
             .help("Seed for the random number generator; when omitted, \
                    the generator is seeded from the operating system"))
        .get_matches();

    let num_points =
        value_t!(matches, "num-points", u64)
        .unwrap_or_else(|e| e.exit());
    if num_points == 0 {
        clap::Error::with_description("--num-points must be at least 1",
                                      clap::ErrorKind::InvalidValue).exit();
    }

    let seed = if matches.is_present("seed") {
        Some(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };

    let estimate = match seed {
        Some(seed) => estimate_pi(rng_from_seed(seed), num_points),
        None => estimate_pi(rng_from_entropy(), num_points),
    };

    println!("Number of points: {}", estimate.num_points);
    println!("Points inside circle: {}", estimate.num_inside);
    println!("Estimated value of Pi: {}", estimate.value());
    match seed {
        Some(seed) => println!("Seed used: {}", seed),
        None => println!("Seed used: none"),
    }
}
