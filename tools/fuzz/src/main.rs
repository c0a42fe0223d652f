use afl::fuzz;
use es_fiscal_id::{
    guess_family, validate, IdentifierFamily, ValidationOptions, ValidationOutcome,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_family(rng: &mut StdRng) -> IdentifierFamily {
    match rng.gen_range(0..4) {
        0 => IdentifierFamily::Nif,
        1 => IdentifierFamily::Nie,
        2 => IdentifierFamily::Cif,
        _ => IdentifierFamily::Other,
    }
}

fn gen_options(rng: &mut StdRng) -> ValidationOptions {
    ValidationOptions {
        require_control_character: rng.gen_bool(0.5),
        auto_append_control_character: rng.gen_bool(0.5),
        case_insensitive: rng.gen_bool(0.5),
        allow_nie_as_nif: rng.gen_bool(0.5),
    }
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let family = gen_family(&mut rng);
    let options = gen_options(&mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Family: {:?}", family);
        println!("Options: {:?}", options);
    }

    let outcome = validate(input, family, &options);

    #[cfg(feature = "manual_test")]
    println!("Outcome: {:?}", outcome);

    if let ValidationOutcome::Valid(canonical) = &outcome {
        assert_eq!(canonical.to_ascii_uppercase(), *canonical);

        // Canonical values are stable under the same options
        assert_eq!(validate(canonical, family, &options), outcome);

        let appended = canonical.len() == input.len() + 1;
        if appended {
            let required = options.require_control_character(true);
            assert!(validate(canonical, family, &required).is_valid());
        }
    }

    if !input.is_empty() {
        let guessed = guess_family(input);
        assert!(guessed.is_some());
    } else {
        assert_eq!(guess_family(input), None);
    }
}
