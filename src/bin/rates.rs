//! Print achievable payload capacities and rates for a codeword length.

use dnarank::max_data_bits;

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "rates".to_string());
    let Some(raw) = args.next() else {
        eprintln!("Usage: {program} <codeword_length>");
        std::process::exit(1);
    };
    let codeword_len = match raw.parse::<usize>() {
        Ok(len) if len > 0 => len,
        _ => {
            eprintln!("Invalid codeword length: {raw}");
            std::process::exit(1);
        }
    };

    println!("Codeword length: {codeword_len}");
    println!();
    println!("{:<6}{:<18}{:<18}", "k", "max_input_bits", "rate(bits/base)");
    println!("{}", "-".repeat(42));

    for limit in 1..=5 {
        match max_data_bits(limit, codeword_len) {
            Ok(capacity) => {
                let rate = capacity as f64 / codeword_len as f64;
                println!("{limit:<6}{capacity:<18}{rate:<18.6}");
            }
            Err(err) => {
                eprintln!("k = {limit}: {err}");
                std::process::exit(1);
            }
        }
    }
}
