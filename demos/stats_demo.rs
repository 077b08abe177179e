use clap::Parser;
use prime_chain::AssociativeTable;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'k', long = "keys", default_value_t = 1000)]
    keys: u64,

    #[arg(short = 'v', long = "values_per_key", default_value_t = 1)]
    values_per_key: u64,

    #[arg(short = 'c', long = "initial_capacity", default_value_t = 0)]
    initial_capacity: usize,
}

fn main() {
    let args = Args::parse();

    println!(
        "Creating AssociativeTable with initial capacity: {}",
        args.initial_capacity
    );

    let mut table: AssociativeTable<u64, u64> =
        AssociativeTable::with_capacity(args.initial_capacity);

    println!("Actual capacity: {}", table.capacity());
    println!(
        "Inserting {} keys with {} values each...",
        args.keys, args.values_per_key
    );

    let mut num_failures = 0;
    let mut num_growths = 0;
    for key in 0..args.keys {
        for value in 0..args.values_per_key {
            let before = table.capacity();
            if !table.insert(key, value) {
                num_failures += 1;
            }
            if table.capacity() != before {
                num_growths += 1;
            }
        }
    }

    println!(
        "Stored {} values, final capacity {}",
        table.len(),
        table.capacity()
    );
    println!("Rehashes during insertion: {}", num_growths);

    table.debug_stats().print();

    println!("chain histogram:");
    for (links, count) in table.chain_histogram().iter().enumerate() {
        println!("{:>2} | {}", links, count);
    }

    println!(
        "Number of failed insertions: {} ({:.02}%)",
        num_failures,
        num_failures as f64 / (args.keys * args.values_per_key).max(1) as f64 * 100.0
    );
}
