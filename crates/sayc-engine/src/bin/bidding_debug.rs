//! Deal random boards and let the engine bid all four seats.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sayc_core::{Auction, Hand, Seat};
use sayc_engine::{deal_random_hands, ConventionCatalog, Engine};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed for reproducible deals
    #[arg(short, long)]
    seed: Option<u64>,

    /// Dealer seat (N, E, S, W)
    #[arg(short, long, default_value = "N")]
    dealer: String,

    /// Number of deals to bid
    #[arg(short = 'n', long, default_value_t = 1)]
    deals: usize,

    /// Convention card YAML file (default: standard SAYC)
    #[arg(short, long)]
    card: Option<String>,

    /// Show rule-selection trace output
    #[arg(short, long)]
    verbose: bool,
}

fn print_hands(hands: &[Hand; 4]) {
    for seat in Seat::ALL {
        println!("  {}: {}", seat, hands[seat.idx()]);
    }
}

fn main() {
    let args = Args::parse();
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let dealer = args
        .dealer
        .chars()
        .next()
        .and_then(Seat::from_char)
        .unwrap_or(Seat::North);

    let catalog = match &args.card {
        Some(path) => {
            let yaml = match std::fs::read_to_string(path) {
                Ok(yaml) => yaml,
                Err(err) => {
                    eprintln!("Error: cannot read {}: {}", path, err);
                    return;
                }
            };
            match ConventionCatalog::from_yaml(&yaml) {
                Ok(catalog) => catalog,
                Err(err) => {
                    eprintln!("Error: bad convention card: {}", err);
                    return;
                }
            }
        }
        None => ConventionCatalog::default(),
    };
    let engine = Engine::with_catalog(catalog);

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    println!("Seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    for deal in 1..=args.deals {
        let hands = deal_random_hands(&mut rng);
        println!("\nDeal {} (dealer {}):", deal, dealer);
        print_hands(&hands);
        println!();

        let mut auction = Auction::new(dealer);
        while !auction.is_finished() && auction.len() < 40 {
            let Some(seat) = auction.seat_to_act() else {
                break;
            };
            auction.perspective = seat;
            let record = engine.next_call(&auction, &hands[seat.idx()]);
            println!(
                "  {} {:<4} {}",
                seat,
                record.call.render(),
                record.rationale.as_deref().unwrap_or("")
            );
            auction.push(record);
        }
    }
}
