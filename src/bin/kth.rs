use clap::{Parser, ValueEnum};
use log::debug;
use momselect::{PivotStrategy, SelectConfig, Selector};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Median of medians, worst-case linear.
    Mom,
    /// Last element of the range.
    Last,
    /// Middle element of the range.
    Middle,
    /// Seeded random element of the range.
    Random,
}

/// Prints the k-th smallest (or largest) of the given integers.
#[derive(Debug, Parser)]
#[command(name = "kth", version)]
struct Args {
    /// 1-based rank to select.
    k: usize,

    /// Values to select from.
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Count ranks from the largest value instead of the smallest.
    #[arg(short, long)]
    largest: bool,

    #[arg(short, long, value_enum, default_value_t = Strategy::Mom)]
    strategy: Strategy,

    /// Seed for the random pivot strategy.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl Args {
    fn pivot_strategy(&self) -> PivotStrategy {
        match self.strategy {
            Strategy::Mom => PivotStrategy::MedianOfMedians,
            Strategy::Last => PivotStrategy::Last,
            Strategy::Middle => PivotStrategy::Middle,
            Strategy::Random => PivotStrategy::Random { seed: self.seed },
        }
    }
}

fn run(args: Args) -> momselect::Result<i64> {
    let selector = Selector::new(SelectConfig::new(args.pivot_strategy()));
    debug!("{:?}", selector.config());

    let mut values = args.values;
    let selection = if args.largest {
        selector.select_by(&mut values, args.k, |a: &i64, b: &i64| b.cmp(a))?
    } else {
        selector.select(&mut values, args.k)?
    };
    debug!(
        "{} rounds, {} comparisons",
        selection.rounds, selection.comparisons
    );
    Ok(selection.value)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(value) => println!("{value}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
